//! Config discovery through the default location.

mod common;

use common::TestEnv;
use flashdeck::cli::CliContext;
use flashdeck::config::Config;
use flashdeck::utils::get_config_path;

#[test]
fn test_first_run_writes_default_config() {
    let env = TestEnv::new().with_env_override();
    assert_eq!(get_config_path(), env.config_path());
    assert!(!env.config_path().exists());

    let config = Config::load_or_create(&get_config_path()).unwrap();
    assert!(env.config_path().exists());
    assert_eq!(config.storage_key, "flashcards");
    assert!(config.confirm_reset);
}

#[test]
fn test_cli_context_opens_configured_deck() {
    let env = TestEnv::new().with_env_override();
    env.write_config();

    let mut seeded = env.open_deck();
    seeded.submit("Q", "A").unwrap();

    let ctx = CliContext::load().unwrap();
    assert_eq!(ctx.config_path, env.config_path());
    assert_eq!(ctx.config.storage_path(), env.store_path());
    assert_eq!(ctx.deck.len(), 1);
}

#[test]
fn test_blank_storage_key_falls_back_to_default() {
    let env = TestEnv::new();
    std::fs::write(
        env.config_path(),
        format!(
            "data_dir = \"{}\"\nstorage_key = \"  \"\n",
            env.data_dir.display()
        ),
    )
    .unwrap();

    let config = Config::load_or_create(&env.config_path()).unwrap();
    assert_eq!(config.storage_key, "flashcards");
    assert_eq!(config.storage_path(), env.data_dir.join("flashcards.json"));
}
