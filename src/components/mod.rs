// Shared pieces of screen chrome

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod input_field;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use input_field::InputField;
