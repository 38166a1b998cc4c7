//! Subcommand implementations.
//!
//! Card numbers on the command line are one-based, matching `list` output.

use super::common::{prompt_confirm, write_success, CliContext};
use super::{completions, Commands};
use crate::services::{DeckService, SubmitOutcome};
use crate::utils::{card_markup, get_log_path, sanitize_for_terminal};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run one subcommand, writing its output to stdout.
pub fn run(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Completions { shell } => completions::generate(shell, &mut out),
        Commands::Logs => {
            writeln!(out, "{}", get_log_path().display())?;
            Ok(())
        }
        command => {
            let mut ctx = CliContext::load()?;
            dispatch(command, &mut ctx, &mut out)
        }
    }
}

fn dispatch(command: Commands, ctx: &mut CliContext, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Add { question, answer } => add(&mut ctx.deck, &question, &answer, out),
        Commands::List { verbose } => list(&ctx.deck, verbose, out),
        Commands::Show { number, html } => show(&ctx.deck, number, html, out),
        Commands::Edit {
            number,
            question,
            answer,
        } => edit(&mut ctx.deck, number, &question, &answer, out),
        Commands::Delete { number } => delete(&mut ctx.deck, number, out),
        Commands::Reset { yes } => {
            if !yes && ctx.config.confirm_reset {
                let prompt = format!("Delete all {} flashcards?", ctx.deck.len());
                if !prompt_confirm(&prompt)? {
                    writeln!(out, "Cancelled")?;
                    return Ok(());
                }
            }
            reset(&mut ctx.deck, out)
        }
        Commands::Config => {
            writeln!(out, "{}", ctx.config_path.display())?;
            Ok(())
        }
        Commands::Storage => {
            writeln!(out, "{}", ctx.config.storage_path().display())?;
            Ok(())
        }
        Commands::Logs | Commands::Completions { .. } => Ok(()),
    }
}

pub fn add(deck: &mut DeckService, question: &str, answer: &str, out: &mut dyn Write) -> Result<()> {
    deck.begin_create();
    let outcome = deck.submit(question, answer)?;
    if let SubmitOutcome::Added(index) = outcome {
        write_success(out, &format!("Added flashcard #{}", index + 1))?;
    }
    Ok(())
}

pub fn list(deck: &DeckService, verbose: bool, out: &mut dyn Write) -> Result<()> {
    if deck.is_empty() {
        writeln!(out, "No flashcards yet.")?;
        return Ok(());
    }
    let width = deck.len().to_string().len();
    for (i, card) in deck.cards().iter().enumerate() {
        let question = sanitize_for_terminal(&card.question);
        writeln!(out, "{:>width$}. {}", i + 1, question, width = width)?;
        if verbose {
            let answer = sanitize_for_terminal(&card.answer);
            writeln!(out, "{:>width$}  \u{2192} {}", "", answer, width = width)?;
        }
    }
    Ok(())
}

pub fn show(deck: &DeckService, number: usize, html: bool, out: &mut dyn Write) -> Result<()> {
    let index = deck.index_from_number(number)?;
    let card = deck
        .get(index)
        .with_context(|| format!("No flashcard #{}", number))?;
    if html {
        writeln!(out, "{}", card_markup(&card.question, &card.answer))?;
    } else {
        writeln!(out, "Question: {}", sanitize_for_terminal(&card.question))?;
        writeln!(out, "Answer:   {}", sanitize_for_terminal(&card.answer))?;
    }
    Ok(())
}

pub fn edit(
    deck: &mut DeckService,
    number: usize,
    question: &str,
    answer: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let index = deck.index_from_number(number)?;
    deck.begin_edit(index)?;
    if let Err(err) = deck.submit(question, answer) {
        deck.cancel_edit();
        return Err(err.into());
    }
    write_success(out, &format!("Updated flashcard #{}", number))?;
    Ok(())
}

pub fn delete(deck: &mut DeckService, number: usize, out: &mut dyn Write) -> Result<()> {
    let index = deck.index_from_number(number)?;
    let removed = deck.delete(index)?;
    write_success(
        out,
        &format!(
            "Deleted flashcard #{} ({})",
            number,
            sanitize_for_terminal(&removed.question)
        ),
    )?;
    Ok(())
}

pub fn reset(deck: &mut DeckService, out: &mut dyn Write) -> Result<()> {
    let count = deck.len();
    deck.reset_all()?;
    write_success(out, &format!("Deleted {} flashcards", count))?;
    Ok(())
}
