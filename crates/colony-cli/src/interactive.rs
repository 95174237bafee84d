//! Interactive menus.
//!
//! Without a file the session starts with manual entry: pick the colony
//! size, then add conflicts and preference lists until every colonist is
//! covered. The allocation menu follows, offering swaps and the jealousy
//! summary until the user quits.

use std::path::Path;

use colony_config::{ColonyConfig, OutputFormat};
use colony_core::{compute_initial_allocation, Allocation, ColonyError, Document, ManualBuilder};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use tracing::info;

use crate::{load_document, render, Result, SwapRequest};

const BUILD_MENU: [&str; 3] = ["Add a conflict", "Add preferences", "Finish"];
const ALLOCATION_MENU: [&str; 3] = ["Swap two resources", "Show jealous colonists", "Quit"];

/// Runs a full interactive session.
pub fn run(file: Option<&Path>, config: &ColonyConfig) -> Result<()> {
    colony_console::print_banner(config.output.color);
    let theme = ColorfulTheme::default();

    let document = match file {
        Some(path) => load_document(path, config)?,
        None => manual_entry(&theme, config)?,
    };
    let mut allocation = compute_initial_allocation(&document).map_err(ColonyError::from)?;
    println!("{}", render(&allocation, &document, OutputFormat::Text, config.output.color)?);

    allocation_menu(&theme, &document, &mut allocation, config.output.color)
}

fn manual_entry(theme: &ColorfulTheme, config: &ColonyConfig) -> Result<Document> {
    let max = config.limits.max_colonists;
    let mut builder = loop {
        let input: String = Input::with_theme(theme)
            .with_prompt(format!("Number of colonists (1-{max})"))
            .interact_text()?;
        match ManualBuilder::parse_count(&input, max) {
            Ok(builder) => break builder,
            Err(err) => report(&err, config.output.color),
        }
    };

    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Colony setup")
            .items(&BUILD_MENU[..])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let line: String = Input::with_theme(theme)
                    .with_prompt("Two colonists in conflict (e.g. A B)")
                    .interact_text()?;
                if let Err(err) = builder.add_conflict_tokens(&line) {
                    report(&err, config.output.color);
                }
            }
            1 => {
                let example = builder
                    .resources()
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let line: String = Input::with_theme(theme)
                    .with_prompt(format!("Colonist then ranked resources (e.g. A {example})"))
                    .interact_text()?;
                if let Err(err) = builder.add_preferences_tokens(&line) {
                    report(&err, config.output.color);
                }
            }
            _ => match builder.first_incomplete() {
                Some(missing) => {
                    let message = format!("colonist '{missing}' still needs preferences");
                    report(&message, config.output.color);
                }
                None => {
                    info!(event = "manual_entry_complete");
                    return Ok(builder.verify().map_err(ColonyError::from)?);
                }
            },
        }
    }
}

fn allocation_menu(
    theme: &ColorfulTheme,
    document: &Document,
    allocation: &mut Allocation,
    color: bool,
) -> Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Allocation")
            .items(&ALLOCATION_MENU[..])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let line: String = Input::with_theme(theme)
                    .with_prompt("Two colonists to swap (e.g. A B)")
                    .interact_text()?;
                let applied = line
                    .parse::<SwapRequest>()
                    .and_then(|req| {
                        allocation
                            .swap(&req.left, &req.right)
                            .map_err(|e| ColonyError::from(e).into())
                    });
                match applied {
                    Ok(()) => println!("{}", colony_console::render_allocation(allocation, color)),
                    Err(err) => report(&err, color),
                }
            }
            1 => {
                let jealous = colony_core::jealousy_report(allocation, document);
                println!("{}", colony_console::render_jealousy(&jealous, color));
            }
            _ => return Ok(()),
        }
    }
}

fn report(err: &dyn std::fmt::Display, color: bool) {
    if color {
        eprintln!("{} {}", "error:".bright_red().bold(), err);
    } else {
        eprintln!("error: {err}");
    }
}
