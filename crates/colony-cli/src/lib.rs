//! Command implementations behind the `colony` binary.
//!
//! Every command returns its output as a string so that the binary only
//! has to print it; the interactive menus live in [`interactive`].

pub mod interactive;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use colony_config::{ColonyConfig, ConfigError, OutputFormat};
use colony_core::{
    compute_initial_allocation, jealousy_report, Allocation, ColonyError, Document, Parser,
};
use colony_console::{render_allocation, render_jealousy, render_json};
use thiserror::Error;
use tracing::debug;

/// Anything that makes a command fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Colony(#[from] ColonyError),

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no input file given and none set in the configuration")]
    MissingInput,

    #[error("invalid swap '{0}', expected two colonists such as A:B")]
    InvalidSwap(String),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Two colonists whose resources are exchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub left: String,
    pub right: String,
}

impl FromStr for SwapRequest {
    type Err = CliError;

    /// Accepts `A:B` or `A B`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [left, right] => Ok(Self {
                left: left.to_string(),
                right: right.to_string(),
            }),
            _ => Err(CliError::InvalidSwap(s.trim().to_string())),
        }
    }
}

/// Picks the file given on the command line, falling back to the
/// configured input.
pub fn resolve_input(file: Option<PathBuf>, config: &ColonyConfig) -> Result<PathBuf> {
    file.or_else(|| config.input.clone())
        .ok_or(CliError::MissingInput)
}

/// Reads and parses a colony fact file under the configured limits.
pub fn load_document(path: &Path, config: &ColonyConfig) -> Result<Document> {
    debug!(event = "load", path = %path.display());
    Parser::new()
        .with_max_colonists(config.limits.max_colonists)
        .parse_file(path)
        .map_err(|err| CliError::Colony(err.into()))
}

/// Validates a fact file and summarizes it.
pub fn check(path: &Path, config: &ColonyConfig) -> Result<String> {
    let document = load_document(path, config)?;
    Ok(format!(
        "{}: {} colonists, {} resources, {} conflicts",
        path.display(),
        document.colonists().len(),
        document.resources().len(),
        document.conflicts().len(),
    ))
}

/// Allocates the colony in `path`, applies `swaps` in order and renders
/// the result.
pub fn allocate(
    path: &Path,
    swaps: &[SwapRequest],
    format: OutputFormat,
    color: bool,
    config: &ColonyConfig,
) -> Result<String> {
    let document = load_document(path, config)?;
    let mut allocation = compute_initial_allocation(&document).map_err(ColonyError::from)?;
    for request in swaps {
        allocation
            .swap(&request.left, &request.right)
            .map_err(ColonyError::from)?;
    }
    render(&allocation, &document, format, color)
}

/// Renders an allocation and its jealous colonists.
pub fn render(
    allocation: &Allocation,
    document: &Document,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let jealous = jealousy_report(allocation, document);
    match format {
        OutputFormat::Json => Ok(render_json(allocation, &jealous)?),
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            render_allocation(allocation, color),
            render_jealousy(&jealous, color)
        )),
    }
}
