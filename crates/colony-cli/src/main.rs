//! `colony`: allocate colony resources from a fact file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colony_cli::{allocate, check, interactive, resolve_input, CliError, SwapRequest};
use colony_config::{ColonyConfig, OutputFormat};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "colony", version)]
#[command(about = "Assign resources to colonists and spot jealous rivals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML or YAML); defaults apply when it is absent
    #[arg(long, global = true, default_value = "colony.toml")]
    config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a fact file and print its counts.
    Check {
        /// Colony fact file
        file: Option<PathBuf>,
    },

    /// Compute the allocation, apply swaps and list jealous colonists.
    Allocate {
        /// Colony fact file
        file: Option<PathBuf>,
        /// Swap the resources of two colonists, e.g. A:B (repeatable, applied in order)
        #[arg(long = "swap", value_name = "A:B")]
        swaps: Vec<SwapRequest>,
        /// Output format, overriding the configuration
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Enter a colony by hand (or load one) and explore swaps.
    Interactive {
        /// Colony fact file; manual entry when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if color {
                eprintln!("{} {}", "error:".bright_red().bold(), err);
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ColonyConfig::load_optional(&cli.config)?;
    if cli.no_color {
        config.output.color = false;
    }
    colony_console::init(&config.logging.filter);

    match cli.command {
        Commands::Check { file } => {
            let path = resolve_input(file, &config)?;
            println!("{}", check(&path, &config)?);
        }
        Commands::Allocate {
            file,
            swaps,
            format,
        } => {
            let path = resolve_input(file, &config)?;
            let format = format.map_or(config.output.format, OutputFormat::from);
            println!(
                "{}",
                allocate(&path, &swaps, format, config.output.color, &config)?
            );
        }
        Commands::Interactive { file } => {
            let path = file.or_else(|| config.input.clone());
            interactive::run(path.as_deref(), &config)?;
        }
    }
    Ok(())
}
