//! shoelace - polygon area and lattice-cell counts from the command line
//!
//! Usage:
//!   shoelace area <file|-> [-m <mode|all>] [-f text|json]
//!   shoelace dig <file|-> [--hex] [-m <mode|all>] [-f text|json]
//!   shoelace modes
//!
//! `-v` (repeatable) raises log verbosity; `RUST_LOG` overrides it.

mod cli;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use cli::{cmd_area, cmd_dig, cmd_modes, CliError, InputFormat, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "shoelace",
    about = "Polygon area with the shoelace formula, plus lattice-cell counts",
    version
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Area of a polygon given as a vertex list
    Area {
        /// Vertex file (- for stdin)
        input: String,

        /// Area mode, or `all`
        #[arg(short, long, default_value = "continuous")]
        mode: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Vertex file format
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        input_format: InputFormat,
    },

    /// Lagoon volume of a dig plan
    Dig {
        /// Dig plan file (- for stdin)
        input: String,

        /// Read distances and directions from the color codes
        #[arg(long)]
        hex: bool,

        /// Also report the trench polygon's area under a mode, or `all`
        #[arg(short, long)]
        mode: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List available area modes
    Modes,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Area { input, mode, format, input_format } => {
            cmd_area(&input, &mode, format, input_format)
        }
        Commands::Dig { input, hex, mode, format } => cmd_dig(&input, hex, mode.as_deref(), format),
        Commands::Modes => {
            cmd_modes();
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
