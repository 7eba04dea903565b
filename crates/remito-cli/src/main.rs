mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Number of consolidated products shown after a run.
const DEFAULT_PREVIEW: usize = 10;

#[derive(Parser)]
#[command(
    name = "remito",
    version,
    about = "Consolidate product lines from delivery-note PDFs into a spreadsheet"
)]
struct Cli {
    /// Defaults to `run` in the current directory
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, consolidate and write the Descuento-DDMMYYYY.xlsx report
    Run {
        /// Directory scanned for PDF files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Report path (default: Descuento-<today>.xlsx in the current directory)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Number of consolidated products to preview
        #[arg(long, default_value_t = DEFAULT_PREVIEW)]
        preview: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Print the product lines found in a single PDF (without consolidating)
    Parse {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::run(PathBuf::from("."), None, DEFAULT_PREVIEW, "table"),
        Some(Commands::Run {
            dir,
            out,
            preview,
            output,
        }) => commands::run::run(dir, out, preview, &output),
        Some(Commands::Parse { input_file, output }) => {
            commands::parse::run(input_file, &output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
