mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "c12",
    version,
    about = "Convert C12 social-insurance PDF reports into a combined Excel workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more C12 PDFs into a four-sheet xlsx workbook
    Convert {
        /// PDF files to process, in upload order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output xlsx path (default: ketqua_tong_hop_<timestamp>.xlsx)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print the four aggregated tables after converting
        #[arg(long)]
        preview: bool,
    },
    /// Parse a single C12 PDF into structured data (without aggregating)
    Parse {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            files,
            out,
            preview,
        } => commands::convert::run(files, out, preview),
        Commands::Parse {
            input_file,
            output,
        } => commands::parse::run(input_file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
