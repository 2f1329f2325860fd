use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use sfd_cli::pipeline;

#[derive(Parser, Debug)]
#[command(name = "sfd", author, version, about = "Self Daily newsletter processing agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract article links from a newsletter HTML export and generate
    /// the SQL migration file for one date
    Process {
        /// Newsletter date in YYYY-MM-DD format
        date: String,
        /// Path to the raw newsletter HTML export
        html_file: PathBuf,
        /// Directory the generated SQL file is written to
        #[arg(long, env = "SFD_UPDATE_DIR", default_value = "sfdaily_update")]
        output_dir: PathBuf,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            date,
            html_file,
            output_dir,
            json,
        } => pipeline::run(&date, &html_file, &output_dir).and_then(|summary| {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                info!("📍 Location: {}", summary.artifact_path.display());
            }
            Ok(())
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ Error: {err}");
            ExitCode::FAILURE
        }
    }
}
