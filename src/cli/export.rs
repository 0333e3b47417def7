//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{SamityError, SamityResult};
use crate::export::{export_full_json, export_members_csv, export_transactions_csv};
use crate::storage::Storage;

/// Arguments for data export
#[derive(Args)]
pub struct ExportArgs {
    /// Export format: csv or json
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    /// Output directory for CSV (default: current directory), or output file
    /// for JSON (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> SamityResult<()> {
    match args.format.to_lowercase().as_str() {
        "csv" => {
            let dir = args.output.unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)
                .map_err(|e| SamityError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

            let members_path = dir.join("members.csv");
            let mut members_file = BufWriter::new(
                File::create(&members_path)
                    .map_err(|e| SamityError::Export(e.to_string()))?,
            );
            export_members_csv(storage, &mut members_file)?;

            let transactions_path = dir.join("transactions.csv");
            let mut transactions_file = BufWriter::new(
                File::create(&transactions_path)
                    .map_err(|e| SamityError::Export(e.to_string()))?,
            );
            export_transactions_csv(storage, &mut transactions_file)?;

            println!("Exported {}", members_path.display());
            println!("Exported {}", transactions_path.display());
        }

        "json" => match args.output {
            Some(path) => {
                let mut file = BufWriter::new(
                    File::create(&path).map_err(|e| SamityError::Export(e.to_string()))?,
                );
                export_full_json(storage, settings, &mut file)?;
                println!("Exported {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                export_full_json(storage, settings, &mut handle)?;
                println!();
            }
        },

        other => {
            return Err(SamityError::Validation(format!(
                "Invalid export format: '{}'. Valid formats: csv, json",
                other
            )));
        }
    }

    Ok(())
}
