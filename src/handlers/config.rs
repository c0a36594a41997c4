//! Configuration template handler.

use crate::config::{Config, PROJECT_CONFIG_FILES};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Handle `--init-config`: write the commented template into `dir`.
pub fn handle_init_config(dir: &Path) -> ExitCode {
    let output_path = dir.join(PROJECT_CONFIG_FILES[0]);

    if output_path.exists() {
        eprintln!(
            "Error: Configuration file already exists at {}",
            output_path.display()
        );
        eprintln!("Remove it first or edit it in place.");
        return ExitCode::from(2);
    }

    match fs::write(&output_path, Config::generate_template()) {
        Ok(()) => {
            println!(
                "Created configuration file template at {}",
                output_path.display()
            );
            println!("\nYou can customize this file to:");
            println!("  - Adjust per-field severity points");
            println!("  - Tune the risk thresholds and recency window");
            println!("  - Enable live lookups");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: Failed to write configuration file: {}", e);
            ExitCode::from(2)
        }
    }
}
