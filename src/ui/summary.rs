//! Banner, configuration summary and results rendering.

use std::io::Write;
use std::path::Path;

use console::{style, Term};

use crate::batch::RunLedger;
use crate::config::language_name;
use crate::wizard::RunConfig;

pub fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}

pub fn print_banner() {
    println!("\n{}\n", style("=== Whisper Transcriber ===").cyan().bold());
}

/// Render the assembled configuration ahead of the confirmation prompt.
pub fn print_config_summary(config: &RunConfig) {
    let language = match &config.language {
        Some(code) => match language_name(code) {
            Some(name) => format!("{name} ({code})"),
            None => code.clone(),
        },
        None => "Auto-detect".to_string(),
    };

    println!();
    println!("{}", style("Configuration").bold());
    println!("  Language   : {}", style(&language).green());
    println!("  Model size : {}", style(config.model_size).green());
    println!("  Task       : {}", style(config.task).green());
    println!("  Files      : {}", style(config.files.len()).green());
    for file in &config.files {
        let name = file
            .file_name()
            .unwrap_or_else(|| file.as_os_str())
            .to_string_lossy();
        println!("    - {name}");
    }
    println!();
}

/// Enumerate every attempted file with its outcome, plus aggregate counts.
pub fn print_run_summary(ledger: &RunLedger, output_dir: &Path) {
    println!();
    println!("{}", style("Results").bold());
    for record in ledger.records() {
        let mark = if record.success {
            style("ok").green()
        } else {
            style("failed").red()
        };
        match &record.error {
            Some(detail) => println!("  [{mark}] {} ({detail})", record.file),
            None => println!("  [{mark}] {}", record.file),
        }
    }
    println!();
    println!(
        "{} succeeded, {} failed. Transcripts in {}",
        style(ledger.success_count()).green().bold(),
        style(ledger.failure_count()).red().bold(),
        output_dir.display()
    );
}

/// Block until the user presses Enter.
pub fn wait_for_enter() -> std::io::Result<()> {
    println!();
    print!("Press Enter to return to the menu... ");
    std::io::stdout().flush()?;
    Term::stdout().read_line().map(|_| ())
}
