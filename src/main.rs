//! Application entry point — interactive batch transcriber.
//!
//! # Flow
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (defaults are written out on first run).
//! 3. Create the input/output directories.
//! 4. Menu loop: setup wizard → engine load → batch run → summary.
//!
//! This is the single place raw error detail is printed.  Per-file failures
//! never reach here (the runner turns them into ledger records); everything
//! else — engine-load failures, terminal failures — is reported and the
//! loop continues.  An explicit exit or an interrupt during setup leaves
//! the loop with a success status.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;

use whisper_transcriber::{
    batch::{process_queue, RunLedger},
    config::{AppConfig, AppPaths},
    stt::{ModelPaths, SttError, TranscribeOptions, WhisperEngine},
    ui::{self, BatchProgress, TermPrompt},
    wizard::{RunConfig, SetupWizard, WizardError},
};

fn main() -> ExitCode {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("whisper-transcriber starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    if AppConfig::is_first_run() {
        if let Err(e) = config.save() {
            log::warn!("could not write initial settings file: {e}");
        }
    }

    // 3. Working directories
    if let Err(e) = fs::create_dir_all(&config.input_dir)
        .and_then(|_| fs::create_dir_all(&config.output_dir))
    {
        eprintln!("failed to create working directories: {e}");
        return ExitCode::FAILURE;
    }

    // 4. Menu loop
    loop {
        ui::clear_screen();
        ui::print_banner();

        let mut prompt = TermPrompt::new(&config);
        let run = match SetupWizard::new(&mut prompt, &config.input_dir).run() {
            Ok(Some(run)) => run,
            // Explicit exit, or nothing to transcribe — done.
            Ok(None) => break,
            Err(WizardError::Interrupted) => {
                println!("\nCancelled.");
                break;
            }
            Err(e) => {
                log::error!("setup failed: {e}");
                eprintln!("\nSetup failed: {e}");
                if ui::wait_for_enter().is_err() {
                    break;
                }
                continue;
            }
        };

        match run_batch(&config, &run) {
            Ok(ledger) => ui::print_run_summary(&ledger, &config.output_dir),
            Err(e) => {
                log::error!("run failed: {e:#}");
                eprintln!("\nError: {e:#}");
                if matches!(e.downcast_ref::<SttError>(), Some(SttError::ModelNotFound(_))) {
                    let paths = AppPaths::new();
                    eprintln!(
                        "Download GGML model files from \
                         https://huggingface.co/ggerganov/whisper.cpp and place them in {}",
                        paths.models_dir.display()
                    );
                    let local = ModelPaths::from_app_paths(&paths).list_local_models();
                    if !local.is_empty() {
                        let ids: Vec<_> = local.iter().map(|m| m.id()).collect();
                        eprintln!("Models already present: {}", ids.join(", "));
                    }
                }
            }
        }

        if ui::wait_for_enter().is_err() {
            break;
        }
    }

    log::info!("exiting");
    ExitCode::SUCCESS
}

/// Load the engine and drive the batch for one confirmed configuration.
///
/// Engine-load failure is fatal for this run attempt only; the caller
/// reports it and returns to the menu.
fn run_batch(config: &AppConfig, run: &RunConfig) -> anyhow::Result<RunLedger> {
    let model_path = ModelPaths::from_app_paths(&AppPaths::new()).model_path(run.model_size);

    let spinner = ui::spinner(format!("Loading model '{}'...", run.model_size));
    let loaded = WhisperEngine::load(&model_path);
    spinner.finish_and_clear();

    let engine = loaded.with_context(|| {
        format!(
            "could not load model '{}' ({})",
            run.model_size,
            model_path.display()
        )
    })?;
    println!("Model '{}' loaded.\n", run.model_size);

    let opts = TranscribeOptions {
        language: run.language.clone(),
        task: run.task,
        ..TranscribeOptions::default()
    };

    let mut progress = BatchProgress::new(run.files.len());
    let ledger = process_queue(
        &engine,
        &run.files,
        &config.output_dir,
        &opts,
        &mut progress,
    )?;
    progress.finish();

    Ok(ledger)
}
