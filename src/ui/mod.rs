//! Terminal presentation layer.
//!
//! Thin wrappers over `dialoguer` / `indicatif` / `console` — all decision
//! logic lives in [`crate::wizard`] and [`crate::batch`], which only see
//! the `SetupPrompt` and `BatchObserver` traits implemented here.

pub mod progress;
pub mod prompt;
pub mod summary;

pub use progress::{spinner, BatchProgress};
pub use prompt::TermPrompt;
pub use summary::{
    clear_screen, print_banner, print_config_summary, print_run_summary, wait_for_enter,
};
