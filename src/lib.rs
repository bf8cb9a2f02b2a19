//! Interactive batch transcription for audio files.
//!
//! # Overview
//!
//! This crate wires together:
//! - A step-based setup wizard ([`wizard`]) that collects a validated
//!   [`wizard::RunConfig`] with backward navigation and early exit.
//! - A sequential batch runner ([`batch`]) that drives a transcription
//!   engine over the selected files, isolating per-file failures and
//!   accumulating a [`batch::RunLedger`].
//! - A Whisper-backed engine ([`stt`]) that decodes an audio file
//!   ([`audio`]), conditions it to 16 kHz mono and produces time-aligned
//!   segments.
//! - A terminal presentation layer ([`ui`]) — thin wrappers only; all
//!   decision logic lives in `wizard` and `batch`.

pub mod audio;
pub mod batch;
pub mod config;
pub mod stt;
pub mod ui;
pub mod wizard;
