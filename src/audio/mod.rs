//! Audio ingestion: container decode and conditioning to engine input.
//!
//! ```text
//! file ──decode_audio──▶ interleaved f32 @ source rate
//!      ──to_mono_16k───▶ 16 kHz mono f32  (engine input)
//! ```

pub mod condition;
pub mod decode;

pub use condition::to_mono_16k;
pub use decode::{decode_audio, DecodeError, DecodedAudio};
