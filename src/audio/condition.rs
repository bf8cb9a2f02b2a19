//! Audio conditioning: decoded PCM to engine input in one pass.
//!
//! The Whisper engine requires **16 kHz mono `f32`** input, while decoded
//! files arrive interleaved at arbitrary rates and channel counts.
//! [`to_mono_16k`] bridges the two in a single walk over the frames:
//! each output sample is linearly interpolated between the two nearest
//! source frames, and every frame touched is averaged across its channels
//! on the fly — no intermediate mono buffer is allocated.

/// Sample rate the engine expects.
const TARGET_RATE: u32 = 16_000;

/// Condition interleaved PCM (`channels` values per frame at `source_rate`
/// Hz) into 16 kHz mono samples.
///
/// Degenerate input (`channels == 0`, `source_rate == 0`, or fewer samples
/// than one full frame) yields an empty vector; the engine's minimum-length
/// guard rejects it downstream.
///
/// ```rust
/// use whisper_transcriber::audio::to_mono_16k;
///
/// // Stereo frames at 16 kHz: downmix only, frame count preserved.
/// let stereo = vec![0.5_f32, -0.5, 0.2, -0.2]; // L R L R
/// let mono = to_mono_16k(&stereo, 2, 16_000);
/// assert_eq!(mono.len(), 2);
/// assert!(mono[0].abs() < 1e-6);
/// ```
pub fn to_mono_16k(samples: &[f32], channels: u16, source_rate: u32) -> Vec<f32> {
    if channels == 0 || source_rate == 0 {
        return Vec::new();
    }

    let width = channels as usize;
    let frames = samples.len() / width;
    if frames == 0 {
        return Vec::new();
    }

    let mono_frame = |frame: usize| -> f32 {
        let base = frame * width;
        samples[base..base + width].iter().sum::<f32>() / width as f32
    };

    if source_rate == TARGET_RATE {
        return (0..frames).map(mono_frame).collect();
    }

    // Walk the output grid; `step` source frames advance per output sample.
    let step = f64::from(source_rate) / f64::from(TARGET_RATE);
    let out_len = (frames as f64 / step).ceil() as usize;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let pos = i as f64 * step;
        let idx = (pos as usize).min(frames - 1);
        let frac = (pos - idx as f64) as f32;

        let here = mono_frame(idx);
        let sample = if idx + 1 < frames {
            here + (mono_frame(idx + 1) - here) * frac
        } else {
            here
        };
        out.push(sample);
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
