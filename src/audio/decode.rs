//! Audio file decoding via Symphonia.
//!
//! Decodes one supported container (m4a, mp3, wav, flac, ogg) to interleaved
//! f32 PCM plus stream metadata.  Conditioning to the 16 kHz mono input the
//! engine expects happens in [`crate::audio::condition`].

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DecodeError
// ---------------------------------------------------------------------------

/// Errors raised while turning an audio file into PCM samples.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open file: {0}")]
    Open(#[from] std::io::Error),

    #[error("unsupported or corrupt container: {0}")]
    Probe(String),

    /// The container holds no track with a decodable codec.
    #[error("no decodable audio track")]
    NoAudioTrack,

    #[error("decode failed: {0}")]
    Decode(String),

    /// The stream produced zero audio frames.
    #[error("stream contained no audio frames")]
    EmptyStream,
}

// ---------------------------------------------------------------------------
// DecodedAudio
// ---------------------------------------------------------------------------

/// Interleaved f32 PCM at the source rate, with stream metadata.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples (`channels` values per frame).
    pub samples: Vec<f32>,
    /// Source sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
}

// ---------------------------------------------------------------------------
// decode_audio
// ---------------------------------------------------------------------------

/// Probe and fully decode the audio file at `path`.
///
/// Malformed packets are skipped (Symphonia reports them as recoverable);
/// any other decoder failure aborts with [`DecodeError::Decode`].
pub fn decode_audio(path: &Path) -> Result<DecodedAudio, DecodeError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| DecodeError::Probe(e.to_string()))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError::Decode(e.to_string()))?;

    // Rate/channels from the codec parameters; replaced by the first decoded
    // buffer's spec, which is authoritative.
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u16)
        .unwrap_or(0);

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream.
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(DecodeError::Decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    sample_rate = spec.rate;
                    channels = spec.channels.count() as u16;
                    sample_buf = Some(SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
            }
            // Recoverable: skip the malformed packet and keep going.
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("{}: skipping malformed packet: {e}", path.display());
            }
            Err(e) => return Err(DecodeError::Decode(e.to_string())),
        }
    }

    if samples.is_empty() {
        return Err(DecodeError::EmptyStream);
    }

    log::debug!(
        "{}: decoded {} samples ({} Hz, {} ch)",
        path.display(),
        samples.len(),
        sample_rate,
        channels
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    /// Write a minimal PCM16 WAV file — enough for Symphonia's wav reader.
    fn write_wav(path: &Path, samples: &[i16], sample_rate: u32, channels: u16) {
        let data_len = (samples.len() * 2) as u32;
        let byte_rate = sample_rate * u32::from(channels) * 2;
        let block_align = channels * 2;

        let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&byte_rate.to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }

        let mut file = File::create(path).expect("create wav");
        file.write_all(&bytes).expect("write wav");
    }

    #[test]
    fn decodes_mono_wav() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tone.wav");

        // 1 s of a constant mid-level signal at 16 kHz mono.
        let samples = vec![8_192i16; 16_000];
        write_wav(&path, &samples, 16_000, 1);

        let decoded = decode_audio(&path).expect("decode");
        assert_eq!(decoded.sample_rate, 16_000);
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.samples.len(), 16_000);
        // 8192/32768 = 0.25 full scale
        assert!((decoded.samples[0] - 0.25).abs() < 0.01);
    }

    #[test]
    fn decodes_stereo_wav_interleaved() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("stereo.wav");

        // 0.5 s stereo at 8 kHz: 4 000 frames, 8 000 interleaved samples.
        let samples = vec![0i16; 8_000];
        write_wav(&path, &samples, 8_000, 2);

        let decoded = decode_audio(&path).expect("decode");
        assert_eq!(decoded.sample_rate, 8_000);
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.samples.len(), 8_000);
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = decode_audio(Path::new("/nonexistent/missing.wav")).unwrap_err();
        assert!(matches!(err, DecodeError::Open(_)));
    }

    #[test]
    fn garbage_bytes_fail_probe() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"this is not audio").expect("write");

        let err = decode_audio(&path).unwrap_err();
        assert!(matches!(err, DecodeError::Probe(_)), "got: {err:?}");
    }
}
