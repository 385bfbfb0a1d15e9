//! WAV container writer for the upload payload
//!
//! Settings:
//! - mono channel
//! - 16-bit PCM samples
//! - device sample rate, written as-is (no resampling)

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Number of channels (mono)
const CHANNELS: u16 = 1;

/// Bits per sample (16-bit audio)
const BITS_PER_SAMPLE: u16 = 16;

/// Encode PCM samples into an in-memory WAV container
///
/// Input: mono i16 samples at the given sample rate
/// Output: WAV bytes
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, WavEncodeError> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| WavEncodeError::Create(e.to_string()))?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| WavEncodeError::Write(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| WavEncodeError::Write(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

/// WAV encoding errors
#[derive(Debug, thiserror::Error)]
pub enum WavEncodeError {
    #[error("WAV writer setup failed: {0}")]
    Create(String),

    #[error("WAV write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_silence() {
        // 1 second of silence at 44.1kHz
        let silence = vec![0i16; 44100];
        let wav = encode_wav(&silence, 44100).unwrap();

        // RIFF/WAVE magic
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 44-byte header followed by 2 bytes per sample
        assert_eq!(wav.len(), 44 + 44100 * 2);
    }

    #[test]
    fn encode_empty_input_still_yields_header() {
        let wav = encode_wav(&[], 16000).unwrap();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(wav.len(), 44);
    }

    #[test]
    fn header_carries_sample_rate() {
        let wav = encode_wav(&[0i16; 100], 48000).unwrap();
        // Sample rate is a little-endian u32 at offset 24 of the fmt chunk
        let rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(rate, 48000);
    }

    #[test]
    fn samples_round_trip() {
        let samples: Vec<i16> = vec![0, 100, -100, i16::MAX, i16::MIN];
        let wav = encode_wav(&samples, 16000).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }
}
