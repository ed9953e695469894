use crate::domain::error::DomainError;

pub const WAV_HEADER_LEN: usize = 44;

/// Raw little-endian linear PCM together with the parameters needed to play it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmAudio {
    samples: Vec<u8>,
    channels: u16,
    sample_rate: u32,
    sample_width: u16,
}

impl PcmAudio {
    pub fn new(
        samples: Vec<u8>,
        channels: u16,
        sample_rate: u32,
        sample_width: u16,
    ) -> Result<Self, DomainError> {
        if channels == 0 {
            return Err(DomainError::invalid("channel count must be positive"));
        }
        if sample_rate == 0 {
            return Err(DomainError::invalid("sample rate must be positive"));
        }
        if !matches!(sample_width, 1 | 2 | 4) {
            return Err(DomainError::invalid(format!(
                "sample width must be 1, 2 or 4 bytes, got {}",
                sample_width
            )));
        }
        // block align, byte rate and the RIFF size all have to fit their header fields
        channels
            .checked_mul(sample_width)
            .and_then(|block_align| byte_rate_checked(sample_rate, block_align))
            .ok_or_else(|| DomainError::invalid("audio parameters overflow the WAV header"))?;
        if samples.len() > (u32::MAX - 36) as usize {
            return Err(DomainError::invalid(format!(
                "PCM payload of {} bytes is too large for a WAV container",
                samples.len()
            )));
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
            sample_width,
        })
    }

    /// Mono 16-bit PCM, the format speech models hand back.
    pub fn mono16(samples: Vec<u8>, sample_rate: u32) -> Result<Self, DomainError> {
        Self::new(samples, 1, sample_rate, 2)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn block_align(&self) -> u16 {
        self.channels * self.sample_width
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width * 8
    }

    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.byte_rate())
    }
}

fn byte_rate_checked(sample_rate: u32, block_align: u16) -> Option<u32> {
    sample_rate.checked_mul(u32::from(block_align))
}

/// A complete RIFF/WAVE file: 44-byte header followed by the PCM payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavContainer(Vec<u8>);

impl WavContainer {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:audio/wav;base64,{}", self.to_base64())
    }
}

#[cfg(test)]
impl PcmAudio {
    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }
}

#[cfg(test)]
impl WavContainer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn payload(&self) -> &[u8] {
        &self.0[WAV_HEADER_LEN.min(self.0.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_parameters() {
        assert!(PcmAudio::new(vec![], 0, 24000, 2).is_err());
        assert!(PcmAudio::new(vec![], 1, 0, 2).is_err());
        assert!(PcmAudio::new(vec![], 1, 24000, 0).is_err());
    }

    #[test]
    fn test_rejects_unsupported_sample_width() {
        for width in [3, 8] {
            match PcmAudio::new(vec![], 1, 24000, width) {
                Err(DomainError::InvalidArgument(msg)) => assert!(msg.contains("sample width")),
                other => panic!("expected InvalidArgument, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_byte_rate_overflow() {
        assert!(PcmAudio::new(vec![], 8, u32::MAX / 2, 4).is_err());
    }

    #[test]
    fn test_derived_fields() {
        let audio = PcmAudio::new(vec![0; 8], 2, 44100, 2).unwrap();
        assert_eq!(audio.block_align(), 4);
        assert_eq!(audio.byte_rate(), 176400);
        assert_eq!(audio.bits_per_sample(), 16);
        assert_eq!(audio.sample_width(), 2);

        let speech = PcmAudio::mono16(vec![0; 48000], 24000).unwrap();
        assert!((speech.duration_seconds() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_data_uri_prefix() {
        let wav = WavContainer::from_bytes(vec![1, 2, 3]);
        assert_eq!(wav.to_data_uri(), "data:audio/wav;base64,AQID");
    }
}
