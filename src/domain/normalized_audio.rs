/// Canonical waveform: mono, 16 kHz, 16-bit signed linear PCM. Every clip is
/// normalized to this shape before it reaches the recognition provider, so
/// duration math never depends on the source container.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    pub sample_rate: u32,
    pub sample_width: u16,
    pub samples: Vec<i16>,
}

impl NormalizedAudio {
    pub const CANONICAL_SAMPLE_RATE: u32 = 16_000;

    pub fn new(sample_rate: u32, samples: Vec<i16>) -> Self {
        Self {
            sample_rate,
            sample_width: (i16::BITS / 8) as u16,
            samples,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len()
    }

    /// Invariant: duration is frame count over sample rate, never wall-clock.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}
