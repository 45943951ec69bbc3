mod audio_clip;
mod normalized_audio;
mod report;
mod transcript;

pub use audio_clip::{AudioClip, AudioFormat};
pub use normalized_audio::NormalizedAudio;
pub use report::{AnalysisReport, Pace, Tone};
pub use transcript::TranscriptResult;
