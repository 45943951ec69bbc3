/// Transcript text paired with the duration of the waveform that produced
/// it. The duration comes from the decoded audio actually sent to the
/// provider, not from anything in the provider's response, so rate metrics
/// cannot drift when the provider resamples.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptResult {
    pub text: String,
    pub duration_seconds: f64,
}
