use std::io::Cursor;

use crate::domain::NormalizedAudio;

/// Frames the canonical waveform as a standard PCM WAV file, the payload
/// shape recognition providers accept.
pub fn encode_wav(audio: &NormalizedAudio) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: (audio.sample_width * 8),
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &sample in &audio.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
