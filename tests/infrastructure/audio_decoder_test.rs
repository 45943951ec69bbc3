use orato::application::ports::{AudioDecoder, AudioDecoderError};
use orato::infrastructure::audio::SymphoniaAudioDecoder;

use crate::helpers::build_wav;

fn sine_samples(sample_rate: u32, seconds: f64, frequency: f64) -> Vec<i16> {
    let frames = (sample_rate as f64 * seconds) as usize;
    (0..frames)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((t * frequency * 2.0 * std::f64::consts::PI).sin() * 8_000.0) as i16
        })
        .collect()
}

#[test]
fn given_16khz_mono_wav_when_decoding_then_canonical_waveform_preserves_frames() {
    let wav = build_wav(16_000, 1, &vec![0i16; 1_600]);
    let decoder = SymphoniaAudioDecoder;

    let audio = decoder.decode(&wav).unwrap();

    assert_eq!(audio.sample_rate, 16_000);
    assert_eq!(audio.frame_count(), 1_600);
    assert!((audio.duration_seconds() - 0.1).abs() < 1e-6);
}

#[test]
fn given_nonsilent_wav_when_decoding_then_signal_survives_normalization() {
    let wav = build_wav(16_000, 1, &sine_samples(16_000, 0.25, 440.0));
    let decoder = SymphoniaAudioDecoder;

    let audio = decoder.decode(&wav).unwrap();

    let peak = audio.samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak > 4_000, "decoded sine should keep its amplitude, peak={peak}");
}

#[test]
fn given_44100hz_wav_when_decoding_then_resampled_to_16khz() {
    let wav = build_wav(44_100, 1, &sine_samples(44_100, 0.5, 440.0));
    let decoder = SymphoniaAudioDecoder;

    let audio = decoder.decode(&wav).unwrap();

    assert_eq!(audio.sample_rate, 16_000);
    // 0.5s of audio should stay ~0.5s after resampling
    let expected = 8_000usize;
    let tolerance = expected / 10;
    assert!(
        audio.frame_count().abs_diff(expected) <= tolerance,
        "expected ~{expected} frames, got {}",
        audio.frame_count()
    );
}

#[test]
fn given_stereo_wav_when_decoding_then_downmixed_to_mono() {
    // 1600 frames of interleaved stereo
    let interleaved: Vec<i16> = (0..3_200).map(|i| if i % 2 == 0 { 1_000 } else { -1_000 }).collect();
    let wav = build_wav(16_000, 2, &interleaved);
    let decoder = SymphoniaAudioDecoder;

    let audio = decoder.decode(&wav).unwrap();

    assert_eq!(audio.frame_count(), 1_600);
}

#[test]
fn given_garbage_bytes_when_decoding_then_unsupported_format() {
    let garbage = vec![0xFFu8; 128];
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&garbage);

    assert!(matches!(
        result,
        Err(AudioDecoderError::UnsupportedFormat(_))
    ));
}

#[test]
fn given_empty_bytes_when_decoding_then_error() {
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&[]);

    assert!(result.is_err());
}

#[test]
fn given_decoded_wav_when_computing_duration_then_invariant_holds() {
    let wav = build_wav(16_000, 1, &vec![0i16; 24_000]);
    let decoder = SymphoniaAudioDecoder;

    let audio = decoder.decode(&wav).unwrap();

    let expected = audio.frame_count() as f64 / audio.sample_rate as f64;
    assert!((audio.duration_seconds() - expected).abs() < 1e-12);
}
