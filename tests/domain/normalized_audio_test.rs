use orato::domain::NormalizedAudio;

#[test]
fn given_two_seconds_of_frames_when_computing_duration_then_matches_frame_count_over_rate() {
    let audio = NormalizedAudio::new(16_000, vec![0i16; 32_000]);

    assert_eq!(audio.frame_count(), 32_000);
    assert!((audio.duration_seconds() - 2.0).abs() < 1e-9);
}

#[test]
fn given_any_frame_count_when_computing_duration_then_invariant_holds_exactly() {
    for frames in [1usize, 160, 16_000, 44_100, 123_457] {
        let audio = NormalizedAudio::new(16_000, vec![0i16; frames]);
        let expected = frames as f64 / 16_000.0;
        assert!((audio.duration_seconds() - expected).abs() < 1e-12);
    }
}

#[test]
fn given_sixteen_bit_samples_when_constructing_then_sample_width_is_two_bytes() {
    let audio = NormalizedAudio::new(NormalizedAudio::CANONICAL_SAMPLE_RATE, vec![0i16; 10]);

    assert_eq!(audio.sample_width, 2);
    assert_eq!(audio.sample_rate, 16_000);
}
