use orato::domain::{AudioClip, AudioFormat};

#[test]
fn given_supported_extensions_when_parsing_filename_then_format_is_recognized() {
    assert_eq!(AudioFormat::from_filename("talk.wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_filename("talk.mp3"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_filename("talk.m4a"), Some(AudioFormat::M4a));
    assert_eq!(AudioFormat::from_filename("talk.aac"), Some(AudioFormat::Aac));
    assert_eq!(
        AudioFormat::from_filename("talk.flac"),
        Some(AudioFormat::Flac)
    );
    assert_eq!(AudioFormat::from_filename("talk.ogg"), Some(AudioFormat::Ogg));
}

#[test]
fn given_uppercase_extension_when_parsing_filename_then_format_is_recognized() {
    assert_eq!(
        AudioFormat::from_filename("REHEARSAL.WAV"),
        Some(AudioFormat::Wav)
    );
}

#[test]
fn given_unrecognized_or_missing_extension_when_parsing_filename_then_none() {
    assert_eq!(AudioFormat::from_filename("notes.txt"), None);
    assert_eq!(AudioFormat::from_filename("archive.tar.gz"), None);
    assert_eq!(AudioFormat::from_filename("no_extension"), None);
    assert_eq!(AudioFormat::from_filename(""), None);
}

#[test]
fn given_clip_with_wav_name_when_asking_declared_format_then_wav() {
    let clip = AudioClip::new("practice_run.wav".to_string(), vec![1, 2, 3]);

    assert_eq!(clip.declared_format(), Some(AudioFormat::Wav));
}
