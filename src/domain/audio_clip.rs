use std::path::Path;

/// An uploaded recording as received at request ingress. The raw bytes and
/// the declared filename travel together; nothing here outlives the request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub filename: String,
    pub data: Vec<u8>,
}

impl AudioClip {
    pub fn new(filename: String, data: Vec<u8>) -> Self {
        Self { filename, data }
    }

    pub fn declared_format(&self) -> Option<AudioFormat> {
        AudioFormat::from_filename(&self.filename)
    }
}

/// Audio containers the decoder accepts, gated by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Mp3,
    M4a,
    Aac,
    Flac,
    Ogg,
}

impl AudioFormat {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 6] =
        ["wav", "mp3", "m4a", "aac", "flac", "ogg"];

    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();

        match extension.as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "aac" => Some(Self::Aac),
            "flac" => Some(Self::Flac),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }
}
