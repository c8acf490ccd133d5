use bytes::Bytes;

/// Form field that carries the audio upload.
pub const AUDIO_FILE_FIELD: &str = "audio_file";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub filename: String,
    pub data: Bytes,
}

impl UploadedAudio {
    pub fn new(filename: String, data: Bytes) -> Self {
        Self { filename, data }
    }

    /// Checks the filename declared on the `audio_file` part.
    ///
    /// A part without any filename is a plain form value, not a file.
    pub fn validate_filename(filename: Option<&str>) -> Result<String, UploadError> {
        match filename {
            None => Err(UploadError::MissingFile),
            Some("") => Err(UploadError::EmptyFilename),
            Some(name) => Ok(name.to_string()),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No audio file provided")]
    MissingFile,
    #[error("Empty filename")]
    EmptyFilename,
}
