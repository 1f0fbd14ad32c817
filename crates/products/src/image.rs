use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A file picked in the product image input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(mime: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// The preview image next to the upload input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    src: Option<String>,
}

impl ImagePreview {
    pub fn new(src: Option<String>) -> Self {
        Self { src }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Show the first picked file. Picking nothing keeps the current preview.
    pub fn update(&mut self, files: &[ImageUpload]) {
        if let Some(file) = files.first() {
            self.src = Some(file.to_data_url());
        }
    }
}
