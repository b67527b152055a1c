//! Recipe image references and upload validation.
//!
//! An image is either an external path/URL or an embedded `data:` URL
//! produced from an uploaded file. Uploads are checked twice:
//! 1. Declared MIME type must be `image/*`
//! 2. Magic bytes, when recognisable, must also describe an image
//!
//! and must not exceed [`crate::defaults::IMAGE_MAX_BYTES`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::defaults;
use crate::error::{Error, Result};

const DATA_URL_PREFIX: &str = "data:";

/// Where a recipe's picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// Path or URL resolved by the view layer.
    External(String),
    /// Self-contained `data:<mime>;base64,<payload>` URL.
    Embedded(String),
}

impl ImageRef {
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::External(s) | ImageRef::Embedded(s) => s,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageRef::Embedded(_))
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::External(defaults::PLACEHOLDER_IMAGE.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        if s.is_empty() {
            ImageRef::default()
        } else if s.starts_with(DATA_URL_PREFIX) {
            ImageRef::Embedded(s)
        } else {
            ImageRef::External(s)
        }
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::External(s) | ImageRef::Embedded(s) => s,
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file picked by the user, before it becomes an [`ImageRef`].
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub declared_mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(declared_mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            declared_mime: declared_mime.into(),
            bytes,
        }
    }

    /// Validate the upload and encode it as an embedded image.
    pub fn into_image_ref(self) -> Result<ImageRef> {
        validate_image(&self.declared_mime, &self.bytes, defaults::IMAGE_MAX_BYTES)?;
        let data_url = format!(
            "{}{};base64,{}",
            DATA_URL_PREFIX,
            self.declared_mime,
            STANDARD.encode(&self.bytes)
        );
        Ok(ImageRef::Embedded(data_url))
    }
}

/// Check type and size of an uploaded image.
pub fn validate_image(declared_mime: &str, data: &[u8], max_size_bytes: usize) -> Result<()> {
    if !declared_mime.starts_with("image/") {
        return Err(Error::InvalidImage(format!(
            "expected an image file, got {}",
            if declared_mime.is_empty() {
                "an unknown type"
            } else {
                declared_mime
            }
        )));
    }

    if data.len() > max_size_bytes {
        return Err(Error::InvalidImage(format!(
            "image exceeds maximum size of {} bytes",
            max_size_bytes
        )));
    }

    // Unrecognised payloads (e.g. SVG text) pass on the declared type alone.
    if let Some(kind) = infer::get(data) {
        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(Error::InvalidImage(format!(
                "content is {}, not an image",
                kind.mime_type()
            )));
        }
    }

    Ok(())
}
