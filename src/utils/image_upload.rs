//! Decoding of uploaded images.
//!
//! Images arrive either as a multipart file part or inline as a data URI:
//!
//! ```text
//! data:image/png;base64,iVBORw0KGgo...
//! ```
//!
//! Both paths end in an [`ImageUpload`] whose bytes were checked to be a
//! recognised image format.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::error::AppError;

const IMAGE_FIELD: &str = "image";

/// Decoded image payload ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Lowercase file extension without the dot.
    pub extension: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Builds an upload from raw file bytes, taking the extension from the
    /// detected format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the `image` field if the bytes are
    /// empty or not a supported image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AppError> {
        let format = detect_format(&bytes)?;

        Ok(Self {
            extension: extension_of(format),
            bytes,
        })
    }

    /// Decodes a `data:image/<ext>;base64,<data>` string.
    ///
    /// The stored extension always comes from the sniffed format; `<ext>`
    /// must name that same format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the `image` field if the string is
    /// not an image data URI, the payload is not valid base64, the decoded
    /// bytes are not a supported image, or `<ext>` disagrees with them.
    pub fn from_data_uri(value: &str) -> Result<Self, AppError> {
        let Some(rest) = value.strip_prefix("data:image/") else {
            return Err(AppError::field(
                IMAGE_FIELD,
                "The submitted data was not a file or a base64 image data URI.",
            ));
        };

        let Some((extension, payload)) = rest.split_once(";base64,") else {
            return Err(AppError::field(
                IMAGE_FIELD,
                "Image data URI must be base64 encoded.",
            ));
        };

        let declared = extension.to_ascii_lowercase();
        let unsupported = || {
            AppError::field(
                IMAGE_FIELD,
                format!("Unsupported image type '{}'.", declared),
            )
        };

        if declared.is_empty()
            || declared.len() > 10
            || !declared.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(unsupported());
        }
        let declared_format = ImageFormat::from_extension(&declared).ok_or_else(unsupported)?;

        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|_| AppError::field(IMAGE_FIELD, "Invalid base64 image data."))?;

        let format = detect_format(&bytes)?;
        if format != declared_format {
            return Err(AppError::field(
                IMAGE_FIELD,
                format!(
                    "Image data does not match the declared type '{}'.",
                    declared
                ),
            ));
        }

        Ok(Self {
            extension: extension_of(format),
            bytes,
        })
    }
}

/// Canonical extension for a sniffed format, e.g. `jpg` for JPEG.
fn extension_of(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .copied()
        .unwrap_or("img")
        .to_string()
}

fn detect_format(bytes: &[u8]) -> Result<ImageFormat, AppError> {
    if bytes.is_empty() {
        return Err(AppError::field(IMAGE_FIELD, "The submitted file is empty."));
    }

    image::guess_format(bytes).map_err(|_| {
        AppError::field(
            IMAGE_FIELD,
            "Upload a valid image. The file you uploaded was either not an image or a corrupted image.",
        )
    })
}
