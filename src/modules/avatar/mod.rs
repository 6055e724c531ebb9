// src/modules/avatar/mod.rs

//! Cosmetic avatar: one generated image per install, cached as a data URL.

pub mod client;
pub mod database;
pub mod loader;

pub use client::GeminiClient;
pub use database::AvatarDatabase;
pub use loader::{AvatarLoader, AvatarOutcome};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

pub const DEFAULT_MIME_TYPE: &str = "image/png";

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("No API key configured for avatar generation")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response carried no inline image data")]
    NoImageData,

    #[error("Not a base64 data URL")]
    MalformedDataUrl,

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
}

/// Source of freshly generated avatars, as data URLs.
#[async_trait]
pub trait AvatarGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AvatarError>;
}

pub fn to_data_url(mime_type: Option<&str>, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type.unwrap_or(DEFAULT_MIME_TYPE), base64_data)
}

/// Raw image bytes out of a `data:<mime>;base64,<payload>` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, AvatarError> {
    let rest = url.strip_prefix("data:").ok_or(AvatarError::MalformedDataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(AvatarError::MalformedDataUrl)?;
    if !meta.ends_with(";base64") {
        return Err(AvatarError::MalformedDataUrl);
    }

    Ok(STANDARD.decode(payload.trim())?)
}

pub fn decode_image(url: &str) -> Result<image::DynamicImage, AvatarError> {
    let bytes = decode_data_url(url)?;
    Ok(image::load_from_memory(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_defaults_to_png() {
        assert_eq!(to_data_url(None, "AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(to_data_url(Some("image/jpeg"), "AAAA"), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_decode_data_url() {
        let url = to_data_url(None, &STANDARD.encode(b"hello"));
        assert_eq!(decode_data_url(&url).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_rejects_non_data_urls() {
        assert!(matches!(decode_data_url("https://example.com/cat.png"), Err(AvatarError::MalformedDataUrl)));
        assert!(matches!(decode_data_url("data:image/png,plain"), Err(AvatarError::MalformedDataUrl)));
        assert!(matches!(decode_data_url("data:image/png;base64,@@@"), Err(AvatarError::Decode(_))));
    }

    #[test]
    fn test_decode_image_from_encoded_png() {
        let img = image::DynamicImage::new_rgb8(2, 3);
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        let url = to_data_url(None, &STANDARD.encode(bytes.into_inner()));

        let decoded = decode_image(&url).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (2, 3));
    }
}
