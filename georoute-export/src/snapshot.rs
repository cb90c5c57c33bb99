//! Map snapshot decoding.
//!
//! Clients send the map as a `data:` URL or as bare base64, usually a PNG
//! captured from the map canvas. JPEG data is embedded untouched. Any other
//! format the `image` crate reads is flattened to 8-bit RGB, dropping alpha.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ColorType, ImageFormat};
use lopdf::{Object, Stream};
use thiserror::Error;

/// A decoded snapshot ready to be added as an image XObject.
#[derive(Debug, Clone)]
pub(crate) struct MapImage {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) stream: Stream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum MapImageError {
    #[error("map image is not valid base64: {0}")]
    Base64(String),
    #[error("map image could not be decoded: {0}")]
    Unreadable(String),
    #[error("map image dimensions are unusable")]
    Dimensions,
}

impl MapImage {
    /// Decode a base64 payload, optionally prefixed by a `data:` URL header.
    pub(crate) fn decode(payload: &str) -> Result<Self, MapImageError> {
        let encoded = payload.rsplit(',').next().unwrap_or(payload).trim();
        let data = STANDARD
            .decode(encoded)
            .map_err(|err| MapImageError::Base64(err.to_string()))?;
        Self::from_bytes(data)
    }

    fn from_bytes(data: Vec<u8>) -> Result<Self, MapImageError> {
        let mut stream = lopdf::xobject::image_from(embeddable(data)?)
            .map_err(|err| MapImageError::Unreadable(err.to_string()))?;
        stream.dict.set("BitsPerComponent", 8_i64);
        let width = dimension(&stream, b"Width")?;
        let height = dimension(&stream, b"Height")?;
        Ok(Self {
            width,
            height,
            stream,
        })
    }
}

/// Pass JPEG and 8-bit RGB images through; re-encode everything else as an
/// RGB PNG.
fn embeddable(data: Vec<u8>) -> Result<Vec<u8>, MapImageError> {
    let unreadable = |err: image::ImageError| MapImageError::Unreadable(err.to_string());
    if matches!(image::guess_format(&data), Ok(ImageFormat::Jpeg)) {
        return Ok(data);
    }
    let decoded = image::load_from_memory(&data).map_err(unreadable)?;
    if decoded.color() == ColorType::Rgb8 {
        return Ok(data);
    }
    let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());
    let mut png = Cursor::new(Vec::new());
    rgb.write_to(&mut png, ImageFormat::Png).map_err(unreadable)?;
    Ok(png.into_inner())
}

fn dimension(stream: &Stream, key: &[u8]) -> Result<u16, MapImageError> {
    stream
        .dict
        .get(key)
        .and_then(Object::as_i64)
        .ok()
        .and_then(|value| u16::try_from(value).ok())
        .ok_or(MapImageError::Dimensions)
}
