//! The edge detection engine. Decodes raw image bytes into a color frame,
//! reduces it to grayscale, runs Canny edge detection on it, and re-encodes
//! the edge map as a JPEG

use crate::config::{CANNY_HIGH, CANNY_LOW, JPEG_QUALITY};
use image::{DynamicImage, GrayImage, ImageOutputFormat};
use imageproc::edges::canny;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// A pipeline stage failed on the current frame
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The frame byte buffer was empty
    #[error("input image data is empty")]
    EmptyInput,

    /// The frame bytes are not in any decodable image format
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The edge map could not be written out as JPEG
    #[error("failed to encode edge map as jpeg: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decode raw bytes (JPEG, PNG, BMP, ...) into a 3-channel color frame.
/// Alpha channels are flattened and grayscale sources are promoted, the
/// same as an unconditional color read
pub fn decode_frame(data: &[u8]) -> Result<DynamicImage, PipelineError> {
    if data.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    let frame = image::load_from_memory(data).map_err(PipelineError::Decode)?;
    Ok(DynamicImage::ImageRgb8(frame.to_rgb8()))
}

/// Collapse a color frame to a single luma channel
pub fn to_grayscale(frame: &DynamicImage) -> GrayImage {
    frame.to_luma8()
}

/// Detect edges with the fixed hysteresis thresholds. Strong edges come out
/// as 255, everything else as 0
pub fn detect_edges(gray: &GrayImage) -> GrayImage {
    canny(gray, CANNY_LOW, CANNY_HIGH)
}

/// Encode the edge map as a JPEG byte buffer
pub fn encode_jpeg(edges: &GrayImage) -> Result<Vec<u8>, PipelineError> {
    let mut buf: Vec<u8> = Vec::new();
    edges
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(PipelineError::Encode)?;
    Ok(buf)
}

/// Run the full decode -> grayscale -> canny -> encode pipeline on one
/// frame's bytes
pub fn process_frame(data: &[u8]) -> Result<Vec<u8>, PipelineError> {
    let frame = decode_frame(data)?;
    let gray = to_grayscale(&frame);
    let edges = detect_edges(&gray);

    debug!(
        "processed a {}x{} frame into an edge map",
        edges.width(),
        edges.height()
    );

    encode_jpeg(&edges)
}
