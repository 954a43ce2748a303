//! The user-facing JSON web server that listens for frame processing
//! requests. This is the "front end". The process route runs the fixed edge
//! detection pipeline on the posted frame and returns the result in place.

use super::protocol::B64Image;
use super::WebError;
use crate::pipeline;
use actix_web::{post, web, Responder};
use base64::{engine::general_purpose, Engine as _};
use tracing::info;

type Result<T> = std::result::Result<T, WebError>;

#[post("/process")]
pub async fn process(req: web::Json<B64Image>) -> Result<impl Responder> {
    // Parse the input request
    let data = general_purpose::STANDARD.decode(&req.image)?;

    // Run the edge detection pipeline on the frame
    let jpeg = pipeline::process_frame(&data)?;

    info!("finished serving process request");

    Ok(web::Json(B64Image {
        image: general_purpose::STANDARD.encode(jpeg),
    }))
}
