use crate::config::{BIND_ADDR, PORT};
use crate::pipeline::PipelineError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{middleware, App, HttpResponse, HttpServer};
use anyhow::anyhow;
use std::collections::HashMap;
use std::io;

pub mod protocol;
pub mod routes;

/// Where the HTTP server binds. Constructed once at startup; the process
/// route itself carries no state
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: BIND_ADDR.to_string(),
            port: PORT,
        }
    }
}

/// Start the HTTP server and serve the process route until shutdown
pub async fn run(config: ServerConfig) -> io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .service(routes::process)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[derive(Debug)]
pub struct WebError {
    err: anyhow::Error,
    status: StatusCode,
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl actix_web::error::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let err = HashMap::from([("errors", vec![self.to_string()])]);

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err)
    }

    fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl From<base64::DecodeError> for WebError {
    fn from(err: base64::DecodeError) -> Self {
        WebError {
            err: anyhow!(err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<PipelineError> for WebError {
    fn from(err: PipelineError) -> Self {
        // Bad frames are the client's fault; a failed JPEG write is ours
        let status = match err {
            PipelineError::EmptyInput | PipelineError::Decode(_) => StatusCode::BAD_REQUEST,
            PipelineError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        WebError {
            err: anyhow!(err),
            status,
        }
    }
}
