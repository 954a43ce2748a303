use edgeserve::config::RUST_LOG;
use edgeserve::server::{self, ServerConfig};
use std::{env, io};

use tracing::info;
use tracing_subscriber;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env::set_var("RUST_LOG", RUST_LOG);
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    info!(
        "starting edge detection server on {}:{}",
        config.host, config.port
    );

    // Start the HTTP server
    server::run(config).await
}
