pub mod pipeline;
pub mod server;

/// Edgeserve configuration -- can eventually be lazy_static parsed from a
/// config file
pub mod config {
    /// Address the HTTP server binds to
    pub const BIND_ADDR: &str = "0.0.0.0";

    /// Port the process route is served on
    pub const PORT: u16 = 8769;

    /// Canny hysteresis thresholds, on the 0-255 gradient magnitude scale.
    /// Weak edges between the two are kept only when connected to a strong
    /// edge
    pub const CANNY_LOW: f32 = 50.0;
    pub const CANNY_HIGH: f32 = 150.0;

    /// Quality used when re-encoding the edge map as JPEG
    pub const JPEG_QUALITY: u8 = 75;

    /// Default log filter
    pub const RUST_LOG: &str = "info,actix_web=info";
}
