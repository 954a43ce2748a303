use serde::{Deserialize, Serialize};

/// An in-memory representation of an image, encoded as base 64. Both the
/// request and the response bodies have this shape
#[derive(Serialize, Deserialize)]
pub struct B64Image {
    pub image: String,
}

impl std::fmt::Debug for B64Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B64Image {{ image: <{} bytes> }}", self.image.len())
    }
}
