//! I/O modules for background image fetching.

pub mod image_loader;

// Re-export commonly used types
pub use image_loader::{AsyncImageLoader, HttpImageFetcher, ImageState};
