pub mod config;
pub mod source_image;

pub use config::AppConfig;
pub use source_image::SourceImage;
