//! API endpoint modules.

pub mod health;
pub mod media_files;
pub mod openapi;

pub use health::configure_health_routes;
pub use media_files::configure_routes as configure_media_file_routes;
pub use openapi::ApiDoc;
