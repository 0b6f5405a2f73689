//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media File Handler Server",
        version = "0.1.0",
        description = "CRUD API for media file records plus a file transfer envelope for messaging"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Media file endpoints
        api::media_files::create_media_file,
        api::media_files::update_media_file,
        api::media_files::list_media_files,
        api::media_files::get_media_file,
        api::media_files::delete_media_file,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Media files
            models::MediaFile,
            models::PageParams,
            models::FileTransfer,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "MediaFiles", description = "Media file record management")
    )
)]
pub struct ApiDoc;
