//! Media file REST handlers.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::MediaFileStore;
use crate::error::{AppError, AppResult};
use crate::models::{MediaFile, PageParams};

/// Response header carrying the total record count for list requests.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Create a new media file.
///
/// The store assigns the id; a request body that already carries one is
/// rejected.
#[utoipa::path(
    post,
    path = "/api/media-files",
    tag = "MediaFiles",
    request_body = MediaFile,
    responses(
        (status = 201, description = "Media file created", body = MediaFile),
        (status = 400, description = "Request body already carries an id", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_media_file(
    store: web::Data<dyn MediaFileStore>,
    body: web::Json<MediaFile>,
) -> AppResult<HttpResponse> {
    let file = body.into_inner();
    if file.id.is_some() {
        return Err(AppError::IdConflict);
    }

    let created = store.create(file).await?;

    info!(
        "Media file created: id={}, segment={:?}",
        created.id.unwrap_or_default(),
        created.segment
    );

    Ok(HttpResponse::Created().json(created))
}

/// Update a media file, creating it when the body carries no id.
///
/// An id matching an existing row replaces that row's attributes (200). A
/// body without an id falls back to create semantics (201).
#[utoipa::path(
    put,
    path = "/api/media-files",
    tag = "MediaFiles",
    request_body = MediaFile,
    responses(
        (status = 200, description = "Media file updated", body = MediaFile),
        (status = 201, description = "Media file created (no id supplied)", body = MediaFile),
    )
)]
pub async fn update_media_file(
    store: web::Data<dyn MediaFileStore>,
    body: web::Json<MediaFile>,
) -> AppResult<HttpResponse> {
    let file = body.into_inner();
    let had_id = file.id.is_some();

    let saved = store.save(file).await?;

    info!(
        "Media file saved: id={}, created={}",
        saved.id.unwrap_or_default(),
        !had_id
    );

    if had_id {
        Ok(HttpResponse::Ok().json(saved))
    } else {
        Ok(HttpResponse::Created().json(saved))
    }
}

/// List media files.
///
/// Returns one page as a JSON array; the total count goes out in the
/// `X-Total-Count` header.
#[utoipa::path(
    get,
    path = "/api/media-files",
    tag = "MediaFiles",
    params(
        ("page" = Option<u64>, Query, description = "1-based page index (default: 1)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 20, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort specification, e.g. `id,desc`"),
    ),
    responses(
        (status = 200, description = "One page of media files", body = [MediaFile]),
        (status = 400, description = "Invalid sort specification", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_media_files(
    store: web::Data<dyn MediaFileStore>,
    query: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let (files, total) = store.find_page(&query).await?;

    Ok(HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, total.to_string()))
        .json(files))
}

/// Get a media file by id.
#[utoipa::path(
    get,
    path = "/api/media-files/{id}",
    tag = "MediaFiles",
    params(("id" = i64, Path, description = "Media file id")),
    responses(
        (status = 200, description = "Media file", body = MediaFile),
        (status = 404, description = "No media file with this id", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_media_file(
    store: web::Data<dyn MediaFileStore>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let file = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Media file {}", id)))?;

    Ok(HttpResponse::Ok().json(file))
}

/// Delete a media file by id.
///
/// Idempotent: deleting an absent id still reports success.
#[utoipa::path(
    delete,
    path = "/api/media-files/{id}",
    tag = "MediaFiles",
    params(("id" = i64, Path, description = "Media file id")),
    responses(
        (status = 200, description = "Media file deleted (or already absent)"),
    )
)]
pub async fn delete_media_file(
    store: web::Data<dyn MediaFileStore>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    store.delete_by_id(id).await?;

    info!("Media file deleted: id={}", id);

    Ok(HttpResponse::Ok().finish())
}

/// Configure media file routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/media-files")
            .route(web::get().to(list_media_files))
            .route(web::post().to(create_media_file))
            .route(web::put().to(update_media_file)),
    )
    .service(
        web::resource("/media-files/{id}")
            .route(web::get().to(get_media_file))
            .route(web::delete().to(delete_media_file)),
    );
}
