use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, OriginalUri, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
    routing::get,
};

use cosmocats_core::ProductId;
use cosmocats_products::Product;

use crate::app::dto::{ProductCreationRequest, ProductResponse};
use crate::app::errors::{self, ApiError};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn parse_id(path: Result<Path<ProductId>, PathRejection>) -> Result<ProductId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::malformed(e.body_text()))
}

fn parse_body(
    body: Result<Json<ProductCreationRequest>, JsonRejection>,
) -> Result<ProductCreationRequest, ApiError> {
    body.map(|Json(req)| req)
        .map_err(|e| ApiError::malformed(e.body_text()))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<ProductResponse>> {
    Json(
        services
            .list_products()
            .into_iter()
            .map(ProductResponse::from)
            .collect(),
    )
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<ProductId>, PathRejection>,
) -> Response {
    let result = parse_id(path).and_then(|id| Ok(services.get_product(id)?));
    errors::respond(&uri, result.map(|p| Json(ProductResponse::from(p))))
}

/// Upsert: an `id` in the body is honored, otherwise one is generated.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ProductCreationRequest>, JsonRejection>,
) -> Response {
    let result = parse_body(body).and_then(|req| {
        let (id, draft) = req.into_parts();
        let data = draft.validate()?;
        let id = id.unwrap_or_else(ProductId::new);
        Ok(services.create_product(Product::new(id, data)))
    });
    errors::respond(
        &uri,
        result.map(|p| (StatusCode::CREATED, Json(ProductResponse::from(p)))),
    )
}

/// Full replacement. The body is validated before the store is touched; any
/// `id` in the body is ignored.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ProductCreationRequest>, JsonRejection>,
) -> Response {
    let result = parse_id(path).and_then(|id| {
        let (_, draft) = parse_body(body)?.into_parts();
        let data = draft.validate()?;
        Ok(services.update_product(id, data)?)
    });
    errors::respond(&uri, result.map(|p| Json(ProductResponse::from(p))))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<ProductId>, PathRejection>,
) -> Response {
    let result = parse_id(path).and_then(|id| Ok(services.delete_product(id)?));
    errors::respond(&uri, result.map(|()| StatusCode::NO_CONTENT))
}
