use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::extract::JsonBody;
use super::models::*;
use super::server::AppState;
use crate::error::Result;

const SERVICE_MESSAGE: &str = "Item Registry REST API Cluster";

pub const ENDPOINTS: Endpoints = Endpoints(&[
    ("GET /health", "Health check"),
    ("GET /api/items", "Get all items"),
    ("GET /api/items/:id", "Get item by ID"),
    ("POST /api/items", "Create item"),
    ("PUT /api/items/:id", "Update item"),
    ("DELETE /api/items/:id", "Delete item"),
]);

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        hostname: state.instance_name.clone(),
    })
}

/// Service description and endpoint listing
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_MESSAGE,
        hostname: state.instance_name.clone(),
        endpoints: ENDPOINTS,
    })
}

/// Get all items
pub async fn list_items(State(state): State<AppState>) -> Json<ItemListResponse> {
    let items = state.registry.read().await.list();

    Json(ItemListResponse {
        success: true,
        count: items.len(),
        data: items,
        hostname: state.instance_name.clone(),
    })
}

/// Get a single item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>> {
    let item = state.registry.read().await.get(&id)?;

    Ok(Json(ItemResponse {
        success: true,
        data: item,
        hostname: state.instance_name.clone(),
    }))
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>)> {
    let item = state.registry.write().await.create(
        req.name.as_deref(),
        req.description.as_deref(),
        &state.instance_name,
    )?;

    crate::log_item_operation!("create", item.id);

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            success: true,
            data: item,
            hostname: state.instance_name.clone(),
        }),
    ))
}

/// Update an item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemResponse>> {
    let changed = changed_fields(&req);
    let item = state.registry.write().await.update(
        &id,
        req.name.as_deref(),
        req.description.as_deref(),
        &state.instance_name,
    )?;

    crate::log_item_operation!("update", item.id, changed.as_str());

    Ok(Json(ItemResponse {
        success: true,
        data: item,
        hostname: state.instance_name.clone(),
    }))
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemDeletedResponse>> {
    let item = state.registry.write().await.delete(&id)?;

    crate::log_item_operation!("delete", item.id);

    Ok(Json(ItemDeletedResponse {
        success: true,
        message: "Item deleted",
        data: item,
        hostname: state.instance_name.clone(),
    }))
}

/// Comma-separated list of the fields an update request will overwrite
fn changed_fields(req: &UpdateItemRequest) -> String {
    let mut fields = Vec::new();
    if req.name.as_deref().is_some_and(|name| !name.is_empty()) {
        fields.push("name");
    }
    if req.description.is_some() {
        fields.push("description");
    }
    fields.join(",")
}
