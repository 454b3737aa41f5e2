use crate::errors::AppResult;
use crate::responses::ApiResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use luma_core::BuildOptions;
use luma_model::{ItemDto, ItemId};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    pub user_id: Option<Uuid>,
    pub include_children: Option<bool>,
    pub include_people: Option<bool>,
}

/// Hydrate one item into its flat DTO.
///
/// Empty or malformed ids fold into the nil sentinel, which the store
/// resolves to nothing, so both surface as a plain 404.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ItemQuery>,
) -> AppResult<Json<ApiResponse<ItemDto>>> {
    let item_id = ItemId::from_request(&id);
    let item = state.library.require_item(&item_id).await?;
    let user = state.resolve_user(query.user_id)?;

    let options = BuildOptions {
        include_children: query.include_children.unwrap_or(true),
        include_people: query.include_people.unwrap_or(true),
    };
    debug!(item = %item.id, user = %user.id, ?options, "hydrating item for request");

    let dto = state.builder.build(&item, user, options).await?;
    Ok(Json(ApiResponse::success(dto)))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
