//! Dish HTTP handlers

use super::checks::{self, DishContext};
use super::model::{Dish, DishDraft};
use crate::core::error::{GrubError, GrubResult};
use crate::core::pipeline::RequestContext;
use crate::core::response::DataResponse;
use crate::core::store::Store;
use crate::core::validation::Payload;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: Arc<dyn Store<Dish>>,
}

pub async fn list_dishes(State(state): State<DishAppState>) -> Json<DataResponse<Vec<Dish>>> {
    Json(DataResponse::new(state.store.list()))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> GrubResult<Json<DataResponse<Dish>>> {
    let data = Value::Null;
    let mut ctx: DishContext<'_> =
        RequestContext::new(state.store.as_ref(), &data).with_route_id(&dish_id);

    checks::read_pipeline()
        .run(&mut ctx, |ctx| ctx.located().cloned())
        .map(|dish| Json(DataResponse::new(dish)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    Payload(data): Payload,
) -> GrubResult<(StatusCode, Json<DataResponse<Dish>>)> {
    let mut ctx: DishContext<'_> = RequestContext::new(state.store.as_ref(), &data);

    let dish = checks::create_pipeline().run(&mut ctx, |ctx| {
        let dish = DishDraft::parse(ctx.data)?.into_dish(ctx.store.next_id());
        Ok(ctx.store.insert(dish))
    })?;

    tracing::info!(dish_id = %dish.id, "dish created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(dish))))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    Payload(data): Payload,
) -> GrubResult<Json<DataResponse<Dish>>> {
    let mut ctx: DishContext<'_> =
        RequestContext::new(state.store.as_ref(), &data).with_route_id(&dish_id);

    let dish = checks::update_pipeline().run(&mut ctx, |ctx| {
        let id = ctx.located()?.id.clone();
        let dish = DishDraft::parse(ctx.data)?.into_dish(id);
        ctx.store
            .replace(dish)
            .ok_or_else(|| GrubError::not_found(format!("Dish does not exist: {}", ctx.route_id())))
    })?;

    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(Json(DataResponse::new(dish)))
}
