//! Order HTTP handlers

use super::checks::{self, OrderContext};
use super::model::{Order, OrderDraft};
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

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: Arc<dyn Store<Order>>,
}

pub async fn list_orders(State(state): State<OrderAppState>) -> Json<DataResponse<Vec<Order>>> {
    Json(DataResponse::new(state.store.list()))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> GrubResult<Json<DataResponse<Order>>> {
    let data = Value::Null;
    let mut ctx: OrderContext<'_> =
        RequestContext::new(state.store.as_ref(), &data).with_route_id(&order_id);

    checks::read_pipeline()
        .run(&mut ctx, |ctx| ctx.located().cloned())
        .map(|order| Json(DataResponse::new(order)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    Payload(data): Payload,
) -> GrubResult<(StatusCode, Json<DataResponse<Order>>)> {
    let mut ctx: OrderContext<'_> = RequestContext::new(state.store.as_ref(), &data);

    let order = checks::create_pipeline().run(&mut ctx, |ctx| {
        let order = OrderDraft::parse(ctx.data)?.into_order(ctx.store.next_id());
        Ok(ctx.store.insert(order))
    })?;

    tracing::info!(order_id = %order.id, "order created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    Payload(data): Payload,
) -> GrubResult<Json<DataResponse<Order>>> {
    let mut ctx: OrderContext<'_> =
        RequestContext::new(state.store.as_ref(), &data).with_route_id(&order_id);

    let order = checks::update_pipeline().run(&mut ctx, |ctx| {
        let id = ctx.located()?.id.clone();
        let order = OrderDraft::parse(ctx.data)?.into_order(id);
        ctx.store.replace(order).ok_or_else(|| {
            GrubError::not_found(format!("Matching order not found: {}", ctx.route_id()))
        })
    })?;

    tracing::info!(order_id = %order.id, status = ?order.status, "order updated");
    Ok(Json(DataResponse::new(order)))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> GrubResult<StatusCode> {
    let data = Value::Null;
    let mut ctx: OrderContext<'_> =
        RequestContext::new(state.store.as_ref(), &data).with_route_id(&order_id);

    checks::delete_pipeline().run(&mut ctx, |ctx| {
        ctx.store.remove(ctx.route_id()).ok_or_else(|| {
            GrubError::not_found(format!("Matching order not found: {}", ctx.route_id()))
        })
    })?;

    tracing::info!(order_id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
