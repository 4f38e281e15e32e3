//! Checks and pipelines for order routes
//!
//! The three quantity passes are independent: each re-scans `dishes` from
//! index 0 and reports only its own first offending index, so an earlier pass
//! can mask a later pass failing on the same entry.

use super::model::{Order, OrderDraft, OrderStatus};
use crate::core::error::{GrubError, GrubResult};
use crate::core::pipeline::{Pipeline, RequestContext};
use crate::core::validation::validators::{
    conflicting_id, display_value, first_invalid_index, is_integer, is_non_positive, is_present,
};
use serde_json::Value;

pub type OrderContext<'a> = RequestContext<'a, Order>;

/// Attach the order named by the route, or fail with 404
pub fn order_exists(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    ctx.locate(|id| format!("Matching order not found: {}", id))
}

pub fn dishes_is_array(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    if ctx.field("dishes").is_some_and(Value::is_array) {
        Ok(())
    } else {
        Err(GrubError::bad_request("Order must have at least one dish"))
    }
}

pub fn dishes_have_quantity(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    scan_dishes(ctx, |dish| is_present(dish.get("quantity")))
}

pub fn quantity_is_positive(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    scan_dishes(ctx, |dish| !dish.get("quantity").is_some_and(is_non_positive))
}

pub fn quantity_is_integer(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    scan_dishes(ctx, |dish| dish.get("quantity").is_some_and(is_integer))
}

fn scan_dishes<F>(ctx: &OrderContext<'_>, is_valid: F) -> GrubResult<()>
where
    F: Fn(&Value) -> bool,
{
    let Some(dishes) = ctx.field("dishes").and_then(Value::as_array) else {
        return Ok(());
    };

    match first_invalid_index(dishes, is_valid) {
        Some(index) => Err(GrubError::bad_request(format!(
            "Dish {} must have a quantity that is an integer greater than 0",
            index
        ))),
        None => Ok(()),
    }
}

/// Submitted status must be one of the known values
pub fn status_is_valid(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    let known = ctx
        .field("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse);

    match known {
        Some(_) => Ok(()),
        None => Err(GrubError::bad_request(format!(
            "Order must have a status of {}",
            OrderStatus::ALL.map(|status| status.as_str()).join(", ")
        ))),
    }
}

/// A stored `delivered` order cannot be updated
pub fn status_is_not_delivered(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    if ctx.located()?.is_delivered() {
        return Err(GrubError::bad_request("A delivered order cannot be changed"));
    }
    Ok(())
}

/// A non-blank body id must equal the route id
pub fn order_id_matches_route(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    let route_id = ctx.route_id();
    match conflicting_id(ctx.field("id"), route_id) {
        Some(id) => Err(GrubError::bad_request(format!(
            "Order id does not match route id. Order: {}, Route: {}.",
            display_value(id),
            route_id
        ))),
        None => Ok(()),
    }
}

pub fn order_is_valid(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    OrderDraft::parse(ctx.data).map(drop)
}

/// Only pending orders may be removed
pub fn order_is_pending(ctx: &mut OrderContext<'_>) -> GrubResult<()> {
    if ctx.located()?.is_pending() {
        Ok(())
    } else {
        Err(GrubError::bad_request(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

fn with_dish_quantity_checks<'a>(pipeline: Pipeline<OrderContext<'a>>) -> Pipeline<OrderContext<'a>> {
    pipeline
        .check("dishesIsArray", dishes_is_array)
        .check("dishesHaveQuantity", dishes_have_quantity)
        .check("quantityIsPositive", quantity_is_positive)
        .check("quantityIsInteger", quantity_is_integer)
}

pub fn read_pipeline<'a>() -> Pipeline<OrderContext<'a>> {
    Pipeline::new("orders.read").check("orderExists", order_exists)
}

pub fn create_pipeline<'a>() -> Pipeline<OrderContext<'a>> {
    with_dish_quantity_checks(Pipeline::new("orders.create")).check("orderIsValid", order_is_valid)
}

pub fn update_pipeline<'a>() -> Pipeline<OrderContext<'a>> {
    let pipeline = Pipeline::new("orders.update").check("orderExists", order_exists);
    with_dish_quantity_checks(pipeline)
        .check("statusIsValid", status_is_valid)
        .check("statusIsNotDelivered", status_is_not_delivered)
        .check("orderIdMatchesRoute", order_id_matches_route)
        .check("orderIsValid", order_is_valid)
}

pub fn delete_pipeline<'a>() -> Pipeline<OrderContext<'a>> {
    Pipeline::new("orders.delete")
        .check("orderExists", order_exists)
        .check("orderIsPending", order_is_pending)
}
