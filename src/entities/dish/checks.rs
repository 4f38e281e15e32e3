//! Checks and pipelines for dish routes

use super::model::{Dish, DishDraft};
use crate::core::error::{GrubError, GrubResult};
use crate::core::pipeline::{Pipeline, RequestContext};
use crate::core::validation::validators::{conflicting_id, display_value};

pub type DishContext<'a> = RequestContext<'a, Dish>;

/// Attach the dish named by the route, or fail with 404
pub fn dish_exists(ctx: &mut DishContext<'_>) -> GrubResult<()> {
    ctx.locate(|id| format!("Dish does not exist: {}", id))
}

pub fn dish_is_valid(ctx: &mut DishContext<'_>) -> GrubResult<()> {
    DishDraft::parse(ctx.data).map(drop)
}

/// A non-blank body id must equal the route id
pub fn dish_id_matches_route(ctx: &mut DishContext<'_>) -> GrubResult<()> {
    let route_id = ctx.route_id();
    match conflicting_id(ctx.field("id"), route_id) {
        Some(id) => Err(GrubError::bad_request(format!(
            "Dish id does not match route id. Dish: {}, Route: {}",
            display_value(id),
            route_id
        ))),
        None => Ok(()),
    }
}

pub fn read_pipeline<'a>() -> Pipeline<DishContext<'a>> {
    Pipeline::new("dishes.read").check("dishExists", dish_exists)
}

pub fn create_pipeline<'a>() -> Pipeline<DishContext<'a>> {
    Pipeline::new("dishes.create").check("dishIsValid", dish_is_valid)
}

pub fn update_pipeline<'a>() -> Pipeline<DishContext<'a>> {
    Pipeline::new("dishes.update")
        .check("dishExists", dish_exists)
        .check("dishIsValid", dish_is_valid)
        .check("dishIdMatchesRoute", dish_id_matches_route)
}
