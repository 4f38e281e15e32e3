//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish};
use super::model::Dish;
use crate::core::store::Store;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
///
/// Dishes can be listed, read, created and updated; they are never deleted.
pub struct DishDescriptor {
    pub store: Arc<dyn Store<Dish>>,
}

impl DishDescriptor {
    pub fn new(store: impl Store<Dish> + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        let state = DishAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/dishes", get(list_dishes).post(create_dish))
            .route("/dishes/{dish_id}", get(get_dish).put(update_dish))
            .with_state(state)
    }
}
