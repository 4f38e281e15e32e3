//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use super::model::Order;
use crate::core::store::Store;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub store: Arc<dyn Store<Order>>,
}

impl OrderDescriptor {
    pub fn new(store: impl Store<Order> + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{order_id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .with_state(state)
    }
}
