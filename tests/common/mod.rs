//! Shared helpers for the HTTP integration tests
//!
//! Each test builds its own stores and router so tests never share state.

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Number, Value, json};

pub struct TestApp {
    pub server: TestServer,
    pub dishes: InMemoryStore<Dish>,
    pub orders: InMemoryStore<Order>,
}

pub fn app() -> TestApp {
    app_with(Vec::new(), Vec::new())
}

pub fn app_with(dishes: Vec<Dish>, orders: Vec<Order>) -> TestApp {
    let dishes = InMemoryStore::with_records(dishes);
    let orders = InMemoryStore::with_records(orders);

    let router = ServerBuilder::new()
        .register(DishDescriptor::new(dishes.clone()))
        .register(OrderDescriptor::new(orders.clone()))
        .build();

    TestApp {
        server: TestServer::new(router),
        dishes,
        orders,
    }
}

pub fn dish(id: &str, name: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        price: Number::from(10),
        image_url: format!("https://example.com/{}.png", id),
    }
}

pub fn order(id: &str, status: &str) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: json!("308 Negra Arroyo Lane"),
        mobile_number: json!("(505) 143-3369"),
        status: Some(status.to_string()),
        dishes: vec![json!({ "id": "1", "name": "Taco", "quantity": 2 })],
    }
}

pub fn dish_body() -> Value {
    json!({
        "data": {
            "name": "Taco",
            "description": "x",
            "price": 5,
            "image_url": "u"
        }
    })
}

pub fn order_body(status: &str) -> Value {
    json!({
        "data": {
            "deliverTo": "1 Main St",
            "mobileNumber": "555-0100",
            "status": status,
            "dishes": [{ "id": "1", "name": "Taco", "quantity": 3 }]
        }
    })
}

/// The `message` field of an error response body
pub fn error_message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}
