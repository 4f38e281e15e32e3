//! Dish record and the draft built from a request body

use crate::core::entity::Record;
use crate::core::error::{GrubError, GrubResult};
use crate::core::validation::validators::{non_empty_string, positive_number};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A dish offered by the restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    fn resource_name() -> &'static str {
        "dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Every dish field except the identifier, parsed from a request's `data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl DishDraft {
    /// Parse and validate, reporting the first invalid field in the order
    /// name, description, price, image_url
    pub fn parse(data: &Value) -> GrubResult<Self> {
        let name = non_empty_string(data.get("name")).ok_or_else(|| missing("name"))?;
        let description =
            non_empty_string(data.get("description")).ok_or_else(|| missing("description"))?;
        let price = positive_number(data.get("price")).ok_or_else(|| missing("price"))?;
        let image_url =
            non_empty_string(data.get("image_url")).ok_or_else(|| missing("image_url"))?;

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            price: price.clone(),
            image_url: image_url.to_string(),
        })
    }

    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

fn missing(field: &str) -> GrubError {
    GrubError::missing_field("Dish", field)
}
