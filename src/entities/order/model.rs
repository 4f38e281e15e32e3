//! Order record, status values and the draft built from a request body

use crate::core::entity::Record;
use crate::core::error::{GrubError, GrubResult};
use crate::core::validation::validators::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delivery progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// `delivered` accepts no further updates
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A delivery order
///
/// `status` holds whatever string the client supplied at creation; only
/// updates restrict it to an [`OrderStatus`]. `deliverTo`, `mobileNumber`
/// and the dish entries only need to be present and are echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: Value,
    pub mobile_number: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub dishes: Vec<Value>,
}

impl Order {
    /// The stored status, when it is one of the known values
    pub fn status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::parse)
    }

    pub fn is_pending(&self) -> bool {
        self.status() == Some(OrderStatus::Pending)
    }

    pub fn is_delivered(&self) -> bool {
        self.status().is_some_and(|status| status.is_terminal())
    }
}

impl Record for Order {
    fn resource_name() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Every order field except the identifier, parsed from a request's `data`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: Value,
    pub mobile_number: Value,
    pub status: Option<String>,
    pub dishes: Vec<Value>,
}

impl OrderDraft {
    /// Parse and validate, reporting the first invalid field in the order
    /// deliverTo, dishes, mobileNumber
    pub fn parse(data: &Value) -> GrubResult<Self> {
        let deliver_to = required(data, "deliverTo")?;
        let dishes = data
            .get("dishes")
            .and_then(Value::as_array)
            .filter(|dishes| !dishes.is_empty())
            .ok_or_else(|| missing("dishes"))?;
        let mobile_number = required(data, "mobileNumber")?;
        let status = data.get("status").and_then(Value::as_str).map(String::from);

        Ok(Self {
            deliver_to: deliver_to.clone(),
            mobile_number: mobile_number.clone(),
            status,
            dishes: dishes.clone(),
        })
    }

    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status,
            dishes: self.dishes,
        }
    }
}

/// A truthy field of the `data` object
fn required<'v>(data: &'v Value, field: &str) -> GrubResult<&'v Value> {
    data.get(field)
        .filter(|value| is_truthy(value))
        .ok_or_else(|| missing(field))
}

fn missing(field: &str) -> GrubError {
    GrubError::missing_field("Order", field)
}
