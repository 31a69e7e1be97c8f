// Store record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::coerce;

/// Status given to every newly placed order
pub const ORDER_STATUS_PENDING: &str = "Pending";

/// Address stored when the customer left it out
pub const ADDRESS_NOT_PROVIDED: &str = "Not provided";

/// Keys the server owns on an order; client copies are discarded
const RESERVED_ORDER_KEYS: [&str; 5] = ["id", "status", "message", "name", "email"];

/// Catalog item
///
/// Only `id` is owned by the server. The other fields hold whatever JSON the
/// admin panel sent, so `"price": "5.00"` is stored and listed as a string.
/// Fields the client left out are left out of the listing too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub name: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub price: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub image: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub quantity: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Product fields as sent by the admin panel
///
/// Any `id` in the body is dropped here; the store decides the id.
/// Nothing is validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub image: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductDraft {
    pub fn into_product(self, id: i64) -> Product {
        let mut extra = self.extra;
        extra.remove("id");
        Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: self.quantity,
            extra,
        }
    }
}

/// `price * quantity` of one order line, NaN when either is unreadable
fn line_total(item: &Value) -> f64 {
    coerce::to_number(item.get("price")) * coerce::to_number(item.get("quantity"))
}

/// Placed order
///
/// `status` and `message` are `None` once an admin update omits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<Value>,
    pub address: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    pub total_cost: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order fields as sent by the storefront checkout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub customer_name: Option<Value>,
    #[serde(default)]
    pub customer_email: Option<Value>,
    #[serde(default)]
    pub address: Value,
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(default)]
    pub total_cost: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderDraft {
    /// Total to store: the client's value unless it is missing, zero or empty
    ///
    /// A computed total sums `price * quantity` over the items; numeric
    /// strings count as numbers and an unreadable line makes the total
    /// `null`. Returns `None` when a total has to be computed but `items`
    /// is not an array.
    pub fn resolved_total(&self) -> Option<Value> {
        if coerce::is_truthy(&self.total_cost) {
            return Some(self.total_cost.clone());
        }
        let items = self.items.as_ref()?.as_array()?;
        let total: f64 = items.iter().map(line_total).sum();
        Some(Number::from_f64(total).map_or(Value::Null, Value::Number))
    }

    /// Build the stored order. `total_cost` comes from [`Self::resolved_total`].
    pub fn into_order(self, id: u64, total_cost: Value) -> Order {
        let mut extra = self.extra;
        for key in RESERVED_ORDER_KEYS {
            extra.remove(key);
        }

        let address = if coerce::is_truthy(&self.address) {
            self.address
        } else {
            Value::from(ADDRESS_NOT_PROVIDED)
        };

        Order {
            id,
            status: Some(Value::from(ORDER_STATUS_PENDING)),
            message: Some(Value::from("")),
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            address,
            items: self.items,
            total_cost,
            extra,
        }
    }
}

/// Bakery staff shown on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
}

/// Customer quote shown on the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: Value) -> OrderDraft {
        serde_json::from_value(value).unwrap()
    }

    fn total_of(value: Value) -> f64 {
        draft(value).resolved_total().unwrap().as_f64().unwrap()
    }

    #[test]
    fn test_total_computed_from_items() {
        let total = total_of(json!({
            "items": [{"price": 2.5, "quantity": 2}, {"price": 10.0, "quantity": 1}]
        }));
        assert!((total - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_from_string_prices_and_quantities() {
        let total = total_of(json!({
            "items": [{"price": "5", "quantity": 2}, {"price": 1.5, "quantity": "4"}]
        }));
        assert!((total - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_unreadable_line_makes_total_null() {
        let d = draft(json!({"items": [{"price": "abc", "quantity": 1}]}));
        assert_eq!(d.resolved_total(), Some(Value::Null));
        let d = draft(json!({"items": [{"quantity": 1}]}));
        assert_eq!(d.resolved_total(), Some(Value::Null));
    }

    #[test]
    fn test_zero_total_is_recomputed() {
        assert!((total_of(json!({"total_cost": 0, "items": [{"price": 4.0, "quantity": 3}]})) - 12.0).abs() < 1e-9);
        assert!((total_of(json!({"total_cost": "", "items": [{"price": 4.0, "quantity": 1}]})) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_total_kept_verbatim() {
        let d = draft(json!({"total_cost": 99.5, "items": [{"price": 1.0, "quantity": 1}]}));
        assert_eq!(d.resolved_total(), Some(json!(99.5)));
        let d = draft(json!({"total_cost": "10.00", "items": []}));
        assert_eq!(d.resolved_total(), Some(json!("10.00")));
    }

    #[test]
    fn test_missing_items_cannot_be_totalled() {
        assert_eq!(draft(json!({})).resolved_total(), None);
        assert_eq!(draft(json!({"items": "none"})).resolved_total(), None);
        assert_eq!(draft(json!({"total_cost": 20})).resolved_total(), Some(json!(20)));
    }

    #[test]
    fn test_into_order_fills_server_fields() {
        let d = draft(json!({
            "id": 99,
            "status": "Delivered",
            "customer_name": "Asha",
            "customer_email": "asha@example.com",
            "address": "",
            "phone": "555-0100",
            "items": [{"price": 5.0, "quantity": 2, "name": "Muffin"}]
        }));
        let order = d.into_order(1, json!(10.0));

        assert_eq!(order.id, 1);
        assert_eq!(order.status, Some(json!(ORDER_STATUS_PENDING)));
        assert_eq!(order.message, Some(json!("")));
        assert_eq!(order.name, Some(json!("Asha")));
        assert_eq!(order.email, Some(json!("asha@example.com")));
        assert_eq!(order.address, ADDRESS_NOT_PROVIDED);
        assert_eq!(order.extra.get("phone"), Some(&json!("555-0100")));
        assert!(!order.extra.contains_key("id"));
        assert!(!order.extra.contains_key("status"));

        let encoded = serde_json::to_value(&order).unwrap();
        assert_eq!(encoded["id"], json!(1));
        assert_eq!(encoded["status"], json!("Pending"));
        assert_eq!(encoded["phone"], json!("555-0100"));
        assert_eq!(encoded["items"][0]["name"], json!("Muffin"));
    }

    #[test]
    fn test_product_keeps_client_fields() {
        let d: ProductDraft = serde_json::from_value(json!({
            "id": "x",
            "name": "Muffin",
            "price": "5.00",
            "quantity": "4",
            "description": "choc"
        }))
        .unwrap();
        let encoded = serde_json::to_value(d.into_product(7)).unwrap();
        assert_eq!(
            encoded,
            json!({
                "id": 7,
                "name": "Muffin",
                "price": "5.00",
                "quantity": "4",
                "description": "choc"
            })
        );
    }
}
