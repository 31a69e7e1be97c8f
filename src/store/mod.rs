//! In-memory store
//!
//! Owns the product and order tables plus the read-only team and testimonial
//! tables. Lookups are linear scans; ids in request bodies are compared
//! loosely (see [`coerce`]). The store itself is not synchronized, the caller
//! holds it behind a lock.

pub mod coerce;
mod model;
mod seed;

use serde_json::Value;
use thiserror::Error;

pub use model::{Order, OrderDraft, Product, ProductDraft, TeamMember, Testimonial};
pub use seed::Catalog;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("order has no items to compute total_cost from")]
    MissingItems,
}

#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    orders: Vec<Order>,
    team: Vec<TeamMember>,
    testimonials: Vec<Testimonial>,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            products: catalog.products,
            orders: Vec::new(),
            team: catalog.team,
            testimonials: catalog.testimonials,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Next product id: highest existing id + 1, or 1 for an empty table
    fn next_product_id(&self) -> i64 {
        self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    /// Append a product and return the id it was given
    pub fn add_product(&mut self, draft: ProductDraft) -> i64 {
        let id = self.next_product_id();
        self.products.push(draft.into_product(id));
        id
    }

    /// Replace the first product matching `key`. Returns whether one matched.
    ///
    /// The stored record keeps its own id, so a string key such as `"2"`
    /// does not turn the id into a string.
    pub fn update_product(&mut self, key: &Value, draft: ProductDraft) -> bool {
        match self
            .products
            .iter_mut()
            .find(|p| coerce::loosely_equals(key, p.id))
        {
            Some(existing) => {
                *existing = draft.into_product(existing.id);
                true
            }
            None => false,
        }
    }

    /// Remove every product matching `key`. Returns how many were removed.
    pub fn delete_products(&mut self, key: &Value) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !coerce::loosely_equals(key, p.id));
        before - self.products.len()
    }

    /// Record a new order and return its id (order count + 1)
    pub fn place_order(&mut self, draft: OrderDraft) -> Result<u64, StoreError> {
        let total = draft.resolved_total().ok_or(StoreError::MissingItems)?;
        let id = self.orders.len() as u64 + 1;
        self.orders.push(draft.into_order(id, total));
        Ok(id)
    }

    /// Set status and message on the first order matching `key`.
    /// Both are overwritten; `None` clears the field.
    pub fn update_order(
        &mut self,
        key: &Value,
        status: Option<Value>,
        message: Option<Value>,
    ) -> bool {
        let Some(order) = self
            .orders
            .iter_mut()
            .find(|o| i64::try_from(o.id).is_ok_and(|id| coerce::loosely_equals(key, id)))
        else {
            return false;
        };

        order.status = status;
        order.message = message;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::model::{ADDRESS_NOT_PROVIDED, ORDER_STATUS_PENDING};
    use super::*;
    use serde_json::json;

    fn seeded() -> Store {
        Store::new(Catalog::default())
    }

    fn product_draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: json!(name),
            price: json!(5.0),
            image: json!("img/x.jpg"),
            quantity: json!(4),
            ..ProductDraft::default()
        }
    }

    fn order_draft(value: Value) -> OrderDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_add_product_uses_max_id() {
        let mut store = seeded();
        assert_eq!(store.add_product(product_draft("Muffin")), 7);
        assert_eq!(store.products().len(), 7);
        assert_eq!(store.products()[6].name, "Muffin");
    }

    #[test]
    fn test_add_product_after_gap() {
        let mut store = seeded();
        store.delete_products(&json!(3));
        assert_eq!(store.add_product(product_draft("Tart")), 7);
        store.delete_products(&json!(6));
        store.delete_products(&json!(7));
        assert_eq!(store.add_product(product_draft("Scone")), 6);
    }

    #[test]
    fn test_add_product_to_empty_table() {
        let mut store = Store::default();
        assert_eq!(store.add_product(product_draft("Roll")), 1);
    }

    #[test]
    fn test_update_product_replaces_record() {
        let mut store = seeded();
        assert!(store.update_product(&json!("2"), product_draft("Rye")));
        let updated = &store.products()[1];
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Rye");
        assert_eq!(updated.quantity, 4);
    }

    #[test]
    fn test_update_missing_product_is_noop() {
        let mut store = seeded();
        let before = store.products().to_vec();
        assert!(!store.update_product(&json!(42), product_draft("Ghost")));
        assert!(!store.update_product(&Value::Null, product_draft("Ghost")));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_all_loose_matches() {
        let mut store = seeded();
        store.products.push(product_draft("Duplicate").into_product(4));
        assert_eq!(store.delete_products(&json!("4")), 2);
        assert!(store.products().iter().all(|p| p.id != 4));
        assert_eq!(store.products().len(), 5);
    }

    #[test]
    fn test_delete_without_id_removes_nothing() {
        let mut store = seeded();
        assert_eq!(store.delete_products(&Value::Null), 0);
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_place_order_defaults() {
        let mut store = seeded();
        let id = store
            .place_order(order_draft(json!({
                "customer_name": "Ravi",
                "customer_email": "ravi@example.com",
                "items": [{"price": 49.99, "quantity": 2}, {"price": 10.0, "quantity": 1}]
            })))
            .unwrap();

        assert_eq!(id, 1);
        let order = &store.orders()[0];
        assert_eq!(order.status, Some(json!(ORDER_STATUS_PENDING)));
        assert_eq!(order.address, ADDRESS_NOT_PROVIDED);
        assert_eq!(order.name, Some(json!("Ravi")));
        assert!((order.total_cost.as_f64().unwrap() - 109.98).abs() < 1e-9);
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let mut store = seeded();
        for expected in 1..=3 {
            let id = store
                .place_order(order_draft(json!({"total_cost": 5, "address": "Pune"})))
                .unwrap();
            assert_eq!(id, expected);
        }
        assert_eq!(store.orders()[2].address, "Pune");
    }

    #[test]
    fn test_order_without_items_or_total_fails() {
        let mut store = seeded();
        assert_eq!(
            store.place_order(order_draft(json!({"customer_name": "X"}))),
            Err(StoreError::MissingItems)
        );
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_update_order_status() {
        let mut store = seeded();
        store
            .place_order(order_draft(json!({"items": []})))
            .unwrap();

        assert!(store.update_order(
            &json!("1"),
            Some(json!("Shipped")),
            Some(json!("Out for delivery"))
        ));
        assert_eq!(store.orders()[0].status, Some(json!("Shipped")));
        assert_eq!(store.orders()[0].message, Some(json!("Out for delivery")));

        assert!(!store.update_order(&json!(9), Some(json!("Lost")), None));
        assert_eq!(store.orders()[0].status, Some(json!("Shipped")));
    }

    #[test]
    fn test_update_order_clears_omitted_fields() {
        let mut store = seeded();
        store
            .place_order(order_draft(json!({"total_cost": 3})))
            .unwrap();

        assert!(store.update_order(&json!(1), None, Some(json!("hi"))));
        let order = &store.orders()[0];
        assert_eq!(order.status, None);
        assert_eq!(order.message, Some(json!("hi")));

        let encoded = serde_json::to_value(order).unwrap();
        assert!(encoded.get("status").is_none());
        assert_eq!(encoded["message"], json!("hi"));
    }

    #[test]
    fn test_product_with_string_fields() {
        let mut store = seeded();
        let draft: ProductDraft = serde_json::from_value(json!({
            "name": "Muffin",
            "price": "5.00",
            "quantity": "4",
            "image": "img/x.jpg"
        }))
        .unwrap();
        assert_eq!(store.add_product(draft), 7);
        let stored = &store.products()[6];
        assert_eq!(stored.price, "5.00");
        assert_eq!(stored.quantity, "4");
        assert_eq!(store.add_product(ProductDraft::default()), 8);
    }
}
