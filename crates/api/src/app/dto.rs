use std::collections::BTreeMap;

use serde::Deserialize;

use brewhall_auth::UserAccount;
use brewhall_catalog::Item;
use brewhall_infra::InventoryView;
use brewhall_orders::Order;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub items: BTreeMap<String, u32>,
    pub tip: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub id: String,
    pub items: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct SetTaxRateRequest {
    pub rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn order_to_json(order: &Order) -> serde_json::Value {
    serde_json::json!({
        "id": order.id().to_string(),
        "customerId": order.customer_id().to_string(),
        "customerName": order.customer_name(),
        "items": order.items(),
        "status": order.status(),
        "createdAt": order.created_at().to_rfc3339(),
        "totalPrice": order.total_price(),
        "tip": order.tip(),
    })
}

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id().to_string(),
        "name": item.name(),
        "description": item.description(),
        "price": item.price(),
    })
}

pub fn inventory_to_json(view: &InventoryView) -> serde_json::Value {
    serde_json::json!({
        "id": view.id.to_string(),
        "items": view.items,
    })
}

pub fn user_to_json(account: &UserAccount) -> serde_json::Value {
    serde_json::json!({
        "id": account.id().to_string(),
        "name": account.name(),
        "username": account.username(),
        "email": account.email(),
        "roles": account.roles().iter().map(|r| r.as_str()).collect::<Vec<_>>(),
    })
}
