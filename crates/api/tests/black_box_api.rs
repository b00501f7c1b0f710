use brewhall_auth::{Claims, Role};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Build the app (same router as prod), but bind to an ephemeral port.
        let app = brewhall_api::app::build_app(jwt_secret.to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, username: &str, roles: Vec<Role>) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        roles,
        iat: now,
        exp: now + 600,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

const SECRET: &str = "test-secret";

struct Cafe {
    srv: TestServer,
    client: reqwest::Client,
    staff: String,
    admin: String,
}

impl Cafe {
    async fn spawn() -> Self {
        let srv = TestServer::spawn(SECRET).await;
        Self {
            srv,
            client: reqwest::Client::new(),
            staff: mint_jwt(SECRET, "sam", vec![Role::staff()]),
            admin: mint_jwt(SECRET, "admin", vec![Role::admin()]),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.srv.base_url, path)
    }

    /// Register a customer account and mint a matching token.
    async fn customer(&self, username: &str) -> String {
        let res = self
            .client
            .post(self.url("/users"))
            .bearer_auth(&self.admin)
            .json(&json!({
                "name": "Test Customer",
                "username": username,
                "email": format!("{username}@example.com"),
                "roles": ["customer"],
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        mint_jwt(SECRET, username, vec![Role::customer()])
    }

    async fn add_item(&self, name: &str, price: f64) {
        let res = self
            .client
            .post(self.url("/items"))
            .bearer_auth(&self.staff)
            .json(&json!({ "name": name, "description": "", "price": price }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    async fn stock(&self, items: serde_json::Value) {
        let res = self
            .client
            .get(self.url("/inventory"))
            .bearer_auth(&self.staff)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let inventory: serde_json::Value = res.json().await.unwrap();

        let res = self
            .client
            .put(self.url("/inventory"))
            .bearer_auth(&self.staff)
            .json(&json!({ "id": inventory["id"], "items": items }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    async fn inventory_items(&self) -> serde_json::Value {
        let res = self
            .client
            .get(self.url("/inventory"))
            .bearer_auth(&self.staff)
            .send()
            .await
            .unwrap();
        res.json::<serde_json::Value>().await.unwrap()["items"].clone()
    }
}

#[tokio::test]
async fn health_is_public_but_everything_else_requires_a_token() {
    let cafe = Cafe::spawn().await;

    let res = cafe.client.get(cafe.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = cafe.client.get(cafe.url("/whoami")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = cafe.client.get(cafe.url("/orders")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_reflects_the_token() {
    let cafe = Cafe::spawn().await;

    let res = cafe
        .client
        .get(cafe.url("/whoami"))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"], "sam");
    assert_eq!(body["roles"], json!(["staff"]));
}

#[tokio::test]
async fn roles_are_enforced_per_route() {
    let cafe = Cafe::spawn().await;
    let customer = cafe.customer("ada").await;

    // Customers cannot list all orders.
    let res = cafe
        .client
        .get(cafe.url("/orders"))
        .bearer_auth(&customer)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Staff cannot place orders.
    let res = cafe
        .client
        .post(cafe.url("/orders"))
        .bearer_auth(&cafe.staff)
        .json(&json!({ "items": { "Coffee": 1 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Staff cannot set the tax rate.
    let res = cafe
        .client
        .put(cafe.url("/taxRate"))
        .bearer_auth(&cafe.staff)
        .json(&json!({ "rate": 0.1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn full_order_lifecycle_over_the_wire() {
    let cafe = Cafe::spawn().await;
    let customer = cafe.customer("ada").await;

    cafe.add_item("Coffee", 3.00).await;
    cafe.add_item("Milk", 1.50).await;
    cafe.stock(json!({ "Coffee": 10, "Milk": 10 })).await;

    let res = cafe
        .client
        .put(cafe.url("/taxRate"))
        .bearer_auth(&cafe.admin)
        .json(&json!({ "rate": 0.05 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Place: Coffee x2 + Milk x3 at 5% tax, no tip => 11.025.
    let res = cafe
        .client
        .post(cafe.url("/orders"))
        .bearer_auth(&customer)
        .json(&json!({ "items": { "Coffee": 2, "Milk": 3 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(order["status"], "PLACED");
    assert_eq!(order["customerName"], "Test Customer");
    assert!((order["totalPrice"].as_f64().unwrap() - 11.025).abs() < 1e-9);

    // Stock was reserved at placement.
    let items = cafe.inventory_items().await;
    assert_eq!(items["Coffee"], 8);
    assert_eq!(items["Milk"], 7);

    // The customer sees it under /orders/customer.
    let res = cafe
        .client
        .get(cafe.url("/orders/customer"))
        .bearer_auth(&customer)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // Fulfill then pick up.
    let res = cafe
        .client
        .put(cafe.url(&format!("/orders/fulfill/{order_id}")))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // History excludes the order while it is merely FULFILLED.
    let res = cafe
        .client
        .get(cafe.url("/orders/history?itemName=Milk"))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    let res = cafe
        .client
        .put(cafe.url(&format!("/orders/pickup/{order_id}")))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let picked: serde_json::Value = res.json().await.unwrap();
    assert_eq!(picked["status"], "PICKED_UP");

    // Now it shows up in history, filtered by item name.
    let res = cafe
        .client
        .get(cafe.url("/orders/history?itemName=Milk"))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let history = body["items"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], order_id.as_str());

    let res = cafe
        .client
        .get(cafe.url("/orders/history?itemName=Scone"))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    // Pickup is terminal.
    let res = cafe
        .client
        .delete(cafe.url(&format!("/orders/cancel/{order_id}")))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn insufficient_stock_rejects_the_order_and_keeps_stock() {
    let cafe = Cafe::spawn().await;
    let customer = cafe.customer("ada").await;

    cafe.add_item("Coffee", 3.00).await;
    cafe.stock(json!({ "Coffee": 15 })).await;

    let res = cafe
        .client
        .post(cafe.url("/orders"))
        .bearer_auth(&customer)
        .json(&json!({ "items": { "Coffee": 20 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("insufficient inventory"));

    assert_eq!(cafe.inventory_items().await["Coffee"], 15);
}

#[tokio::test]
async fn cancellation_returns_stock() {
    let cafe = Cafe::spawn().await;
    let customer = cafe.customer("ada").await;

    cafe.add_item("Coffee", 3.00).await;
    cafe.stock(json!({ "Coffee": 5 })).await;

    let res = cafe
        .client
        .post(cafe.url("/orders"))
        .bearer_auth(&customer)
        .json(&json!({ "items": { "Coffee": 2 }, "tip": 0.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(cafe.inventory_items().await["Coffee"], 3);

    let res = cafe
        .client
        .delete(cafe.url(&format!("/orders/cancel/{order_id}")))
        .bearer_auth(&cafe.staff)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cancelled: serde_json::Value = res.json().await.unwrap();
    assert_eq!(cancelled["status"], "CANCELLED");

    assert_eq!(cafe.inventory_items().await["Coffee"], 5);
}

#[tokio::test]
async fn tax_rate_is_validated_and_readable_by_anyone() {
    let cafe = Cafe::spawn().await;
    let customer = cafe.customer("ada").await;

    // Any authenticated role may read the rate (seeded default).
    let res = cafe
        .client
        .get(cafe.url("/taxRate"))
        .bearer_auth(&customer)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["rate"].as_f64().unwrap(), 0.02);

    // Out-of-range rates are rejected and the stored rate is unchanged.
    let res = cafe
        .client
        .put(cafe.url("/taxRate"))
        .bearer_auth(&cafe.admin)
        .json(&json!({ "rate": 1.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = cafe
        .client
        .get(cafe.url("/taxRate"))
        .bearer_auth(&cafe.admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["rate"].as_f64().unwrap(), 0.02);
}

#[tokio::test]
async fn placing_an_order_for_an_unknown_account_is_not_found() {
    let cafe = Cafe::spawn().await;
    // Valid token, but no matching account in the directory.
    let ghost = mint_jwt(SECRET, "ghost", vec![Role::customer()]);

    cafe.add_item("Coffee", 3.00).await;
    cafe.stock(json!({ "Coffee": 5 })).await;

    let res = cafe
        .client
        .post(cafe.url("/orders"))
        .bearer_auth(&ghost)
        .json(&json!({ "items": { "Coffee": 1 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
