//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (?category= filters)
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category taxonomy
//!
//! # Cart
//! GET  /cart                   - Cart view with line totals
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Update line quantity
//! POST /cart/remove            - Remove line
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! GET  /checkout               - Order summary
//! POST /checkout/coupon        - Apply a coupon code
//! POST /checkout/place         - Echo the final summary
//!
//! # Auth (mocked)
//! POST /auth/signin            - Sign in
//! POST /auth/register          - Register
//! POST /auth/logout            - Sign out
//! GET  /auth/me                - Current user
//!
//! # Assistant
//! POST /chat/open              - Reset conversation to the greeting
//! GET  /chat                   - Transcript
//! POST /chat/send              - Send a message
//!
//! # Visual search
//! POST /search/image           - Find similar products for an image
//! POST /search/close           - Reset the search
//!
//! # Inference proxy
//! POST /api/generate           - Pass-through to the model provider
//! ```

pub mod auth;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod products;
pub mod proxy;
pub mod vision;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/coupon", post(checkout::apply_coupon))
        .route("/place", post(checkout::place_order))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(auth::signin))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the assistant routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chat::show))
        .route("/open", post(chat::open))
        .route("/send", post(chat::send))
}

/// Create the visual search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/image", post(vision::search))
        .route("/close", post(vision::close))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/categories", get(products::categories))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .nest("/checkout", checkout_routes())
        // Auth
        .nest("/auth", auth_routes())
        // Assistant
        .nest("/chat", chat_routes())
        // Visual search
        .nest("/search", search_routes())
        // Inference proxy
        .route("/api/generate", post(proxy::generate))
}
