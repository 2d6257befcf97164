//! Cart route handlers.
//!
//! The session owns the cart; every handler reads it, applies one ledger
//! operation, and writes it back.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use zephyra_core::{ProductId, format_amount};

use crate::cart::Cart;
use crate::error::{AppError, Result};
use crate::models::session::keys;
use crate::pricing;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub line_id: String,
    pub product_id: ProductId,
    pub name: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image_url: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    fn build(cart: &Cart, state: &AppState) -> Self {
        let catalog = state.catalog();
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let product = catalog.product(line.product_id)?;
                let size = line.size.as_deref();
                Some(CartLineView {
                    line_id: line.line_id(),
                    product_id: line.product_id,
                    name: product.name.clone(),
                    size: line.size.clone(),
                    quantity: line.quantity,
                    unit_price: format_amount(pricing::unit_price(product, size)),
                    line_total: format_amount(pricing::line_total(product, size, line.quantity)),
                    image_url: product.image_url.clone(),
                })
            })
            .collect();

        Self {
            items,
            subtotal: format_amount(crate::checkout::subtotal(cart, catalog)),
            item_count: cart.total_quantity(),
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, defaulting to empty.
pub async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub product_id: i32,
    pub quantity: Option<u32>,
    pub size: Option<String>,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub line_id: String,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub line_id: String,
}

/// Display the cart with line totals and subtotal.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await?;
    Ok(Json(CartView::build(&cart, &state)))
}

/// Add an item to the cart, merging with an existing line of the same
/// product and size.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddRequest>,
) -> Result<Json<CartView>> {
    let product_id = ProductId::new(request.product_id);
    if state.catalog().product(product_id).is_none() {
        return Err(AppError::NotFound(format!(
            "product {}",
            request.product_id
        )));
    }

    let mut cart = get_cart(&session).await?;
    cart.add(product_id, request.quantity.unwrap_or(1), request.size);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::build(&cart, &state)))
}

/// Update a line's quantity. Quantities clamp to a minimum of one; unknown
/// line ids are ignored.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.set_quantity(&request.line_id, request.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::build(&cart, &state)))
}

/// Remove a line. Idempotent.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.remove(&request.line_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::build(&cart, &state)))
}

/// Total quantity across all lines, for the cart badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCount>> {
    let cart = get_cart(&session).await?;
    Ok(Json(CartCount {
        count: cart.total_quantity(),
    }))
}
