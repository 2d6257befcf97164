//! Checkout route handlers.
//!
//! The applied coupon code lives in the session next to the cart; the
//! summary is recomputed from both on every request.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use zephyra_core::format_amount;

use crate::checkout;
use crate::error::Result;
use crate::models::session::keys;
use crate::routes::cart::get_cart;
use crate::state::AppState;

/// Checkout summary display data.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub subtotal: String,
    pub delivery_charge: String,
    pub discount: String,
    pub total: String,
    /// Whether the session's coupon code produced a discount.
    pub coupon_applied: bool,
}

/// Apply coupon request body.
#[derive(Debug, Deserialize)]
pub struct CouponRequest {
    pub code: String,
}

async fn build_summary(state: &AppState, session: &Session) -> Result<SummaryView> {
    let cart = get_cart(session).await?;
    let coupon = session.get::<String>(keys::COUPON).await?;
    let summary = checkout::summary(&cart, state.catalog(), coupon.as_deref());

    Ok(SummaryView {
        subtotal: format_amount(summary.subtotal),
        delivery_charge: format_amount(summary.delivery_charge),
        discount: format_amount(summary.discount),
        total: format_amount(summary.total),
        coupon_applied: !summary.discount.is_zero(),
    })
}

/// Display the order summary.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<SummaryView>> {
    Ok(Json(build_summary(&state, &session).await?))
}

/// Apply a coupon code.
///
/// An unrecognized code still replaces the stored one, erasing any prior
/// discount; the response reports whether the new code applied.
#[instrument(skip(state, session))]
pub async fn apply_coupon(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CouponRequest>,
) -> Result<Json<SummaryView>> {
    session.insert(keys::COUPON, request.code).await?;
    Ok(Json(build_summary(&state, &session).await?))
}

/// Place the order.
///
/// No fulfillment call is made and nothing is cleared; the final summary
/// is echoed back.
#[instrument(skip(state, session))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SummaryView>> {
    Ok(Json(build_summary(&state, &session).await?))
}
