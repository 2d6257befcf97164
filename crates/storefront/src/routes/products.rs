//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use zephyra_core::ProductId;

use crate::catalog::{Category, Product};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category or subcategory name to filter by.
    pub category: Option<String>,
}

/// List products, optionally filtered by category or subcategory name.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog();
    let products = match query.category.as_deref() {
        Some(name) => catalog.filter(name).into_iter().cloned().collect(),
        None => catalog.products().to_vec(),
    };
    Json(products)
}

/// Product detail by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .product(ProductId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// The category taxonomy.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories().to_vec())
}
