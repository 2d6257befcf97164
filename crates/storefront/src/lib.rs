//! Zephyra storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod gemini;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod state;
pub mod vision;
