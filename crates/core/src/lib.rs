//! E-Shop Core - shared types and page-state logic.
//!
//! This crate provides the domain types used across all E-Shop components:
//! - `storefront` - the server-rendered demo shop (home, product, cart,
//!   profile, and admin pages)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP, no templates. Every page of the storefront is a function of its
//! URL, and the logic that maps query parameters onto rendered state
//! (slider position, category filter, sort order, cart totals, variant
//! selection) lives here where it can be unit-tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Product, variant, specification, and review entities
//! - [`slider`] - Cyclic index arithmetic for the promotional carousel
//! - [`browse`] - Category filtering and price sorting for the grid
//! - [`cart`] - Cart lines and order summary totals
//! - [`variants`] - Per-group option selection for the detail page
//! - [`profile`] - The account profile entity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod profile;
pub mod slider;
pub mod types;
pub mod variants;

pub use types::*;
