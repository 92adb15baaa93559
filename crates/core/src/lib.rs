//! SAYURA Core - Shared content types and widget logic.
//!
//! This crate provides the types and pure logic used by the storefront:
//! - [`types`] - Content documents as delivered by the CMS, normalized into
//!   one canonical shape (slugs, category references, prices, media refs)
//! - [`catalog`] - Filtering, sorting and related-product selection over
//!   in-memory product lists
//! - [`widgets`] - State machines behind the interactive page widgets
//!   (color swatches, image gallery, product tabs, scroll-aware header)
//!
//! # Architecture
//!
//! The core crate contains only types and deterministic functions - no I/O,
//! no HTTP clients, no templates. Everything here can be tested without a
//! running CMS or browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;
pub mod widgets;

pub use types::*;
