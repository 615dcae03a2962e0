//! PowerCost Calculator library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod calculator;
pub mod catalog;
pub mod core;
pub mod i18n;
pub mod pricing;
pub mod render;
pub mod session;
