//! Integration tests module
//!
//! This module contains the integration tests for the studio site core,
//! organized by component.

pub mod context_test;
pub mod localizer_test;
pub mod settings_store_test;
