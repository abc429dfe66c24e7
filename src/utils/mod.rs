//! Utility functions for validation, code generation, and request handling.
//!
//! - [`validators`] - URL and shortcode predicates
//! - [`code_generator`] - Random shortcode generation
//! - [`request_info`] - Origin, referrer, and client IP extraction

pub mod code_generator;
pub mod request_info;
pub mod validators;
