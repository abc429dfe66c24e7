//! Core domain entities representing the business data model.
//!
//! - [`ShortUrlEntry`] - The mapping stored behind a shortcode
//! - [`ClickRecord`] - One redirect observed on a shortcode

pub mod click;
pub mod short_url;

pub use click::{ClickRecord, DIRECT_REFERRER, UNKNOWN_SOURCE};
pub use short_url::ShortUrlEntry;
