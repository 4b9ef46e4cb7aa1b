//! Post-scoring attribute filters for the Hybrid strategy's step 7.
//!
//! Every filter here follows the same shape: narrow `candidates` by one
//! attribute, then fall back to the unfiltered set if narrowing would
//! leave nothing — except the category filter's `sewer` branch and the
//! product-type filter's `critical_types` branch, which are strict and
//! may signal "no match" instead.

mod angle;
mod category;
mod clamp;
mod flags;
mod product_type;
mod thread;

pub use angle::filter_by_angle;
pub use category::{effective_category, filter_by_category};
pub use clamp::filter_by_clamp;
pub use flags::{filter_by_detachable, filter_by_reducer, filter_eco_preference};
pub use product_type::{filter_by_product_type, is_critical, CRITICAL_TYPES};
pub use thread::filter_by_thread_direction;
