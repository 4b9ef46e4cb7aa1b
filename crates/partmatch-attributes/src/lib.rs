//! Structured attribute extraction over raw plumbing product/query names.
//!
//! Every function here is pure, total, and operates on the **raw**
//! string rather than the normalizer's output, because several
//! attributes (thread direction markers, inch quotes, clamp ranges)
//! depend on punctuation `normalize_name` destroys. [`extract_all`]
//! bundles every extractor into one [`Attributes`] record for callers
//! that want the full picture in one call (the Hybrid strategy extracts
//! once per query this way); individual extractors remain public for
//! callers that only need one fact.

mod angle;
mod category;
mod clamp;
mod color;
mod embedding_text;
mod fitting_size;
mod flags;
mod pipe_size;
mod product_type;
mod thread;

pub use angle::{extract_angle, normalize_angle};
pub use category::detect_category;
pub use clamp::{clamp_fits_mm, extract_clamp_mm};
pub use color::extract_color;
pub use embedding_text::embedding_query_text;
pub use fitting_size::{extract_fitting_size, normalize_equal_sizes};
pub use flags::{is_detachable, is_eco, is_reducer};
pub use pipe_size::extract_pipe_size;
pub use product_type::extract_product_type;
pub use thread::{extract_thread_direction, extract_thread_size};

use partmatch_types::Attributes;

/// Run every extractor over `s` and bundle the results. Used to compute
/// and cache a `Product`'s attributes, and by the Hybrid strategy to
/// extract once from the client query.
pub fn extract_all(s: &str) -> Attributes {
    Attributes {
        pipe_size: extract_pipe_size(s),
        fitting_size: extract_fitting_size(s),
        thread_size: extract_thread_size(s),
        thread_direction: extract_thread_direction(s),
        product_type: extract_product_type(s),
        angle: extract_angle(s),
        category: detect_category(s),
        color: extract_color(s),
        clamp_mm: extract_clamp_mm(s),
        eco: is_eco(s),
        detachable: is_detachable(s),
        reducer: is_reducer(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmatch_types::ProductType;

    #[test]
    fn extract_all_bundles_every_attribute() {
        let attrs = extract_all("Отвод ПП 110/45 серый");
        assert_eq!(attrs.product_type, Some(ProductType::Elbow));
        assert_eq!(attrs.angle, Some(45));
        assert_eq!(attrs.pipe_size, None);
    }
}
