//! Pure text canonicalization for client SKUs and product names.
//!
//! Two total functions, [`normalize_sku`] and [`normalize_name`], plus the
//! static lookup tables they draw on ([`mod@tables`]). Nothing here
//! touches I/O, locale, or wall-clock time: same input, same config
//! (there is none — these are unconditional), same output, forever. Both
//! functions sit in the hot path of every candidate the Hybrid strategy
//! scores, so regular expressions are compiled once via `once_cell` and
//! reused across calls.

mod name;
mod sku;
mod tables;

pub use name::normalize_name;
pub use sku::normalize_sku;
pub use tables::mm_to_inch;
