//! Shared data model for the partmatch catalog matcher.
//!
//! Every other crate in the workspace depends on this one for the
//! entities that flow through the pipeline: [`Product`], [`ClientMapping`],
//! [`MatchRequest`], [`MatchResult`], [`Attributes`] and friends, plus the
//! crate-spanning [`PartmatchError`]. Nothing here performs I/O or holds
//! state; nothing in this crate knows about normalization, fuzzy scoring,
//! or strategy ordering. Keeping the types free of behavior lets every
//! downstream crate depend on a stable, pure vocabulary.

mod attributes;
mod error;
mod ids;
mod mapping;
mod product;
mod request;
mod result;

pub use attributes::{
    Angle, Attributes, Category, Color, FittingSize, PipeSize, ProductType, ThreadDirection,
    ThreadSize,
};
pub use error::PartmatchError;
pub use ids::{ClientId, ProductId};
pub use mapping::ClientMapping;
pub use product::Product;
pub use request::MatchRequest;
pub use result::{MatchResult, MatchType};
