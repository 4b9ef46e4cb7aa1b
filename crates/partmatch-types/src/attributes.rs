use serde::{Deserialize, Serialize};

/// Pipe size expressed as diameter × length, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeSize {
    pub d: u32,
    pub l: u32,
}

/// Fitting size as 1..3 diameters (mm), e.g. a tee's three branches.
pub type FittingSize = Vec<u32>;

/// Thread size as a millimetre diameter paired with its inch notation,
/// e.g. `(32, "1\"")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSize {
    pub mm: u32,
    pub inch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadDirection {
    Inner,
    Outer,
}

/// Closed product-type set. Order in the extractor's marker table is
/// significant; this enum only names the outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Crosspiece,
    Tee,
    Adapter,
    Elbow,
    Coupling,
    Cap,
    Revision,
    Pipe,
    Clip,
    Tube,
    Clamp,
    Valve,
    Filter,
    ReliefValve,
    Siphon,
}

/// Closed catalog category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Pert,
    Pnd,
    Prestige,
    Outdoor,
    Ppr,
    Sewer,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Color {
    White,
    Gray,
    Red,
    #[default]
    None,
}

/// One of the fixed catalog angles; 90 is normalized to 87 downstream
/// (see `normalize_angle`), so both values are representable here.
pub type Angle = u32;

/// All structured facts extractable from a raw product or query string.
/// Every field is optional: a missing attribute is `None`, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub pipe_size: Option<PipeSize>,
    pub fitting_size: Option<FittingSize>,
    pub thread_size: Option<ThreadSize>,
    pub thread_direction: Option<ThreadDirection>,
    pub product_type: Option<ProductType>,
    pub angle: Option<Angle>,
    pub category: Category,
    pub color: Color,
    pub clamp_mm: Option<u32>,
    pub eco: bool,
    pub detachable: bool,
    pub reducer: bool,
}
