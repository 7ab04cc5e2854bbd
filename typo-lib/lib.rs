use smartstring::{LazyCompact, SmartString};

pub mod ascii;
pub mod buffer;
pub mod case_convention;
pub mod list;
pub mod options;
pub mod rows;
pub mod sanitize;
pub mod selection;
pub mod transform;
pub mod words;

pub type Tendril = SmartString<LazyCompact>;

pub use options::SanitizeOptions;
pub use sanitize::{
  Pass,
  sanitize,
};
pub use selection::Range;
pub use transform::{
  Transform,
  apply_transform,
  transform_range,
};
