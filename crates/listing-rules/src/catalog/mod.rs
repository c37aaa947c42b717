//! Field catalog: canonical keys and label normalization

pub mod field_key;
pub mod labels;

pub use field_key::FieldKey;
pub use labels::normalize_label;
