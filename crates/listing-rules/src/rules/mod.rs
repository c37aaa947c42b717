//! Category field rules: authored records and the frozen lookup table

pub mod records;
pub mod table;

pub use records::{RawCategoryRule, CATEGORY_FIELD_RULES};
pub use table::{BuildReport, CategoryRule, RuleTable, UnmappedLabel, FALLBACK_SUBCATEGORY};
