//! Category-driven field requirements for product listings
//!
//! Given a product category and subcategory, this crate answers which form
//! fields are required, which are optional, and which should not be shown at
//! all. The authoring forms re-resolve on every category change and drive
//! rendering, requiredness marks and submit validation from the result.
//!
//! The rule table is static configuration: authored records are folded into
//! an immutable index once at startup and only ever read afterwards.
//!
//! ```rust
//! use listing_rules::{resolve, FieldKey};
//!
//! let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
//! assert!(fields.is_required(FieldKey::FssaiLicenseNo));
//! assert!(fields.is_optional(FieldKey::HsnNo));
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod resolver;
pub mod rules;

pub use catalog::{normalize_label, FieldKey};
pub use error::RuleTableError;
pub use form::{label_with_suffix, FormValues, ResolvedFieldsDto};
pub use resolver::{resolve, ResolvedFields, PLATFORM_MANDATORY};
pub use rules::{CategoryRule, RuleTable, CATEGORY_FIELD_RULES};
