use thiserror::Error;

/// Configuration defects in the authored rule table
///
/// Raised only by the development-time verification path; the resolver itself
/// never fails at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("unmapped field label '{label}' in rules for {main_category} / {sub_category}")]
    UnmappedLabel {
        main_category: String,
        sub_category: String,
        label: String,
    },

    #[error("duplicate rule entry for {main_category} / {sub_category}")]
    DuplicateEntry {
        main_category: String,
        sub_category: String,
    },
}
