//! Submit-time validation of form values against a resolved field set
//!
//! The create and edit product forms hold their own mutable state; this is
//! the shared check they run before submission. The backend independently
//! re-validates; this layer only drives client UX.

use std::collections::HashMap;

use crate::catalog::FieldKey;
use crate::resolver::ResolvedFields;

/// Field values captured by an authoring form
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: HashMap<FieldKey, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Required fields that are absent or blank, in canonical order
    pub fn missing_required(&self, fields: &ResolvedFields) -> Vec<FieldKey> {
        fields
            .required
            .iter()
            .copied()
            .filter(|key| self.values.get(key).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Validate against the resolved set, one message per missing field
    pub fn validate(&self, fields: &ResolvedFields) -> Result<(), Vec<String>> {
        let missing = self.missing_required(fields);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing
                .into_iter()
                .map(|key| format!("{} is required", key.label()))
                .collect())
        }
    }
}

/// Form label with the requiredness suffix the UI shows
pub fn label_with_suffix(fields: &ResolvedFields, key: FieldKey) -> String {
    if fields.is_required(key) {
        format!("{} *", key.label())
    } else if fields.is_optional(key) {
        format!("{} (Optional)", key.label())
    } else {
        key.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    fn filled(fields: &ResolvedFields) -> FormValues {
        let mut values = FormValues::new();
        for key in &fields.required {
            values.set(*key, "x");
        }
        values
    }

    #[test]
    fn test_complete_form_passes() {
        let fields = resolve(Some("Fashion"), Some("Footwear"));
        let values = filled(&fields);
        assert!(values.validate(&fields).is_ok());
    }

    #[test]
    fn test_blank_required_field_is_reported() {
        let fields = resolve(Some("Fashion"), Some("Footwear"));
        let mut values = filled(&fields);
        values.set(FieldKey::Brand, "   ");
        assert_eq!(values.missing_required(&fields), vec![FieldKey::Brand]);
        let errors = values.validate(&fields).unwrap_err();
        assert_eq!(errors, vec!["Brand is required".to_string()]);
    }

    #[test]
    fn test_optional_fields_never_block_submission() {
        let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        let values = filled(&fields);
        // No optional value set at all
        assert!(values.validate(&fields).is_ok());
    }

    #[test]
    fn test_label_suffixes() {
        let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        assert_eq!(label_with_suffix(&fields, FieldKey::Mrp), "Actual Price (MRP) *");
        assert_eq!(label_with_suffix(&fields, FieldKey::HsnNo), "HSN No. (Optional)");
        assert_eq!(label_with_suffix(&fields, FieldKey::Isbn), "ISBN");
    }
}
