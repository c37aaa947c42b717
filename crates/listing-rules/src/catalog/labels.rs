//! Display label → `FieldKey` normalization
//!
//! The rule table is authored with human-readable labels. This index maps
//! every authored label (and known spelling variants) back to its canonical
//! key. Matching ignores surrounding whitespace and case on the label side;
//! the keys themselves stay fixed.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::field_key::FieldKey;

/// Spelling variants seen in the authored rule data
const LABEL_ALIASES: &[(&str, FieldKey)] = &[
    ("MRP", FieldKey::Mrp),
    ("Maximum Retail Price", FieldKey::Mrp),
    ("Color", FieldKey::Color),
    ("Sub Category", FieldKey::Subcategory),
    ("Sub-Category", FieldKey::Subcategory),
    ("FSSAI License Number", FieldKey::FssaiLicenseNo),
    ("HSN Code", FieldKey::HsnNo),
    ("HSN Number", FieldKey::HsnNo),
    ("Terms and Conditions", FieldKey::TermsAndConditions),
    ("Nutritional Info", FieldKey::NutritionalInfo),
    ("Allergen Info", FieldKey::AllergenInfo),
    ("Veg / Non-Veg", FieldKey::VegNonVeg),
    ("Net Qty", FieldKey::NetQuantity),
    ("E Waste Compliance", FieldKey::EWasteCompliance),
];

static LABEL_INDEX: Lazy<HashMap<String, FieldKey>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for key in FieldKey::all() {
        index.insert(key.label().to_lowercase(), *key);
    }
    for (alias, key) in LABEL_ALIASES {
        index.insert(alias.to_lowercase(), *key);
    }
    index
});

/// Map a free-text field label to its canonical key
///
/// Returns `None` for labels outside the known vocabulary; callers decide
/// whether that is a configuration defect (rule table) or ordinary input.
pub fn normalize_label(label: &str) -> Option<FieldKey> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(key) = LABEL_INDEX.get(&trimmed.to_lowercase()) {
        return Some(*key);
    }
    // Authored data occasionally carries the wire code instead of the label
    FieldKey::from_key(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_ignores_case() {
        assert_eq!(normalize_label("  Brand  "), Some(FieldKey::Brand));
        assert_eq!(normalize_label("country of origin"), Some(FieldKey::CountryOfOrigin));
        assert_eq!(normalize_label("FSSAI LICENSE NO."), Some(FieldKey::FssaiLicenseNo));
    }

    #[test]
    fn test_aliases_map_to_same_key() {
        assert_eq!(normalize_label("Actual Price (MRP)"), Some(FieldKey::Mrp));
        assert_eq!(normalize_label("MRP"), Some(FieldKey::Mrp));
        assert_eq!(normalize_label("Color"), Some(FieldKey::Color));
        assert_eq!(normalize_label("Colour"), Some(FieldKey::Color));
        assert_eq!(normalize_label("HSN Code"), Some(FieldKey::HsnNo));
    }

    #[test]
    fn test_wire_code_fallback() {
        assert_eq!(normalize_label("eWasteCompliance"), Some(FieldKey::EWasteCompliance));
        assert_eq!(normalize_label("sellerGSTIN"), Some(FieldKey::SellerGstin));
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(normalize_label("Lot Number"), None);
        assert_eq!(normalize_label(""), None);
        assert_eq!(normalize_label("   "), None);
    }
}
