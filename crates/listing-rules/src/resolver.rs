//! Field requirement resolution
//!
//! The single entry point the authoring forms call on every category or
//! subcategory change. Pure and total: every input resolves to a field set,
//! unknown categories degrade to the platform floor instead of failing.

use std::collections::BTreeSet;

use crate::catalog::FieldKey;
use crate::rules::RuleTable;

/// Fields required for every product regardless of category
pub const PLATFORM_MANDATORY: &[FieldKey] = &[
    FieldKey::Title,
    FieldKey::Description,
    FieldKey::Category,
    FieldKey::Subcategory,
    FieldKey::Images,
    FieldKey::Quantity,
    FieldKey::Mrp,
    FieldKey::ProductPrice,
    FieldKey::GstRate,
    FieldKey::SellerName,
    FieldKey::SellerGstin,
    FieldKey::SellerContact,
    FieldKey::HazardousMaterials,
    FieldKey::IsActive,
];

/// Resolved field sets for one (category, subcategory) pair
///
/// `required` always contains the platform-mandatory fields; `optional` never
/// overlaps `required`. A fresh value is built on every resolution: callers
/// get value equality across identical inputs, not shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    pub required: BTreeSet<FieldKey>,
    pub optional: BTreeSet<FieldKey>,
}

impl ResolvedFields {
    pub fn is_required(&self, key: FieldKey) -> bool {
        self.required.contains(&key)
    }

    pub fn is_optional(&self, key: FieldKey) -> bool {
        self.optional.contains(&key)
    }

    /// Whether the form renders an input for this field at all
    pub fn should_render(&self, key: FieldKey) -> bool {
        self.is_required(key) || self.is_optional(key)
    }
}

impl RuleTable {
    /// Resolve the field sets for a category/subcategory pair
    ///
    /// Absent or blank category yields the platform floor. A known category
    /// with an unmodeled subcategory falls back to the category's `"Others"`
    /// row, or to the empty rule when there is none. Category-required and
    /// platform-mandatory fields win over optional on ties.
    pub fn resolve(&self, category: Option<&str>, subcategory: Option<&str>) -> ResolvedFields {
        let mut fields = ResolvedFields::default();
        fields.required.extend(PLATFORM_MANDATORY.iter().copied());

        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let subcategory = subcategory.map(str::trim).filter(|s| !s.is_empty());

        if let Some(main) = category {
            if let Some(rule) = self.rule_or_fallback(main, subcategory.unwrap_or("")) {
                fields.required.extend(rule.required.iter().copied());
                for key in &rule.optional {
                    if !fields.required.contains(key) {
                        fields.optional.insert(*key);
                    }
                }
            }
        }

        fields
    }
}

/// Resolve against the process-wide rule table
pub fn resolve(category: Option<&str>, subcategory: Option<&str>) -> ResolvedFields {
    RuleTable::global().resolve(category, subcategory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CATEGORY_FIELD_RULES;

    #[test]
    fn test_platform_floor_holds_everywhere() {
        let pairs = [
            (None, None),
            (Some(""), Some("")),
            (Some("Food & Beverages"), Some("Packaged Foods")),
            (Some("Fashion"), Some("NonexistentSub")),
            (Some("UnknownMain"), Some("UnknownSub")),
        ];
        for (category, subcategory) in pairs {
            let fields = resolve(category, subcategory);
            for key in PLATFORM_MANDATORY {
                assert!(
                    fields.is_required(*key),
                    "{:?} missing for {:?}/{:?}",
                    key,
                    category,
                    subcategory
                );
            }
        }
    }

    #[test]
    fn test_required_and_optional_are_disjoint() {
        for record in CATEGORY_FIELD_RULES {
            let fields = resolve(Some(record.main_category), Some(record.sub_category));
            for key in &fields.optional {
                assert!(
                    !fields.required.contains(key),
                    "{:?} both required and optional for {} / {}",
                    key,
                    record.main_category,
                    record.sub_category
                );
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic_and_side_effect_free() {
        let rule_before = RuleTable::global()
            .rule("Food & Beverages", "Packaged Foods")
            .unwrap()
            .clone();

        let first = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        let second = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        let third = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        assert_eq!(first, second);
        assert_eq!(second, third);

        let rule_after = RuleTable::global()
            .rule("Food & Beverages", "Packaged Foods")
            .unwrap();
        assert_eq!(&rule_before, rule_after);
    }

    #[test]
    fn test_empty_category_yields_platform_floor_only() {
        let expected = ResolvedFields {
            required: PLATFORM_MANDATORY.iter().copied().collect(),
            optional: BTreeSet::new(),
        };
        assert_eq!(resolve(None, None), expected);
        assert_eq!(resolve(Some(""), Some("")), expected);
        assert_eq!(resolve(Some("   "), None), expected);
        // Subcategory without category is treated as category absent
        assert_eq!(resolve(None, Some("Packaged Foods")), expected);
    }

    #[test]
    fn test_unknown_subcategory_falls_back_to_others() {
        let fallback = resolve(Some("Fashion"), Some("NonexistentSub"));
        let others = resolve(Some("Fashion"), Some("Others"));
        assert_eq!(fallback, others);

        let missing_sub = resolve(Some("Fashion"), None);
        assert_eq!(missing_sub, others);
    }

    #[test]
    fn test_unknown_main_category_equals_empty() {
        assert_eq!(
            resolve(Some("UnknownMain"), Some("UnknownSub")),
            resolve(Some(""), Some(""))
        );
    }

    #[test]
    fn test_packaged_foods_requirements() {
        let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        for key in [
            FieldKey::FssaiLicenseNo,
            FieldKey::BatchNumber,
            FieldKey::ExpiryDate,
            FieldKey::Manufacturer,
        ] {
            assert!(fields.is_required(key), "{:?} should be required", key);
        }
        for key in PLATFORM_MANDATORY {
            assert!(fields.is_required(*key));
        }
        for key in [FieldKey::ImporterName, FieldKey::ImporterGstin, FieldKey::HsnNo] {
            assert!(fields.is_optional(key), "{:?} should be optional", key);
        }
    }

    #[test]
    fn test_mobile_phone_requirements() {
        let fields = resolve(Some("Electronics & Gadgets"), Some("Mobile Phones & Accessories"));
        for key in [
            FieldKey::Warranty,
            FieldKey::BisCertification,
            FieldKey::EWasteCompliance,
            FieldKey::RecyclablePackaging,
        ] {
            assert!(fields.is_required(key), "{:?} should be required", key);
        }
    }

    #[test]
    fn test_gift_cards_skip_physical_attributes() {
        let fields = resolve(Some("Gifts & Festive Needs"), Some("Gift Cards"));
        assert!(!fields.should_render(FieldKey::Weight));
        assert!(!fields.should_render(FieldKey::Dimensions));
        assert!(fields.is_required(FieldKey::Quantity));
        assert!(fields.is_required(FieldKey::Mrp));
        assert!(fields.is_required(FieldKey::ValidityPeriod));
        assert!(fields.is_required(FieldKey::RedemptionInstructions));
    }

    #[test]
    fn test_query_helpers() {
        let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        assert!(fields.is_required(FieldKey::Mrp));
        assert!(!fields.is_optional(FieldKey::Mrp));
        assert!(fields.is_optional(FieldKey::HsnNo));
        assert!(fields.should_render(FieldKey::HsnNo));
        assert!(!fields.is_required(FieldKey::Isbn));
        assert!(!fields.is_optional(FieldKey::Isbn));
        assert!(!fields.should_render(FieldKey::Isbn));
    }
}
