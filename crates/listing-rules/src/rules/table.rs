//! Rule table loader
//!
//! Folds the authored records into an immutable `(main, sub)` index at
//! startup. Configuration defects (unmapped labels, duplicate records) are
//! collected into a build report and logged; they never fail the build at
//! runtime. The development-time `verify` turns them into hard errors.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::records::{RawCategoryRule, CATEGORY_FIELD_RULES};
use crate::catalog::{normalize_label, FieldKey};
use crate::error::RuleTableError;

/// Subcategory row used as the in-category fallback
pub const FALLBACK_SUBCATEGORY: &str = "Others";

/// Parsed field rule for one (main, sub) pair
///
/// Keys keep first-appearance order from the authored record, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRule {
    pub required: Vec<FieldKey>,
    pub optional: Vec<FieldKey>,
}

/// A label in the authored data that maps to no known field key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedLabel {
    pub main_category: String,
    pub sub_category: String,
    pub label: String,
}

/// Defects found while folding the raw records
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub unmapped_labels: Vec<UnmappedLabel>,
    pub duplicate_entries: Vec<(String, String)>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.unmapped_labels.is_empty() && self.duplicate_entries.is_empty()
    }
}

/// Immutable category → subcategory → rule index
///
/// Built once from the authored records and never mutated afterwards; all
/// access goes through lookups that hand out references.
pub struct RuleTable {
    rules: HashMap<&'static str, HashMap<&'static str, CategoryRule>>,
    report: BuildReport,
}

static GLOBAL: Lazy<RuleTable> = Lazy::new(|| RuleTable::from_records(CATEGORY_FIELD_RULES));

impl RuleTable {
    /// The process-wide table built from [`CATEGORY_FIELD_RULES`]
    pub fn global() -> &'static RuleTable {
        &GLOBAL
    }

    /// Fold raw records into an index
    ///
    /// Later records targeting the same (main, sub) pair overwrite earlier
    /// ones; the overwrite is reported as a defect but kept, matching the
    /// behavior of the authored rule source.
    pub fn from_records(records: &'static [RawCategoryRule]) -> Self {
        let mut rules: HashMap<&'static str, HashMap<&'static str, CategoryRule>> = HashMap::new();
        let mut report = BuildReport::default();

        for record in records {
            let rule = CategoryRule {
                required: parse_labels(record, record.required, &mut report),
                optional: parse_labels(record, record.optional, &mut report),
            };

            let subs = rules.entry(record.main_category).or_default();
            if subs.insert(record.sub_category, rule).is_some() {
                log::warn!(
                    "duplicate rule entry for {} / {}, keeping the later record",
                    record.main_category,
                    record.sub_category
                );
                report.duplicate_entries.push((
                    record.main_category.to_string(),
                    record.sub_category.to_string(),
                ));
            }
        }

        Self { rules, report }
    }

    /// Exact rule lookup, no fallback
    pub fn rule(&self, main_category: &str, sub_category: &str) -> Option<&CategoryRule> {
        self.rules.get(main_category)?.get(sub_category)
    }

    /// Rule lookup with the in-category `"Others"` fallback
    pub fn rule_or_fallback(&self, main_category: &str, sub_category: &str) -> Option<&CategoryRule> {
        let subs = self.rules.get(main_category)?;
        subs.get(sub_category).or_else(|| subs.get(FALLBACK_SUBCATEGORY))
    }

    /// Modeled main categories, sorted
    pub fn main_categories(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Modeled subcategories of a main category, sorted
    pub fn subcategories(&self, main_category: &str) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .rules
            .get(main_category)
            .map(|subs| subs.keys().copied().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Defects found while building this table
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Fail on the first configuration defect
    ///
    /// Intended for tests and pre-deploy lints, not for request paths.
    pub fn verify(&self) -> Result<(), RuleTableError> {
        if let Some(unmapped) = self.report.unmapped_labels.first() {
            return Err(RuleTableError::UnmappedLabel {
                main_category: unmapped.main_category.clone(),
                sub_category: unmapped.sub_category.clone(),
                label: unmapped.label.clone(),
            });
        }
        if let Some((main, sub)) = self.report.duplicate_entries.first() {
            return Err(RuleTableError::DuplicateEntry {
                main_category: main.clone(),
                sub_category: sub.clone(),
            });
        }
        Ok(())
    }
}

/// Split a comma-separated label list into keys
///
/// Empty tokens are dropped; unmapped tokens are dropped and reported;
/// repeated keys keep their first position.
fn parse_labels(record: &RawCategoryRule, raw: &str, report: &mut BuildReport) -> Vec<FieldKey> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match normalize_label(token) {
            Some(key) => {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            None => {
                log::warn!(
                    "unmapped field label '{}' in rules for {} / {}",
                    token,
                    record.main_category,
                    record.sub_category
                );
                report.unmapped_labels.push(UnmappedLabel {
                    main_category: record.main_category.to_string(),
                    sub_category: record.sub_category.to_string(),
                    label: token.to_string(),
                });
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_table_is_clean() {
        // Regression guard: every authored label must normalize (typos in the
        // rule source silently drop fields otherwise)
        let table = RuleTable::global();
        assert!(table.verify().is_ok(), "{:?}", table.report());
        assert!(table.report().is_clean());
    }

    #[test]
    fn test_every_main_category_has_fallback_row() {
        let table = RuleTable::global();
        for main in table.main_categories() {
            assert!(
                table.rule(main, FALLBACK_SUBCATEGORY).is_some(),
                "no Others row for {}",
                main
            );
        }
    }

    #[test]
    fn test_split_drops_empty_tokens_and_dedups() {
        const RECORDS: &[RawCategoryRule] = &[RawCategoryRule {
            main_category: "Test",
            sub_category: "Sub",
            required: " , Brand,, Brand ,Colour ,",
            optional: "",
        }];
        let table = RuleTable::from_records(RECORDS);
        let rule = table.rule("Test", "Sub").unwrap();
        assert_eq!(rule.required, vec![FieldKey::Brand, FieldKey::Color]);
        assert!(rule.optional.is_empty());
        assert!(table.report().is_clean());
    }

    #[test]
    fn test_unmapped_label_is_dropped_and_reported() {
        const RECORDS: &[RawCategoryRule] = &[RawCategoryRule {
            main_category: "Test",
            sub_category: "Sub",
            required: "Brand, Lot Number",
            optional: "",
        }];
        let table = RuleTable::from_records(RECORDS);
        let rule = table.rule("Test", "Sub").unwrap();
        assert_eq!(rule.required, vec![FieldKey::Brand]);
        assert_eq!(table.report().unmapped_labels.len(), 1);
        assert_eq!(table.report().unmapped_labels[0].label, "Lot Number");
        assert_eq!(
            table.verify(),
            Err(RuleTableError::UnmappedLabel {
                main_category: "Test".to_string(),
                sub_category: "Sub".to_string(),
                label: "Lot Number".to_string(),
            })
        );
    }

    #[test]
    fn test_later_duplicate_record_wins() {
        const RECORDS: &[RawCategoryRule] = &[
            RawCategoryRule {
                main_category: "Test",
                sub_category: "Sub",
                required: "Brand",
                optional: "",
            },
            RawCategoryRule {
                main_category: "Test",
                sub_category: "Sub",
                required: "Colour",
                optional: "Brand",
            },
        ];
        let table = RuleTable::from_records(RECORDS);
        let rule = table.rule("Test", "Sub").unwrap();
        assert_eq!(rule.required, vec![FieldKey::Color]);
        assert_eq!(rule.optional, vec![FieldKey::Brand]);
        assert_eq!(table.report().duplicate_entries.len(), 1);
    }

    #[test]
    fn test_fallback_lookup() {
        const RECORDS: &[RawCategoryRule] = &[
            RawCategoryRule {
                main_category: "Test",
                sub_category: "Known",
                required: "Brand",
                optional: "",
            },
            RawCategoryRule {
                main_category: "Test",
                sub_category: "Others",
                required: "Material",
                optional: "",
            },
        ];
        let table = RuleTable::from_records(RECORDS);
        let known = table.rule_or_fallback("Test", "Known").unwrap();
        assert_eq!(known.required, vec![FieldKey::Brand]);
        let fallback = table.rule_or_fallback("Test", "Unknown").unwrap();
        assert_eq!(fallback.required, vec![FieldKey::Material]);
        assert!(table.rule_or_fallback("Missing", "Known").is_none());
    }
}
