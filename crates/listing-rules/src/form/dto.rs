use serde::{Deserialize, Serialize};

use crate::resolver::ResolvedFields;

/// Wire shape of a resolved field set
///
/// Carries field codes, not labels. Vectors keep the canonical sorted order
/// of the source sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFieldsDto {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl From<&ResolvedFields> for ResolvedFieldsDto {
    fn from(fields: &ResolvedFields) -> Self {
        Self {
            required: fields.required.iter().map(|k| k.as_str().to_string()).collect(),
            optional: fields.optional.iter().map(|k| k.as_str().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_dto_carries_wire_codes() {
        let fields = resolve(Some("Food & Beverages"), Some("Packaged Foods"));
        let dto = ResolvedFieldsDto::from(&fields);
        assert!(dto.required.contains(&"fssaiLicenseNo".to_string()));
        assert!(dto.required.contains(&"MRP".to_string()));
        assert!(dto.optional.contains(&"importerGSTIN".to_string()));
    }

    #[test]
    fn test_dto_round_trip() {
        let fields = resolve(Some("Fashion"), Some("Footwear"));
        let dto = ResolvedFieldsDto::from(&fields);
        let json = serde_json::to_string(&dto).unwrap();
        let back: ResolvedFieldsDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto, back);
    }
}
