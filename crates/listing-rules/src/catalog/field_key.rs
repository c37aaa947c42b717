//! Canonical field identifiers for product attributes
//!
//! `FieldKey` is the unit of truth across the authoring forms: the wire code
//! (`as_str`) is the stable identifier, the display label (`label`) is
//! presentation only.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical identifier of a product attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    // ============================================================================
    // Platform-mandatory fields (every product, every category)
    // ============================================================================
    Title,
    Description,
    Category,
    Subcategory,
    Images,
    Quantity,
    Mrp,
    ProductPrice,
    GstRate,
    SellerName,
    SellerGstin,
    SellerContact,
    HazardousMaterials,
    IsActive,

    // ============================================================================
    // Origin and identification
    // ============================================================================
    Brand,
    CountryOfOrigin,
    Manufacturer,
    Packer,
    ImporterName,
    ImporterGstin,
    HsnNo,
    ModelNumber,

    // ============================================================================
    // Physical attributes
    // ============================================================================
    Weight,
    Dimensions,
    NetQuantity,
    Material,
    Color,
    Size,
    Fragile,
    AssemblyRequired,

    // ============================================================================
    // Commerce terms
    // ============================================================================
    ReturnPolicy,
    Warranty,

    // ============================================================================
    // Food, beverages and consumables
    // ============================================================================
    FssaiLicenseNo,
    BatchNumber,
    ExpiryDate,
    ManufactureDate,
    BestBefore,
    ShelfLife,
    Ingredients,
    Composition,
    NutritionalInfo,
    AllergenInfo,
    VegNonVeg,
    Flavour,
    StorageInstructions,
    UsageInstructions,
    DrugLicenseNo,

    // ============================================================================
    // Electronics and appliances
    // ============================================================================
    BisCertification,
    EWasteCompliance,
    RecyclablePackaging,
    PowerConsumption,
    Voltage,
    Connectivity,
    BatteryCapacity,
    CompatibleDevices,

    // ============================================================================
    // Apparel and personal care
    // ============================================================================
    Fabric,
    CareInstructions,
    Occasion,
    Gender,
    AgeGroup,
    SkinType,
    HairType,

    // ============================================================================
    // Books and stationery
    // ============================================================================
    Isbn,
    Author,
    Publisher,
    Language,
    Pages,

    // ============================================================================
    // Toys
    // ============================================================================
    SafetyWarnings,

    // ============================================================================
    // Jewellery
    // ============================================================================
    Hallmark,
    Purity,
    GemstoneDetails,

    // ============================================================================
    // Gift cards
    // ============================================================================
    ValidityPeriod,
    RedemptionInstructions,
    TermsAndConditions,

    // ============================================================================
    // Sports and pets
    // ============================================================================
    SportType,
    PetType,
    LifeStage,
}

impl FieldKey {
    /// Stable wire code of the field (camelCase, case-sensitive)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Description => "description",
            FieldKey::Category => "category",
            FieldKey::Subcategory => "subcategory",
            FieldKey::Images => "images",
            FieldKey::Quantity => "quantity",
            FieldKey::Mrp => "MRP",
            FieldKey::ProductPrice => "productPrice",
            FieldKey::GstRate => "gstRate",
            FieldKey::SellerName => "sellerName",
            FieldKey::SellerGstin => "sellerGSTIN",
            FieldKey::SellerContact => "sellerContact",
            FieldKey::HazardousMaterials => "hazardousMaterials",
            FieldKey::IsActive => "isActive",
            FieldKey::Brand => "brand",
            FieldKey::CountryOfOrigin => "countryOfOrigin",
            FieldKey::Manufacturer => "manufacturer",
            FieldKey::Packer => "packer",
            FieldKey::ImporterName => "importerName",
            FieldKey::ImporterGstin => "importerGSTIN",
            FieldKey::HsnNo => "hsnNo",
            FieldKey::ModelNumber => "modelNumber",
            FieldKey::Weight => "weight",
            FieldKey::Dimensions => "dimensions",
            FieldKey::NetQuantity => "netQuantity",
            FieldKey::Material => "material",
            FieldKey::Color => "color",
            FieldKey::Size => "size",
            FieldKey::Fragile => "fragile",
            FieldKey::AssemblyRequired => "assemblyRequired",
            FieldKey::ReturnPolicy => "returnPolicy",
            FieldKey::Warranty => "warranty",
            FieldKey::FssaiLicenseNo => "fssaiLicenseNo",
            FieldKey::BatchNumber => "batchNumber",
            FieldKey::ExpiryDate => "expiryDate",
            FieldKey::ManufactureDate => "manufactureDate",
            FieldKey::BestBefore => "bestBefore",
            FieldKey::ShelfLife => "shelfLife",
            FieldKey::Ingredients => "ingredients",
            FieldKey::Composition => "composition",
            FieldKey::NutritionalInfo => "nutritionalInfo",
            FieldKey::AllergenInfo => "allergenInfo",
            FieldKey::VegNonVeg => "vegNonVeg",
            FieldKey::Flavour => "flavour",
            FieldKey::StorageInstructions => "storageInstructions",
            FieldKey::UsageInstructions => "usageInstructions",
            FieldKey::DrugLicenseNo => "drugLicenseNo",
            FieldKey::BisCertification => "bisCertification",
            FieldKey::EWasteCompliance => "eWasteCompliance",
            FieldKey::RecyclablePackaging => "recyclablePackaging",
            FieldKey::PowerConsumption => "powerConsumption",
            FieldKey::Voltage => "voltage",
            FieldKey::Connectivity => "connectivity",
            FieldKey::BatteryCapacity => "batteryCapacity",
            FieldKey::CompatibleDevices => "compatibleDevices",
            FieldKey::Fabric => "fabric",
            FieldKey::CareInstructions => "careInstructions",
            FieldKey::Occasion => "occasion",
            FieldKey::Gender => "gender",
            FieldKey::AgeGroup => "ageGroup",
            FieldKey::SkinType => "skinType",
            FieldKey::HairType => "hairType",
            FieldKey::Isbn => "isbn",
            FieldKey::Author => "author",
            FieldKey::Publisher => "publisher",
            FieldKey::Language => "language",
            FieldKey::Pages => "pages",
            FieldKey::SafetyWarnings => "safetyWarnings",
            FieldKey::Hallmark => "hallmark",
            FieldKey::Purity => "purity",
            FieldKey::GemstoneDetails => "gemstoneDetails",
            FieldKey::ValidityPeriod => "validityPeriod",
            FieldKey::RedemptionInstructions => "redemptionInstructions",
            FieldKey::TermsAndConditions => "termsAndConditions",
            FieldKey::SportType => "sportType",
            FieldKey::PetType => "petType",
            FieldKey::LifeStage => "lifeStage",
        }
    }

    /// Display label shown in the authoring forms
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Title => "Title",
            FieldKey::Description => "Description",
            FieldKey::Category => "Category",
            FieldKey::Subcategory => "Subcategory",
            FieldKey::Images => "Images",
            FieldKey::Quantity => "Quantity",
            FieldKey::Mrp => "Actual Price (MRP)",
            FieldKey::ProductPrice => "Product Price",
            FieldKey::GstRate => "GST Rate",
            FieldKey::SellerName => "Seller Name",
            FieldKey::SellerGstin => "Seller GSTIN",
            FieldKey::SellerContact => "Seller Contact",
            FieldKey::HazardousMaterials => "Hazardous Materials",
            FieldKey::IsActive => "Is Active",
            FieldKey::Brand => "Brand",
            FieldKey::CountryOfOrigin => "Country of Origin",
            FieldKey::Manufacturer => "Manufacturer",
            FieldKey::Packer => "Packer",
            FieldKey::ImporterName => "Importer Name",
            FieldKey::ImporterGstin => "Importer GSTIN",
            FieldKey::HsnNo => "HSN No.",
            FieldKey::ModelNumber => "Model Number",
            FieldKey::Weight => "Weight",
            FieldKey::Dimensions => "Dimensions",
            FieldKey::NetQuantity => "Net Quantity",
            FieldKey::Material => "Material",
            FieldKey::Color => "Colour",
            FieldKey::Size => "Size",
            FieldKey::Fragile => "Fragile",
            FieldKey::AssemblyRequired => "Assembly Required",
            FieldKey::ReturnPolicy => "Return Policy",
            FieldKey::Warranty => "Warranty",
            FieldKey::FssaiLicenseNo => "FSSAI License No.",
            FieldKey::BatchNumber => "Batch Number",
            FieldKey::ExpiryDate => "Expiry Date",
            FieldKey::ManufactureDate => "Manufacture Date",
            FieldKey::BestBefore => "Best Before",
            FieldKey::ShelfLife => "Shelf Life",
            FieldKey::Ingredients => "Ingredients",
            FieldKey::Composition => "Composition",
            FieldKey::NutritionalInfo => "Nutritional Information",
            FieldKey::AllergenInfo => "Allergen Information",
            FieldKey::VegNonVeg => "Veg/Non-Veg",
            FieldKey::Flavour => "Flavour",
            FieldKey::StorageInstructions => "Storage Instructions",
            FieldKey::UsageInstructions => "Usage Instructions",
            FieldKey::DrugLicenseNo => "Drug License No.",
            FieldKey::BisCertification => "BIS Certification",
            FieldKey::EWasteCompliance => "E-Waste Compliance",
            FieldKey::RecyclablePackaging => "Recyclable Packaging",
            FieldKey::PowerConsumption => "Power Consumption",
            FieldKey::Voltage => "Voltage",
            FieldKey::Connectivity => "Connectivity",
            FieldKey::BatteryCapacity => "Battery Capacity",
            FieldKey::CompatibleDevices => "Compatible Devices",
            FieldKey::Fabric => "Fabric",
            FieldKey::CareInstructions => "Care Instructions",
            FieldKey::Occasion => "Occasion",
            FieldKey::Gender => "Gender",
            FieldKey::AgeGroup => "Age Group",
            FieldKey::SkinType => "Skin Type",
            FieldKey::HairType => "Hair Type",
            FieldKey::Isbn => "ISBN",
            FieldKey::Author => "Author",
            FieldKey::Publisher => "Publisher",
            FieldKey::Language => "Language",
            FieldKey::Pages => "Pages",
            FieldKey::SafetyWarnings => "Safety Warnings",
            FieldKey::Hallmark => "Hallmark",
            FieldKey::Purity => "Purity",
            FieldKey::GemstoneDetails => "Gemstone Details",
            FieldKey::ValidityPeriod => "Validity Period",
            FieldKey::RedemptionInstructions => "Redemption Instructions",
            FieldKey::TermsAndConditions => "Terms & Conditions",
            FieldKey::SportType => "Sport Type",
            FieldKey::PetType => "Pet Type",
            FieldKey::LifeStage => "Life Stage",
        }
    }

    /// All known field keys
    pub fn all() -> &'static [FieldKey] {
        const ALL: &[FieldKey] = &[
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
            FieldKey::Brand,
            FieldKey::CountryOfOrigin,
            FieldKey::Manufacturer,
            FieldKey::Packer,
            FieldKey::ImporterName,
            FieldKey::ImporterGstin,
            FieldKey::HsnNo,
            FieldKey::ModelNumber,
            FieldKey::Weight,
            FieldKey::Dimensions,
            FieldKey::NetQuantity,
            FieldKey::Material,
            FieldKey::Color,
            FieldKey::Size,
            FieldKey::Fragile,
            FieldKey::AssemblyRequired,
            FieldKey::ReturnPolicy,
            FieldKey::Warranty,
            FieldKey::FssaiLicenseNo,
            FieldKey::BatchNumber,
            FieldKey::ExpiryDate,
            FieldKey::ManufactureDate,
            FieldKey::BestBefore,
            FieldKey::ShelfLife,
            FieldKey::Ingredients,
            FieldKey::Composition,
            FieldKey::NutritionalInfo,
            FieldKey::AllergenInfo,
            FieldKey::VegNonVeg,
            FieldKey::Flavour,
            FieldKey::StorageInstructions,
            FieldKey::UsageInstructions,
            FieldKey::DrugLicenseNo,
            FieldKey::BisCertification,
            FieldKey::EWasteCompliance,
            FieldKey::RecyclablePackaging,
            FieldKey::PowerConsumption,
            FieldKey::Voltage,
            FieldKey::Connectivity,
            FieldKey::BatteryCapacity,
            FieldKey::CompatibleDevices,
            FieldKey::Fabric,
            FieldKey::CareInstructions,
            FieldKey::Occasion,
            FieldKey::Gender,
            FieldKey::AgeGroup,
            FieldKey::SkinType,
            FieldKey::HairType,
            FieldKey::Isbn,
            FieldKey::Author,
            FieldKey::Publisher,
            FieldKey::Language,
            FieldKey::Pages,
            FieldKey::SafetyWarnings,
            FieldKey::Hallmark,
            FieldKey::Purity,
            FieldKey::GemstoneDetails,
            FieldKey::ValidityPeriod,
            FieldKey::RedemptionInstructions,
            FieldKey::TermsAndConditions,
            FieldKey::SportType,
            FieldKey::PetType,
            FieldKey::LifeStage,
        ];
        ALL
    }

    /// Parse a wire code back into a key (exact, case-sensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == key)
    }
}

// Wire identity is the code string, not the variant name
impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        FieldKey::from_key(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown field key '{}'", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for key in FieldKey::all() {
            assert_eq!(FieldKey::from_key(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_wire_codes_are_canonical() {
        assert_eq!(FieldKey::Mrp.as_str(), "MRP");
        assert_eq!(FieldKey::SellerGstin.as_str(), "sellerGSTIN");
        assert_eq!(FieldKey::FssaiLicenseNo.as_str(), "fssaiLicenseNo");
        assert_eq!(FieldKey::EWasteCompliance.as_str(), "eWasteCompliance");
        assert_eq!(FieldKey::HsnNo.as_str(), "hsnNo");
    }

    #[test]
    fn test_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for key in FieldKey::all() {
            assert!(seen.insert(key.as_str()), "duplicate code {}", key.as_str());
        }
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&FieldKey::Mrp).unwrap();
        assert_eq!(json, "\"MRP\"");
        let key: FieldKey = serde_json::from_str("\"countryOfOrigin\"").unwrap();
        assert_eq!(key, FieldKey::CountryOfOrigin);
        assert!(serde_json::from_str::<FieldKey>("\"notAField\"").is_err());
    }
}
