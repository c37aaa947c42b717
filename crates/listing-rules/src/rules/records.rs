//! Raw category field rules, as authored
//!
//! One record per (main category, subcategory) pair. `required` and
//! `optional` hold comma-separated display labels exactly as they appear in
//! the versioned rule source; parsing and normalization happen in the table
//! loader. Changing requirements for a category means editing this table and
//! redeploying.

/// One authored rule record
#[derive(Debug, Clone, Copy)]
pub struct RawCategoryRule {
    pub main_category: &'static str,
    pub sub_category: &'static str,
    pub required: &'static str,
    pub optional: &'static str,
}

/// The full category → field-requirement table
pub const CATEGORY_FIELD_RULES: &[RawCategoryRule] = &[
    // ============================================================================
    // Food & Beverages
    // ============================================================================
    RawCategoryRule {
        main_category: "Food & Beverages",
        sub_category: "Packaged Foods",
        required: "FSSAI License No., Batch Number, Expiry Date, Manufacturer, Net Quantity, Ingredients, Veg/Non-Veg, Country of Origin, Shelf Life",
        optional: "Importer Name, Importer GSTIN, HSN No., Nutritional Information, Allergen Information, Storage Instructions, Manufacture Date, Packer, Brand",
    },
    RawCategoryRule {
        main_category: "Food & Beverages",
        sub_category: "Beverages",
        required: "FSSAI License No., Batch Number, Expiry Date, Manufacturer, Net Quantity, Veg/Non-Veg, Country of Origin",
        optional: "Flavour, Nutritional Information, Storage Instructions, Brand, HSN No., Importer Name, Importer GSTIN",
    },
    RawCategoryRule {
        main_category: "Food & Beverages",
        sub_category: "Snacks & Confectionery",
        required: "FSSAI License No., Batch Number, Best Before, Manufacturer, Net Quantity, Ingredients, Veg/Non-Veg",
        optional: "Flavour, Allergen Information, Nutritional Info, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Food & Beverages",
        sub_category: "Health Supplements",
        required: "FSSAI License No., Batch Number, Expiry Date, Manufacturer, Composition, Usage Instructions, Net Quantity",
        optional: "Allergen Information, Nutritional Information, Brand, HSN No., Importer Name, Importer GSTIN",
    },
    RawCategoryRule {
        main_category: "Food & Beverages",
        sub_category: "Others",
        required: "FSSAI License No., Batch Number, Expiry Date, Manufacturer, Net Quantity",
        optional: "Ingredients, Nutritional Information, Brand, HSN No.",
    },
    // ============================================================================
    // Electronics & Gadgets
    // ============================================================================
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Mobile Phones & Accessories",
        required: "Warranty, BIS Certification, E-Waste Compliance, Recyclable Packaging, Brand, Model Number, Country of Origin",
        optional: "Battery Capacity, Connectivity, Compatible Devices, Colour, HSN No., Importer Name, Importer GSTIN",
    },
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Audio Devices",
        required: "Warranty, BIS Certification, E-Waste Compliance, Brand, Model Number, Country of Origin",
        optional: "Connectivity, Battery Capacity, Power Consumption, Colour, HSN No.",
    },
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Wearables",
        required: "Warranty, BIS Certification, E-Waste Compliance, Brand, Model Number, Battery Capacity",
        optional: "Connectivity, Compatible Devices, Colour, Size, HSN No.",
    },
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Computer Accessories",
        required: "Warranty, Brand, Model Number, Country of Origin",
        optional: "BIS Certification, Connectivity, Power Consumption, Compatible Devices, Colour, HSN No.",
    },
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Home Appliances",
        required: "Warranty, BIS Certification, E-Waste Compliance, Power Consumption, Voltage, Brand, Model Number, Country of Origin",
        optional: "Dimensions, Weight, Colour, HSN No.",
    },
    RawCategoryRule {
        main_category: "Electronics & Gadgets",
        sub_category: "Others",
        required: "Warranty, Brand, Model Number, Country of Origin",
        optional: "BIS Certification, E-Waste Compliance, Colour, HSN No.",
    },
    // ============================================================================
    // Fashion
    // ============================================================================
    RawCategoryRule {
        main_category: "Fashion",
        sub_category: "Men's Clothing",
        required: "Size, Colour, Fabric, Brand, Country of Origin",
        optional: "Care Instructions, Occasion, Material, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Fashion",
        sub_category: "Women's Clothing",
        required: "Size, Colour, Fabric, Brand, Country of Origin",
        optional: "Care Instructions, Occasion, Material, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Fashion",
        sub_category: "Kids' Clothing",
        required: "Size, Colour, Fabric, Age Group, Brand",
        optional: "Care Instructions, Gender, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Fashion",
        sub_category: "Footwear",
        required: "Size, Colour, Brand, Material, Country of Origin",
        optional: "Care Instructions, Occasion, Gender, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Fashion",
        sub_category: "Others",
        required: "Size, Colour, Brand",
        optional: "Fabric, Material, Care Instructions, Gender, Occasion, HSN No., Return Policy",
    },
    // ============================================================================
    // Beauty & Personal Care
    // ============================================================================
    RawCategoryRule {
        main_category: "Beauty & Personal Care",
        sub_category: "Skincare",
        required: "Ingredients, Expiry Date, Manufacturer, Net Quantity, Skin Type, Country of Origin",
        optional: "Usage Instructions, Brand, HSN No., Importer Name, Importer GSTIN",
    },
    RawCategoryRule {
        main_category: "Beauty & Personal Care",
        sub_category: "Haircare",
        required: "Ingredients, Expiry Date, Manufacturer, Net Quantity, Hair Type",
        optional: "Usage Instructions, Brand, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Beauty & Personal Care",
        sub_category: "Makeup",
        required: "Ingredients, Expiry Date, Manufacturer, Net Quantity, Color",
        optional: "Skin Type, Usage Instructions, Brand, HSN No., Importer Name, Importer GSTIN",
    },
    RawCategoryRule {
        main_category: "Beauty & Personal Care",
        sub_category: "Fragrances",
        required: "Net Quantity, Manufacturer, Expiry Date, Country of Origin",
        optional: "Ingredients, Gender, Brand, HSN No., Usage Instructions",
    },
    RawCategoryRule {
        main_category: "Beauty & Personal Care",
        sub_category: "Others",
        required: "Ingredients, Expiry Date, Manufacturer, Net Quantity",
        optional: "Usage Instructions, Brand, HSN No.",
    },
    // ============================================================================
    // Home & Kitchen
    // ============================================================================
    RawCategoryRule {
        main_category: "Home & Kitchen",
        sub_category: "Cookware",
        required: "Material, Dimensions, Brand, Country of Origin",
        optional: "Weight, Colour, Care Instructions, HSN No., Warranty",
    },
    RawCategoryRule {
        main_category: "Home & Kitchen",
        sub_category: "Kitchen Appliances",
        required: "Warranty, BIS Certification, Power Consumption, Voltage, Brand, Model Number",
        optional: "E-Waste Compliance, Dimensions, Weight, Colour, HSN No.",
    },
    RawCategoryRule {
        main_category: "Home & Kitchen",
        sub_category: "Home Decor",
        required: "Material, Dimensions, Colour",
        optional: "Weight, Fragile, Care Instructions, Brand, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Home & Kitchen",
        sub_category: "Storage & Organisation",
        required: "Material, Dimensions",
        optional: "Weight, Colour, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Home & Kitchen",
        sub_category: "Others",
        required: "Material, Brand",
        optional: "Dimensions, Weight, Colour, Care Instructions, HSN No.",
    },
    // ============================================================================
    // Toys & Games
    // ============================================================================
    RawCategoryRule {
        main_category: "Toys & Games",
        sub_category: "Soft Toys",
        required: "Age Group, Material, Safety Warnings, Brand",
        optional: "Colour, Size, Care Instructions, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Toys & Games",
        sub_category: "Board Games",
        required: "Age Group, Brand",
        optional: "Safety Warnings, Language, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Toys & Games",
        sub_category: "Educational Toys",
        required: "Age Group, Safety Warnings, Material, Brand",
        optional: "Assembly Required, Language, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Toys & Games",
        sub_category: "Outdoor Play",
        required: "Age Group, Safety Warnings, Material, Assembly Required",
        optional: "Dimensions, Weight, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Toys & Games",
        sub_category: "Others",
        required: "Age Group, Safety Warnings, Brand",
        optional: "Material, Assembly Required, HSN No.",
    },
    // ============================================================================
    // Books & Stationery
    // ============================================================================
    RawCategoryRule {
        main_category: "Books & Stationery",
        sub_category: "Books",
        required: "ISBN, Author, Publisher, Language",
        optional: "Pages, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Books & Stationery",
        sub_category: "Notebooks & Diaries",
        required: "Brand, Pages",
        optional: "Dimensions, Material, HSN No.",
    },
    RawCategoryRule {
        main_category: "Books & Stationery",
        sub_category: "Art Supplies",
        required: "Brand, Material, Age Group",
        optional: "Safety Warnings, Colour, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Books & Stationery",
        sub_category: "Others",
        required: "Brand",
        optional: "Language, Material, HSN No.",
    },
    // ============================================================================
    // Sports & Fitness
    // ============================================================================
    RawCategoryRule {
        main_category: "Sports & Fitness",
        sub_category: "Fitness Equipment",
        required: "Brand, Material, Weight, Warranty, Assembly Required",
        optional: "Dimensions, Usage Instructions, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Sports & Fitness",
        sub_category: "Sportswear",
        required: "Size, Colour, Fabric, Brand",
        optional: "Gender, Care Instructions, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Sports & Fitness",
        sub_category: "Sports Nutrition",
        required: "FSSAI License No., Expiry Date, Batch Number, Composition, Manufacturer, Net Quantity",
        optional: "Flavour, Usage Instructions, Allergen Information, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Sports & Fitness",
        sub_category: "Others",
        required: "Brand, Sport Type",
        optional: "Material, Size, Warranty, HSN No.",
    },
    // ============================================================================
    // Jewellery & Accessories
    // ============================================================================
    RawCategoryRule {
        main_category: "Jewellery & Accessories",
        sub_category: "Gold & Silver Jewellery",
        required: "Hallmark, Purity, Weight, Country of Origin",
        optional: "Gemstone Details, Size, Occasion, HSN No., Return Policy",
    },
    RawCategoryRule {
        main_category: "Jewellery & Accessories",
        sub_category: "Imitation Jewellery",
        required: "Material, Colour",
        optional: "Size, Occasion, Brand, HSN No., Care Instructions",
    },
    RawCategoryRule {
        main_category: "Jewellery & Accessories",
        sub_category: "Watches",
        required: "Brand, Model Number, Warranty",
        optional: "Material, Colour, Gender, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Jewellery & Accessories",
        sub_category: "Bags & Wallets",
        required: "Material, Colour, Brand, Dimensions",
        optional: "Gender, Care Instructions, HSN No., Country of Origin",
    },
    RawCategoryRule {
        main_category: "Jewellery & Accessories",
        sub_category: "Others",
        required: "Material, Brand",
        optional: "Colour, Size, Occasion, HSN No.",
    },
    // ============================================================================
    // Gifts & Festive Needs
    // ============================================================================
    RawCategoryRule {
        main_category: "Gifts & Festive Needs",
        sub_category: "Gift Cards",
        required: "Validity Period, Redemption Instructions, Terms & Conditions",
        optional: "Occasion, Brand",
    },
    RawCategoryRule {
        main_category: "Gifts & Festive Needs",
        sub_category: "Festive Decor",
        required: "Material, Colour",
        optional: "Dimensions, Weight, Occasion, Fragile, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Gifts & Festive Needs",
        sub_category: "Gift Hampers",
        required: "Occasion, Net Quantity",
        optional: "Ingredients, Best Before, Brand, Fragile, HSN No.",
    },
    RawCategoryRule {
        main_category: "Gifts & Festive Needs",
        sub_category: "Others",
        required: "Occasion",
        optional: "Material, Colour, Brand, HSN No.",
    },
    // ============================================================================
    // Health & Wellness
    // ============================================================================
    RawCategoryRule {
        main_category: "Health & Wellness",
        sub_category: "Ayurvedic Products",
        required: "Ingredients, Manufacturer, Expiry Date, Batch Number, Net Quantity, Usage Instructions",
        optional: "Composition, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Health & Wellness",
        sub_category: "Personal Hygiene",
        required: "Manufacturer, Expiry Date, Net Quantity",
        optional: "Ingredients, Usage Instructions, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Health & Wellness",
        sub_category: "Medical Devices",
        required: "Manufacturer, Model Number, Warranty, Usage Instructions",
        optional: "Drug License No., Batch Number, Brand, HSN Code, Country of Origin",
    },
    RawCategoryRule {
        main_category: "Health & Wellness",
        sub_category: "Others",
        required: "Manufacturer, Expiry Date",
        optional: "Ingredients, Usage Instructions, Brand, HSN No.",
    },
    // ============================================================================
    // Pet Supplies
    // ============================================================================
    RawCategoryRule {
        main_category: "Pet Supplies",
        sub_category: "Pet Food",
        required: "Pet Type, Life Stage, Ingredients, Expiry Date, Manufacturer, Net Quantity",
        optional: "Flavour, Nutritional Information, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Pet Supplies",
        sub_category: "Pet Accessories",
        required: "Pet Type, Material",
        optional: "Size, Colour, Brand, HSN No.",
    },
    RawCategoryRule {
        main_category: "Pet Supplies",
        sub_category: "Others",
        required: "Pet Type",
        optional: "Material, Brand, HSN No.",
    },
];
