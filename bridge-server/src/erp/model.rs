//! Item models as returned by the inventory API
//!
//! Shapes follow the ERPNext item resource: the interesting payload sits
//! under a `data` key, suppliers under `supplier_items`, attributes under
//! `attributes`. All fields default when absent - a fetch may succeed for
//! a record that later fails extraction for a given label variant.

use serde::Deserialize;

/// One entry of an item's supplier list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierItem {
    /// Supplier display name
    #[serde(default)]
    pub supplier: String,
    /// The supplier's own part number for this item
    #[serde(default)]
    pub supplier_part_no: String,
}

/// One entry of an item's attribute list
///
/// Order within the list is significant for the fastener label variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemAttribute {
    /// Attribute name as configured in the inventory system
    #[serde(default)]
    pub attribute: String,
    /// Attribute value for this item
    #[serde(default)]
    pub attribute_value: String,
}

/// Normalized result of looking up one inventory item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
    /// Item code, attached from the caller's request (not the response body)
    #[serde(skip)]
    pub code: String,
    /// Display name
    #[serde(default, rename = "item_name")]
    pub name: String,
    /// Supplier list; the first entry is the primary supplier
    #[serde(default)]
    pub supplier_items: Vec<SupplierItem>,
    /// Ordered attribute list
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
}

impl ItemRecord {
    /// The primary supplier: first entry of the supplier list, if any
    pub fn primary_supplier(&self) -> Option<&SupplierItem> {
        self.supplier_items.first()
    }
}
