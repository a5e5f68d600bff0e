//! ZPL label renderer
//!
//! Pure functions from (variant, item record) to a complete ZPL document.
//! Field extraction is validated here, at render time - a fetched record is
//! only as valid as the variant it is asked to fill.
//!
//! Geometry constants are per-variant and fixed; they are printer dots at
//! 203 dpi (8 dots/mm).

use thiserror::Error;
use zpl_printer::ZplBuilder;

use super::LabelVariant;
use crate::erp::ItemRecord;

/// Field extraction failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The variant needs a primary supplier and the item has none
    #[error("item has no supplier data")]
    MissingSupplierData,

    /// The fastener variant needs more attributes than the item carries
    #[error("item has {found} attributes, fastener label needs {needed}")]
    InsufficientAttributes { needed: usize, found: usize },
}

/// A complete, immutable ZPL document
///
/// Opaque to everything except the transport; the only structure guaranteed
/// is that it is a well-formed `^XA…^XZ` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDocument(String);

impl LabelDocument {
    /// View as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// View as bytes for the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Document size in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length document (never produced by [`render`])
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Number of positional attributes the fastener layout consumes
const FASTENER_ATTRIBUTES: usize = 6;

/// Render one label for one item
///
/// Deterministic: identical inputs produce byte-identical documents.
pub fn render(variant: LabelVariant, record: &ItemRecord) -> Result<LabelDocument, RenderError> {
    match variant {
        LabelVariant::Large => render_large(record),
        LabelVariant::Small => render_small(record),
        LabelVariant::Screw => render_screw(record),
    }
}

/// Fields the fastener layout reads positionally from `attributes`.
///
/// The order {norm, thread, length, material, strength, surface} is the
/// inventory system's fixed attribute ordering for fastener items; names
/// are not checked.
struct FastenerFields<'a> {
    norm: &'a str,
    thread: &'a str,
    length: &'a str,
    material: &'a str,
    strength: &'a str,
    surface: &'a str,
}

fn primary_supplier(record: &ItemRecord) -> Result<(&str, &str), RenderError> {
    let supplier = record
        .primary_supplier()
        .ok_or(RenderError::MissingSupplierData)?;
    Ok((&supplier.supplier, &supplier.supplier_part_no))
}

fn extract_fastener(record: &ItemRecord) -> Result<FastenerFields<'_>, RenderError> {
    let attrs = &record.attributes;
    if attrs.len() < FASTENER_ATTRIBUTES {
        return Err(RenderError::InsufficientAttributes {
            needed: FASTENER_ATTRIBUTES,
            found: attrs.len(),
        });
    }

    Ok(FastenerFields {
        norm: &attrs[0].attribute_value,
        thread: &attrs[1].attribute_value,
        length: &attrs[2].attribute_value,
        material: &attrs[3].attribute_value,
        strength: &attrs[4].attribute_value,
        surface: &attrs[5].attribute_value,
    })
}

/// Wide part label: 1060 x 365 dots
fn render_large(record: &ItemRecord) -> Result<LabelDocument, RenderError> {
    let (supplier, supplier_part_no) = primary_supplier(record)?;

    let mut b = ZplBuilder::new();
    b.print_width(1060);
    b.label_length(365);

    b.qr_code(950, 245, 5, &record.code);
    b.text_block(10, 20, 95, 100, 1040, 2, &record.name);

    b.text_field(10, 260, 36, 36, "Part No.:");
    b.text_field(10, 310, 50, 50, &record.code);

    b.text_field(400, 260, 36, 36, supplier);
    b.text_field(400, 310, 50, 50, supplier_part_no);

    Ok(LabelDocument(b.build()))
}

/// Compact part label: 600 x 300 dots
fn render_small(record: &ItemRecord) -> Result<LabelDocument, RenderError> {
    let (supplier, supplier_part_no) = primary_supplier(record)?;

    let mut b = ZplBuilder::new();
    b.print_width(600);
    b.label_length(300);

    b.qr_code(460, 160, 3, &record.code);
    b.text_block(10, 16, 40, 40, 580, 2, &record.name);

    b.text_field(10, 120, 28, 28, "Part No.:");
    b.text_field(10, 156, 36, 36, &record.code);

    b.text_field(10, 210, 28, 28, supplier);
    b.text_field(10, 246, 36, 36, supplier_part_no);

    Ok(LabelDocument(b.build()))
}

/// Fastener label: 1060 x 365 dots, six attributes in two rows of three
fn render_screw(record: &ItemRecord) -> Result<LabelDocument, RenderError> {
    let fields = extract_fastener(record)?;

    let mut b = ZplBuilder::new();
    b.print_width(1060);
    b.label_length(365);

    b.qr_code(950, 245, 4, &record.code);
    b.text_block(10, 20, 60, 60, 930, 1, &record.name);

    b.text_field(10, 110, 40, 40, fields.norm);
    b.text_field(360, 110, 40, 40, fields.thread);
    b.text_field(710, 110, 40, 40, fields.length);

    b.text_field(10, 200, 40, 40, fields.material);
    b.text_field(360, 200, 40, 40, fields.strength);
    b.text_field(710, 200, 40, 40, fields.surface);

    b.text_field(10, 290, 50, 50, &record.code);

    Ok(LabelDocument(b.build()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::erp::{ItemAttribute, SupplierItem};

    fn part_record() -> ItemRecord {
        ItemRecord {
            code: "WIDGET-42".to_string(),
            name: "Hex Widget".to_string(),
            supplier_items: vec![SupplierItem {
                supplier: "Acme".to_string(),
                supplier_part_no: "P123".to_string(),
            }],
            attributes: vec![],
        }
    }

    fn fastener_record(attribute_count: usize) -> ItemRecord {
        let values = ["DIN933", "M8x1.25", "40mm", "Steel", "8.8", "Zinc"];
        ItemRecord {
            code: "SCR-0815".to_string(),
            name: "Hex Bolt".to_string(),
            supplier_items: vec![],
            attributes: values[..attribute_count]
                .iter()
                .enumerate()
                .map(|(i, v)| ItemAttribute {
                    attribute: format!("attr-{i}"),
                    attribute_value: v.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_large_contains_supplier_fields() {
        let doc = render(LabelVariant::Large, &part_record()).unwrap();

        assert!(doc.as_str().contains("Acme"));
        assert!(doc.as_str().contains("P123"));
        assert!(doc.as_str().contains("WIDGET-42"));
        assert!(doc.as_str().contains("Hex Widget"));
    }

    #[test]
    fn test_small_contains_supplier_fields() {
        let doc = render(LabelVariant::Small, &part_record()).unwrap();

        assert!(doc.as_str().contains("Acme"));
        assert!(doc.as_str().contains("P123"));
        assert!(doc.as_str().contains("^PW600"));
    }

    #[test]
    fn test_large_and_small_differ_in_geometry() {
        let large = render(LabelVariant::Large, &part_record()).unwrap();
        let small = render(LabelVariant::Small, &part_record()).unwrap();

        assert!(large.as_str().contains("^PW1060"));
        assert!(small.as_str().contains("^PW600"));
        assert_ne!(large, small);
    }

    #[test]
    fn test_missing_supplier_fails_extraction() {
        let mut record = part_record();
        record.supplier_items.clear();

        for variant in [LabelVariant::Large, LabelVariant::Small] {
            let err = render(variant, &record).unwrap_err();
            assert_eq!(err, RenderError::MissingSupplierData);
        }
    }

    #[test]
    fn test_screw_renders_all_six_attribute_values() {
        let doc = render(LabelVariant::Screw, &fastener_record(6)).unwrap();

        for value in ["DIN933", "M8x1.25", "40mm", "Steel", "8.8", "Zinc"] {
            assert!(doc.as_str().contains(value), "missing {value}");
        }
    }

    #[test]
    fn test_screw_with_five_attributes_fails() {
        let err = render(LabelVariant::Screw, &fastener_record(5)).unwrap_err();

        assert_eq!(
            err,
            RenderError::InsufficientAttributes {
                needed: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_screw_ignores_supplier_data() {
        // The fastener layout never touches supplier_items.
        let doc = render(LabelVariant::Screw, &fastener_record(6)).unwrap();
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = part_record();
        let first = render(LabelVariant::Large, &record).unwrap();
        let second = render(LabelVariant::Large, &record).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_documents_are_complete_formats() {
        let doc = render(LabelVariant::Large, &part_record()).unwrap();

        assert!(doc.as_str().starts_with("^XA"));
        assert!(doc.as_str().ends_with("^XZ\n"));
    }
}
