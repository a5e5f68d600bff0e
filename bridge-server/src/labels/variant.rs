//! Label variant enumeration

use serde::Deserialize;
use std::fmt;

/// The label layouts the bridge can print
///
/// Each variant maps to exactly one ZPL template and one printer routing
/// slot. `Large` and `Small` are general-purpose part labels; `Screw` is
/// the fastener layout driven by item attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVariant {
    /// Wide part label with name, part number, supplier block and QR code
    #[default]
    Large,
    /// Compact part label with the same fields at reduced geometry
    Small,
    /// Fastener label rendering the first six item attributes
    Screw,
}

impl LabelVariant {
    /// All variants, in form-selector order
    pub const ALL: [LabelVariant; 3] = [Self::Large, Self::Small, Self::Screw];

    /// Lowercase wire name as used by the `label_type` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Small => "small",
            Self::Screw => "screw",
        }
    }
}

impl fmt::Display for LabelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default)]
        label_type: LabelVariant,
    }

    #[test]
    fn test_deserializes_lowercase_wire_names() {
        for variant in LabelVariant::ALL {
            let probe: Probe =
                serde_json::from_str(&format!(r#"{{"label_type":"{}"}}"#, variant.as_str()))
                    .unwrap();
            assert_eq!(probe.label_type, variant);
        }
    }

    #[test]
    fn test_defaults_to_large_when_absent() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.label_type, LabelVariant::Large);
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"label_type":"huge"}"#);
        assert!(result.is_err());
    }
}
