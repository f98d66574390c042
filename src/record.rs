//! Loosely typed color records, as they arrive from a caller before anything has been checked: a
//! kind, a bag of named fields that may hold numbers or text, and optional tags spelled however the
//! caller likes. [`ColorRecord::validate`] is the single place where all of that is normalized into
//! a [`ColorValue`], and it rejects the record at the first problem it finds.

use std::collections::HashMap;

use crate::colors::{ColorKind, ColorValue, Coordinates};
use crate::conversion::{convert, ConversionOptions};
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, Observer};
use crate::reference::ReferenceData;
use crate::rgb_spaces::RgbSpace;

/// A coordinate as given: a number, or text that should hold one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A number.
    Number(f64),
    /// Text, parsed on validation.
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> FieldValue {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }
}

/// An unvalidated color.
///
/// # Example
/// ```
/// # use tristimulus::colors::ColorKind;
/// # use tristimulus::error::ColorError;
/// # use tristimulus::record::ColorRecord;
/// let record = ColorRecord::new(ColorKind::Xyz)
///     .with_field("x", 0.1)
///     .with_field("y", "0.2");
/// assert_eq!(
///     record.validate(),
///     Err(ColorError::MissingValue { kind: "xyz".to_string(), field: "z".to_string() })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorRecord {
    /// The kind the fields describe.
    pub kind: ColorKind,
    /// The coordinates, by field name.
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
    /// Illuminant name; D50 when absent.
    #[serde(default)]
    pub illuminant: Option<String>,
    /// Observer angle; 2° when absent.
    #[serde(default)]
    pub observer: Option<String>,
    /// RGB working space name; sRGB when absent. Ignored for kinds without one.
    #[serde(default)]
    pub rgb_space: Option<String>,
}

impl ColorRecord {
    /// An empty record of a kind.
    pub fn new(kind: ColorKind) -> ColorRecord {
        ColorRecord {
            kind,
            fields: HashMap::new(),
            illuminant: None,
            observer: None,
            rgb_space: None,
        }
    }

    /// Sets one coordinate.
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> ColorRecord {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Sets the illuminant name.
    pub fn with_illuminant(mut self, illuminant: &str) -> ColorRecord {
        self.illuminant = Some(illuminant.to_string());
        self
    }

    /// Sets the observer angle.
    pub fn with_observer(mut self, observer: &str) -> ColorRecord {
        self.observer = Some(observer.to_string());
        self
    }

    /// Sets the RGB working space name.
    pub fn with_rgb_space(mut self, space: &str) -> ColorRecord {
        self.rgb_space = Some(space.to_string());
        self
    }

    /// Checks the record and builds the typed color. The observer is checked first, then the
    /// illuminant, the working space, and finally every field in order.
    pub fn validate(&self) -> Result<ColorValue> {
        let observer = match &self.observer {
            Some(name) => name.parse::<Observer>()?,
            None => Observer::default(),
        };
        let illuminant = match &self.illuminant {
            Some(name) => name
                .parse::<Illuminant>()
                .map_err(|_| ColorError::InvalidIlluminant {
                    illuminant: name.clone(),
                    observer: observer.to_string(),
                })?,
            None => Illuminant::default(),
        };
        let space = match &self.rgb_space {
            Some(name) if self.kind.has_rgb_space() => name.parse::<RgbSpace>()?,
            _ => RgbSpace::default(),
        };

        let values = self
            .kind
            .field_names()
            .into_iter()
            .map(|field| self.field(field))
            .collect::<Result<Vec<f64>>>()?;
        let coords = Coordinates::from_values(self.kind, &values, space)?;
        Ok(ColorValue {
            coords,
            illuminant,
            observer,
        })
    }

    fn field(&self, field: &str) -> Result<f64> {
        let invalid = |value: String| ColorError::InvalidValue {
            kind: self.kind.to_string(),
            field: field.to_string(),
            value,
        };
        let value = match self.fields.get(field) {
            None => {
                return Err(ColorError::MissingValue {
                    kind: self.kind.to_string(),
                    field: field.to_string(),
                })
            }
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(text)) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid(text.clone()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(value.to_string()))
        }
    }
}

impl From<&ColorValue> for ColorRecord {
    fn from(color: &ColorValue) -> ColorRecord {
        let kind = color.kind();
        ColorRecord {
            kind,
            fields: kind
                .field_names()
                .into_iter()
                .map(String::from)
                .zip(color.values().into_iter().map(FieldValue::Number))
                .collect(),
            illuminant: Some(color.illuminant.to_string()),
            observer: Some(color.observer.to_string()),
            rgb_space: color.rgb_space().map(|s| s.to_string()),
        }
    }
}

/// Validates a record and converts it. Nothing is computed unless the whole record is valid.
pub fn convert_record<R: ReferenceData + ?Sized>(
    record: &ColorRecord,
    target: ColorKind,
    reference: &R,
    options: &ConversionOptions,
) -> Result<ColorValue> {
    let color = record.validate()?;
    convert(&color, target, reference, options)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::reference::StandardReference;

    fn xyz_record() -> ColorRecord {
        ColorRecord::new(ColorKind::Xyz)
            .with_field("x", 0.4)
            .with_field("y", " 0.2 ")
            .with_field("z", 0.6)
    }

    #[test]
    fn test_validate() {
        let color = xyz_record()
            .with_illuminant("D65")
            .with_observer("10°")
            .validate()
            .unwrap();
        assert_eq!(
            color,
            ColorValue::xyz(0.4, 0.2, 0.6)
                .with_illuminant(Illuminant::D65)
                .with_observer(Observer::Ten)
        );
    }

    #[test]
    fn test_missing_value() {
        let mut record = xyz_record();
        record.fields.remove("z");
        let err = convert_record(
            &record,
            ColorKind::Lab,
            &StandardReference,
            &ConversionOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ColorError::MissingValue {
                kind: "xyz".to_string(),
                field: "z".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_values() {
        let text = xyz_record().with_field("y", "bright");
        assert_eq!(
            text.validate(),
            Err(ColorError::InvalidValue {
                kind: "xyz".to_string(),
                field: "y".to_string(),
                value: "bright".to_string(),
            })
        );
        let infinite = xyz_record().with_field("x", f64::INFINITY);
        assert!(match infinite.validate() {
            Err(ColorError::InvalidValue { field, .. }) => field == "x",
            _ => false,
        });
    }

    #[test]
    fn test_tags_are_checked_first() {
        // an empty record still fails on its observer before its fields
        let record = ColorRecord::new(ColorKind::Lab)
            .with_observer("5")
            .with_illuminant("d99");
        assert_eq!(
            record.validate(),
            Err(ColorError::InvalidObserver("5".to_string()))
        );
        let record = ColorRecord::new(ColorKind::Lab).with_illuminant("d99");
        assert_eq!(
            record.validate(),
            Err(ColorError::InvalidIlluminant {
                illuminant: "d99".to_string(),
                observer: "2°".to_string(),
            })
        );
        let record = ColorRecord::new(ColorKind::Rgb).with_rgb_space("cmyk");
        assert!(match record.validate() {
            Err(ColorError::ReferenceNotFound { key, .. }) => key == "cmyk",
            _ => false,
        });
        // kinds without a working space ignore it
        assert!(xyz_record().with_rgb_space("cmyk").validate().is_ok());
    }

    #[test]
    fn test_rgb_space_is_parsed() {
        let color = ColorRecord::new(ColorKind::Hsv)
            .with_field("h", 10.0)
            .with_field("s", 0.5)
            .with_field("v", 0.5)
            .with_rgb_space("Adobe RGB")
            .validate()
            .unwrap();
        assert_eq!(color.rgb_space(), Some(RgbSpace::AdobeRgb));
    }

    #[test]
    fn test_record_from_color() {
        let color = ColorValue::hsl(200.0, 0.25, 0.75)
            .with_rgb_space(RgbSpace::ProPhoto)
            .with_illuminant(Illuminant::D65);
        let record = ColorRecord::from(&color);
        assert_eq!(record.fields.get("s"), Some(&FieldValue::Number(0.25)));
        assert_eq!(record.validate().unwrap(), color);
    }
}
