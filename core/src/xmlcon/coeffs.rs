use crate::prelude::{ConversionError, ConversionResult};
use crate::xml::Element;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Calibration value tree; leaves keep the raw element text.
///
/// Nested maps keep first-appearance order of tags; a repeated tag keeps its
/// position and takes the value of its last occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoeffValue {
    Leaf(Option<String>),
    Nested(IndexMap<String, CoeffValue>),
}

impl CoeffValue {
    pub fn from_element(element: &Element) -> Self {
        if element.is_leaf() {
            CoeffValue::Leaf(element.text().map(str::to_owned))
        } else {
            CoeffValue::Nested(nested_children(element))
        }
    }

    pub fn get(&self, key: &str) -> Option<&CoeffValue> {
        match self {
            CoeffValue::Nested(map) => map.get(key),
            CoeffValue::Leaf(_) => None,
        }
    }

    /// Leaf text, `None` for empty leaves and nested values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CoeffValue::Leaf(text) => text.as_deref(),
            CoeffValue::Nested(_) => None,
        }
    }
}

fn nested_children(element: &Element) -> IndexMap<String, CoeffValue> {
    element
        .children()
        .iter()
        .map(|child| (child.name().to_string(), CoeffValue::from_element(child)))
        .collect()
}

/// Sensor-type tag and coefficient tree for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub sensor: String,
    pub coeffs: CoeffValue,
}

impl CalibrationRecord {
    /// Takes the last entry of the sensor's child map as its calibration block.
    pub fn from_sensor(sensor: &Element) -> ConversionResult<Self> {
        let (sensor_type, coeffs) = nested_children(sensor).pop().ok_or_else(|| {
            ConversionError::MalformedConfig(format!(
                "sensor at slot {} has no calibration block",
                sensor.attribute("index").unwrap_or("?")
            ))
        })?;
        Ok(Self {
            sensor: sensor_type,
            coeffs,
        })
    }

    pub fn field(&self, key: &str) -> Option<&CoeffValue> {
        self.coeffs.get(key)
    }
}

/// Coefficients keyed by the slot `index` attribute, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationCoefficients(IndexMap<String, CalibrationRecord>);

impl CalibrationCoefficients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: impl Into<String>, record: CalibrationRecord) {
        self.0.insert(index.into(), record);
    }

    pub fn get(&self, index: &str) -> Option<&CalibrationRecord> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> ConversionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
