use crate::prelude::{ConversionError, ConversionResult};
use crate::xml::Element;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute set of one `<Sensor>` slot, verbatim and in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorAttributeMap(IndexMap<String, String>);

impl SensorAttributeMap {
    pub fn from_element(element: &Element) -> Self {
        Self(
            element
                .attributes()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Slot index exactly as written in the source document.
    pub fn index(&self) -> ConversionResult<&str> {
        self.get("index").ok_or_else(|| {
            ConversionError::MalformedConfig("sensor without an index attribute".into())
        })
    }

    pub fn sensor_id(&self) -> ConversionResult<u32> {
        let raw = self.get("SensorID").ok_or_else(|| {
            ConversionError::MalformedConfig(format!(
                "sensor at slot {} has no SensorID",
                self.get("index").unwrap_or("?")
            ))
        })?;
        raw.trim().parse().map_err(|_| {
            ConversionError::MalformedConfig(format!(
                "sensor at slot {} has non-integer SensorID {:?}",
                self.get("index").unwrap_or("?"),
                raw
            ))
        })
    }
}

/// Instrument-level settings plus the ordered sensor slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub frequency_channels_suppressed: String,
    pub voltage_channels_suppressed: String,
    pub has_surface_par: String,
    pub has_nmea_lat_lon: String,
    pub has_nmea_depth: String,
    pub has_nmea_time: String,
    pub has_time: String,
    /// Physical channel order; ordinal numbering depends on it.
    pub sensors: Vec<SensorAttributeMap>,
}

impl InstrumentConfig {
    pub fn sensor_ids(&self) -> ConversionResult<Vec<u32>> {
        self.sensors.iter().map(SensorAttributeMap::sensor_id).collect()
    }

    pub fn to_json(&self) -> ConversionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
