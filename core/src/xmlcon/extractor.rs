use crate::prelude::{ConversionError, ConversionResult};
use crate::telemetry::log::LogManager;
use crate::xml::Element;
use crate::xmlcon::coeffs::{CalibrationCoefficients, CalibrationRecord};
use crate::xmlcon::config::{InstrumentConfig, SensorAttributeMap};

/// Reads an SBE 911 xmlcon document into typed configuration and coefficients.
pub struct ConfigExtractor {
    logger: LogManager,
}

impl ConfigExtractor {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("ConfigExtractor"),
        }
    }

    pub fn parse(&self, source: &str) -> ConversionResult<(InstrumentConfig, CalibrationCoefficients)> {
        let root = Element::parse_str(source).map_err(|err| match err {
            ConversionError::Xml(msg) => {
                ConversionError::MalformedConfig(format!("unreadable xmlcon document: {msg}"))
            }
            other => other,
        })?;

        let config = self.extract_config(&root)?;
        let coeffs = self.extract_coefficients(&root)?;
        self.logger.record(&format!(
            "parsed {} sensor slots, {} calibration blocks",
            config.sensors.len(),
            coeffs.len()
        ));
        Ok((config, coeffs))
    }

    fn extract_config(&self, root: &Element) -> ConversionResult<InstrumentConfig> {
        let instrument = root.children().first().ok_or_else(|| {
            ConversionError::MalformedConfig(format!(
                "<{}> has no instrument node",
                root.name()
            ))
        })?;
        self.logger
            .detail(&format!("instrument node <{}>", instrument.name()));

        let sensors = root
            .iter()
            .filter(|element| element.name() == "Sensor")
            .map(SensorAttributeMap::from_element)
            .collect();

        Ok(InstrumentConfig {
            frequency_channels_suppressed: field(instrument, "FrequencyChannelsSuppressed")?,
            voltage_channels_suppressed: field(instrument, "VoltageWordsSuppressed")?,
            has_surface_par: field(instrument, "SurfaceParVoltageAdded")?,
            has_nmea_lat_lon: field(instrument, "NmeaPositionDataAdded")?,
            has_nmea_depth: field(instrument, "NmeaDepthDataAdded")?,
            has_nmea_time: field(instrument, "NmeaTimeAdded")?,
            has_time: field(instrument, "ScanTimeAdded")?,
            sensors,
        })
    }

    fn extract_coefficients(&self, root: &Element) -> ConversionResult<CalibrationCoefficients> {
        let mut coeffs = CalibrationCoefficients::new();
        for sensor in root.descendants().filter(|element| element.name() == "Sensor") {
            let index = sensor.attribute("index").ok_or_else(|| {
                ConversionError::MalformedConfig("sensor without an index attribute".into())
            })?;
            let record = CalibrationRecord::from_sensor(sensor)?;
            self.logger
                .detail(&format!("slot {index}: {}", record.sensor));
            coeffs.insert(index, record);
        }
        Ok(coeffs)
    }
}

impl Default for ConfigExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn field(instrument: &Element, tag: &str) -> ConversionResult<String> {
    instrument
        .child(tag)
        .map(|element| element.text().unwrap_or_default().to_string())
        .ok_or_else(|| {
            ConversionError::MalformedConfig(format!(
                "<{}> is missing <{}>",
                instrument.name(),
                tag
            ))
        })
}
