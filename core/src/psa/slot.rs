use crate::prelude::{ConversionError, ConversionResult};
use crate::psa::lookup::{CalcOutput, VariableLookupTable};
use crate::xmlcon::{CalibrationCoefficients, CalibrationRecord};

/// Count of earlier slots sharing the SensorID at `position`.
///
/// Counts over the full slot list, unused slots included.
pub fn ordinal_at(sensor_ids: &[u32], position: usize) -> usize {
    let id = sensor_ids[position];
    sensor_ids[..position].iter().filter(|&&other| other == id).count()
}

/// A populated sensor slot resolved against the reference tables.
#[derive(Debug, Clone)]
pub struct SensorSlot<'a> {
    pub id: u32,
    /// `index` attribute of the source `<Sensor>`.
    pub index: &'a str,
    pub ordinal: usize,
    pub outputs: &'a [CalcOutput],
    pub coeffs: Option<&'a CalibrationRecord>,
}

impl<'a> SensorSlot<'a> {
    pub fn resolve(
        sensor_ids: &[u32],
        position: usize,
        index: &'a str,
        lookup: &'a VariableLookupTable,
        coeffs: &'a CalibrationCoefficients,
    ) -> ConversionResult<Self> {
        let id = sensor_ids[position];
        let outputs = lookup
            .outputs_for(id)
            .ok_or_else(|| ConversionError::MissingVariable {
                sensor_id: id,
                index: index.to_string(),
            })?;
        Ok(Self {
            id,
            index,
            ordinal: ordinal_at(sensor_ids, position),
            outputs,
            coeffs: coeffs.get(index),
        })
    }
}
