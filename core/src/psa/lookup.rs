use crate::prelude::{ConversionError, ConversionResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// One calculation output a sensor type feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcOutput {
    pub calc_id: String,
    pub unit_id: String,
}

#[derive(Debug, Deserialize)]
struct VariableRow {
    #[serde(rename = "SensorID")]
    sensor_id: String,
    #[serde(rename = "CalcID")]
    calc_id: String,
    #[serde(rename = "UnitID")]
    unit_id: String,
}

/// `SensorID -> [(CalcID, UnitID)]`, rows kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableLookupTable {
    entries: BTreeMap<u32, Vec<CalcOutput>>,
}

impl VariableLookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a headed CSV with at least `SensorID`, `CalcID` and `UnitID` columns.
    pub fn from_reader<R: Read>(reader: R) -> ConversionResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::new();
        for (line, row) in csv_reader.deserialize::<VariableRow>().enumerate() {
            let row = row.map_err(|err| ConversionError::LookupTable(err.to_string()))?;
            let sensor_id = row.sensor_id.parse().map_err(|_| {
                ConversionError::LookupTable(format!(
                    "row {}: non-integer SensorID {:?}",
                    line + 1,
                    row.sensor_id
                ))
            })?;
            table.insert(sensor_id, row.calc_id, row.unit_id);
        }
        Ok(table)
    }

    pub fn insert(&mut self, sensor_id: u32, calc_id: impl Into<String>, unit_id: impl Into<String>) {
        self.entries.entry(sensor_id).or_default().push(CalcOutput {
            calc_id: calc_id.into(),
            unit_id: unit_id.into(),
        });
    }

    pub fn outputs_for(&self, sensor_id: u32) -> Option<&[CalcOutput]> {
        self.entries.get(&sensor_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
