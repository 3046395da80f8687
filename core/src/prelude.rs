use serde::{Deserialize, Serialize};

/// Token embedded in template display names where the ordinal suffix goes.
pub const ORDINAL_PLACEHOLDER: &str = "$ordinal";

/// Identifiers with fixed meaning in the xmlcon and PSA vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedIds {
    pub latitude_calc_id: String,
    pub longitude_calc_id: String,
    pub pump_calc_id: String,
    pub unused_sensor_id: u32,
    pub user_exponential_sensor_id: u32,
    pub user_polynomial_sensor_id: u32,
}

impl Default for ReservedIds {
    fn default() -> Self {
        Self {
            latitude_calc_id: "39".into(),
            longitude_calc_id: "40".into(),
            pump_calc_id: "69".into(),
            unused_sensor_id: 27,
            user_exponential_sensor_id: 80,
            user_polynomial_sensor_id: 61,
        }
    }
}

impl ReservedIds {
    pub fn user_sensor_kind(&self, sensor_id: u32) -> Option<UserSensorKind> {
        if sensor_id == self.user_exponential_sensor_id {
            Some(UserSensorKind::Exponential)
        } else if sensor_id == self.user_polynomial_sensor_id {
            Some(UserSensorKind::Polynomial)
        } else {
            None
        }
    }
}

/// Operator-configurable sensor types whose display names come from the xmlcon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSensorKind {
    Exponential,
    Polynomial,
}

/// Common error type for extraction and assembly.
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("xml: {0}")]
    Xml(String),
    #[error("malformed configuration: {0}")]
    MalformedConfig(String),
    #[error(
        "no calculation template for CalcID {calc_id} / UnitID {} ({})",
        describe_unit(.unit_id),
        describe_sensor(.sensor_id)
    )]
    MissingTemplate {
        calc_id: String,
        unit_id: Option<String>,
        sensor_id: Option<u32>,
    },
    #[error("sensor {sensor_id} at slot {index} has no entry in the variable table")]
    MissingVariable { sensor_id: u32, index: String },
    #[error("variable table: {0}")]
    LookupTable(String),
    #[error("malformed template: {0}")]
    MalformedTemplate(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_unit(unit_id: &Option<String>) -> &str {
    unit_id.as_deref().unwrap_or("any")
}

fn describe_sensor(sensor_id: &Option<u32>) -> String {
    match sensor_id {
        Some(id) => format!("sensor {id}"),
        None => "fixed entry".to_string(),
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
