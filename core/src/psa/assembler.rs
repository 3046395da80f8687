use crate::prelude::{ConversionError, ConversionResult, ReservedIds, UserSensorKind};
use crate::psa::document::PsaDocument;
use crate::psa::library::CalcTemplateLibrary;
use crate::psa::lookup::{CalcOutput, VariableLookupTable};
use crate::psa::naming::{substitute_ordinal, user_label};
use crate::psa::slot::SensorSlot;
use crate::telemetry::{AssemblyMetrics, LogManager};
use crate::xml::Element;
use crate::xmlcon::{CalibrationCoefficients, CoeffValue, InstrumentConfig};

/// Builds the PSA `CalcArray` from a parsed instrument configuration.
///
/// Entries are emitted as latitude, longitude, one entry per calculation
/// output of every populated slot, then pump status. Indices are contiguous
/// because the running index is the number of entries emitted so far.
pub struct TemplateAssembler {
    ids: ReservedIds,
    metrics: AssemblyMetrics,
    logger: LogManager,
}

impl TemplateAssembler {
    pub fn new(ids: ReservedIds) -> Self {
        Self {
            ids,
            metrics: AssemblyMetrics::new(),
            logger: LogManager::new("TemplateAssembler"),
        }
    }

    /// Counters from the most recent `assemble` call.
    pub fn metrics(&self) -> AssemblyMetrics {
        self.metrics
    }

    pub fn assemble(
        &mut self,
        config: &InstrumentConfig,
        coeffs: &CalibrationCoefficients,
        lookup: &VariableLookupTable,
        library: &CalcTemplateLibrary,
        psa_template: &PsaDocument,
    ) -> ConversionResult<PsaDocument> {
        self.metrics.reset();
        let mut entries: Vec<Element> = Vec::new();

        for calc_id in [&self.ids.latitude_calc_id, &self.ids.longitude_calc_id] {
            let entry = fixed_entry(library, calc_id, entries.len())?;
            entries.push(entry);
            self.metrics.record_fixed();
        }

        let sensor_ids = config.sensor_ids()?;
        for (position, sensor) in config.sensors.iter().enumerate() {
            let index = sensor.index()?;
            if sensor_ids[position] == self.ids.unused_sensor_id {
                self.logger.detail(&format!("slot {index} unused"));
                self.metrics.record_skipped();
                continue;
            }

            let slot = SensorSlot::resolve(&sensor_ids, position, index, lookup, coeffs)?;
            for output in slot.outputs {
                let entry = self.sensor_entry(library, &slot, output, entries.len())?;
                entries.push(entry);
                self.metrics.record_sensor_entry();
            }
        }

        let pump = fixed_entry(library, &self.ids.pump_calc_id, entries.len())?;
        entries.push(pump);
        self.metrics.record_fixed();

        let mut document = psa_template.clone();
        let discarded = document.replace_entries(entries)?;
        if discarded > 0 {
            self.logger.warn(&format!(
                "discarded {discarded} entries already present in the PSA skeleton"
            ));
        }
        self.logger.record(&format!(
            "assembled {} entries ({} sensor, {} skipped slots)",
            self.metrics.total_entries(),
            self.metrics.sensor_entries,
            self.metrics.skipped_slots
        ));
        Ok(document)
    }

    fn sensor_entry(
        &mut self,
        library: &CalcTemplateLibrary,
        slot: &SensorSlot<'_>,
        output: &CalcOutput,
        index: usize,
    ) -> ConversionResult<Element> {
        let mut item = library.instantiate_for(&output.calc_id, &output.unit_id, slot.id)?;
        item.set_attribute("index", index.to_string());

        let calc = item
            .child_mut("Calc")
            .ok_or_else(|| missing_node(&output.calc_id, "Calc"))?;
        calc.set_attribute("Ordinal", slot.ordinal.to_string());

        let full_name = calc
            .child_mut("FullName")
            .ok_or_else(|| missing_node(&output.calc_id, "Calc/FullName"))?;
        let template_name = full_name
            .attribute("value")
            .ok_or_else(|| missing_node(&output.calc_id, "Calc/FullName@value"))?;
        let name = substitute_ordinal(template_name, slot.ordinal);
        full_name.set_attribute("value", name);

        if let Some(kind) = self.ids.user_sensor_kind(slot.id) {
            self.apply_user_label(calc, kind, slot, &output.calc_id)?;
        }

        self.logger.detail(&format!(
            "entry {index}: sensor {} ordinal {} -> CalcID {} UnitID {}",
            slot.id, slot.ordinal, output.calc_id, output.unit_id
        ));
        Ok(item)
    }

    fn apply_user_label(
        &mut self,
        calc: &mut Element,
        kind: UserSensorKind,
        slot: &SensorSlot<'_>,
        calc_id: &str,
    ) -> ConversionResult<()> {
        let record = slot.coeffs.ok_or_else(|| {
            ConversionError::MalformedConfig(format!(
                "sensor {} at slot {} has no calibration block",
                slot.id, slot.index
            ))
        })?;
        let custom_field = |key: &str| {
            record
                .field(key)
                .map(CoeffValue::as_text)
                .ok_or_else(|| {
                    ConversionError::MalformedConfig(format!(
                        "sensor {} at slot {} has no <{}>",
                        slot.id, slot.index, key
                    ))
                })
        };

        let name = custom_field("SensorName")?;
        let units = match kind {
            UserSensorKind::Exponential => custom_field("SensorUnits")?,
            UserSensorKind::Polynomial => None,
        };
        if name.is_some() {
            self.metrics.record_custom_label();
        }

        let label = user_label(kind, slot.ordinal, name, units);
        set_value(calc, "FullName", calc_id, label.full_name)?;
        set_value(calc, "CalcName", calc_id, label.calc_name)?;
        if let Some(calc_units) = label.calc_units {
            set_value(calc, "CalcUnits", calc_id, calc_units)?;
        }
        Ok(())
    }
}

fn fixed_entry(
    library: &CalcTemplateLibrary,
    calc_id: &str,
    index: usize,
) -> ConversionResult<Element> {
    let mut item = library.instantiate(calc_id)?;
    item.set_attribute("index", index.to_string());
    Ok(item)
}

fn set_value(calc: &mut Element, child: &str, calc_id: &str, value: String) -> ConversionResult<()> {
    calc.child_mut(child)
        .ok_or_else(|| missing_node(calc_id, &format!("Calc/{child}")))?
        .set_attribute("value", value);
    Ok(())
}

fn missing_node(calc_id: &str, path: &str) -> ConversionError {
    ConversionError::MalformedTemplate(format!("template for CalcID {calc_id} has no {path}"))
}
