use crate::workflow::config::WorkflowConfig;
use crate::workflow::export::{write_json_exports, write_text};
use anyhow::Context;
use log::info;
use psacore::telemetry::AssemblyMetrics;
use psacore::{
    CalcTemplateLibrary, ConfigExtractor, PsaDocument, TemplateAssembler, VariableLookupTable,
};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ConversionReport {
    pub cast_id: String,
    pub psa_path: PathBuf,
    pub json_paths: Vec<PathBuf>,
    pub entry_count: usize,
    pub metrics: AssemblyMetrics,
}

/// Read-only reference inputs, loaded once per run.
struct References {
    lookup: VariableLookupTable,
    library: CalcTemplateLibrary,
    psa: PsaDocument,
}

impl References {
    fn load(config: &WorkflowConfig) -> anyhow::Result<Self> {
        let file = File::open(&config.variables)
            .with_context(|| format!("opening variable table {}", config.variables.display()))?;
        let lookup = VariableLookupTable::from_reader(file)
            .with_context(|| format!("parsing variable table {}", config.variables.display()))?;

        let library = CalcTemplateLibrary::parse(&read_source(&config.templates)?)
            .with_context(|| format!("parsing template library {}", config.templates.display()))?;
        let psa = PsaDocument::parse(&read_source(&config.psa_template)?)
            .with_context(|| format!("parsing PSA template {}", config.psa_template.display()))?;

        Ok(Self {
            lookup,
            library,
            psa,
        })
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, infile: &Path) -> anyhow::Result<ConversionReport> {
        let references = References::load(&self.config)?;
        let cast_id = cast_id(infile)?;
        let (instrument, coeffs) = ConfigExtractor::new()
            .parse(&read_source(infile)?)
            .with_context(|| format!("parsing xmlcon {}", infile.display()))?;

        let mut assembler = TemplateAssembler::new(self.config.reserved.clone());
        let document = assembler
            .assemble(
                &instrument,
                &coeffs,
                &references.lookup,
                &references.library,
                &references.psa,
            )
            .with_context(|| format!("assembling PSA for {}", infile.display()))?;

        let outdir = &self.config.outdir;
        fs::create_dir_all(outdir)
            .with_context(|| format!("creating output directory {}", outdir.display()))?;

        let psa_path = outdir.join(format!("{cast_id}.psa"));
        write_text(&psa_path, &document.to_xml_string()?)?;
        info!("wrote {}", psa_path.display());

        let json_paths = if self.config.export_json {
            write_json_exports(outdir, &cast_id, &instrument, &coeffs)?
        } else {
            Vec::new()
        };

        let metrics = assembler.metrics();
        Ok(ConversionReport {
            cast_id,
            psa_path,
            json_paths,
            entry_count: metrics.total_entries(),
            metrics,
        })
    }

    /// SensorIDs of every slot, in channel order.
    pub fn list_sensors(&self, infile: &Path) -> anyhow::Result<Vec<u32>> {
        let (instrument, _) = ConfigExtractor::new()
            .parse(&read_source(infile)?)
            .with_context(|| format!("parsing xmlcon {}", infile.display()))?;
        Ok(instrument.sensor_ids()?)
    }
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn cast_id(infile: &Path) -> anyhow::Result<String> {
    infile
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("no file name in {}", infile.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::fixtures::{PSA_TEMPLATE, TEMPLATE_LIBRARY, VARIABLES_CSV, XMLCON};
    use psacore::xml::Element;
    use tempfile::TempDir;

    fn workspace(export_json: bool) -> (TempDir, WorkflowConfig, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("variables.csv"), VARIABLES_CSV).unwrap();
        fs::write(root.join("sensors_all.xml"), TEMPLATE_LIBRARY).unwrap();
        fs::write(root.join("default.psa"), PSA_TEMPLATE).unwrap();
        let infile = root.join("cast042.xmlcon");
        fs::write(&infile, XMLCON).unwrap();

        let config = WorkflowConfig::from_args(
            root.join("variables.csv"),
            root.join("sensors_all.xml"),
            root.join("default.psa"),
            root.join("out/psa"),
            export_json,
        );
        (dir, config, infile)
    }

    #[test]
    fn runner_writes_psa_named_after_cast() {
        let (_dir, config, infile) = workspace(false);
        let report = Runner::new(config.clone()).execute(&infile).unwrap();

        assert_eq!(report.cast_id, "cast042");
        assert_eq!(report.psa_path, config.outdir.join("cast042.psa"));
        assert_eq!(report.entry_count, 5);
        assert_eq!(report.metrics.skipped_slots, 1);
        assert!(report.json_paths.is_empty());

        let written = fs::read_to_string(&report.psa_path).unwrap();
        assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        let root = Element::parse_str(&written).unwrap();
        let array = root.child("CalcArray").unwrap();
        assert_eq!(array.attribute("Size"), Some("5"));
        assert_eq!(array.children().len(), 5);
    }

    #[test]
    fn runner_exports_json_when_requested() {
        let (_dir, config, infile) = workspace(true);
        let report = Runner::new(config.clone()).execute(&infile).unwrap();

        assert_eq!(
            report.json_paths,
            vec![
                config.outdir.join("cast042_config.json"),
                config.outdir.join("cast042_coeffs.json"),
            ]
        );
        let coeffs = fs::read_to_string(&report.json_paths[1]).unwrap();
        assert!(coeffs.contains("ConductivitySensor"));
    }

    #[test]
    fn runner_lists_sensor_ids() {
        let (_dir, config, infile) = workspace(false);
        let ids = Runner::new(config).list_sensors(&infile).unwrap();
        assert_eq!(ids, vec![1, 27, 3]);
    }

    #[test]
    fn runner_reports_missing_reference_file() {
        let (_dir, mut config, infile) = workspace(false);
        config.templates = config.templates.with_file_name("missing.xml");
        let err = Runner::new(config).execute(&infile).unwrap_err();
        assert!(format!("{err:#}").contains("missing.xml"));
    }

    #[test]
    fn runner_surfaces_unknown_sensor() {
        let (dir, config, infile) = workspace(false);
        fs::write(dir.path().join("variables.csv"), "SensorID,CalcID,UnitID\n1,1,3\n").unwrap();
        let err = Runner::new(config.clone()).execute(&infile).unwrap_err();

        assert!(format!("{err:#}").contains("sensor 3 at slot 2"));
        assert!(!config.outdir.exists());
    }
}
