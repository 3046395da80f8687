use anyhow::Context;
use psacore::ReservedIds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Reference files, output location and reserved identifiers for one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub variables: PathBuf,
    pub templates: PathBuf,
    pub psa_template: PathBuf,
    pub outdir: PathBuf,
    #[serde(default)]
    pub export_json: bool,
    #[serde(default)]
    pub reserved: ReservedIds,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        variables: PathBuf,
        templates: PathBuf,
        psa_template: PathBuf,
        outdir: PathBuf,
        export_json: bool,
    ) -> Self {
        Self {
            variables,
            templates,
            psa_template,
            outdir,
            export_json,
            reserved: ReservedIds::default(),
        }
    }
}
