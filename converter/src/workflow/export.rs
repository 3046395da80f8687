use anyhow::Context;
use psacore::{CalibrationCoefficients, InstrumentConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub fn write_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Writes `<cast>_config.json` and `<cast>_coeffs.json` into `outdir`.
pub fn write_json_exports(
    outdir: &Path,
    cast_id: &str,
    config: &InstrumentConfig,
    coeffs: &CalibrationCoefficients,
) -> anyhow::Result<Vec<PathBuf>> {
    let config_path = outdir.join(format!("{cast_id}_config.json"));
    write_text(&config_path, &config.to_json()?)?;
    let coeffs_path = outdir.join(format!("{cast_id}_coeffs.json"));
    write_text(&coeffs_path, &coeffs.to_json()?)?;
    Ok(vec![config_path, coeffs_path])
}
