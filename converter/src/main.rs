use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Parses an SBE 911 CTD configuration from its xmlcon file and generates a DataConversion PSA setup file"
)]
struct Args {
    /// Path to the xmlcon file
    infile: PathBuf,
    /// Directory to save output files
    #[arg(short, long, default_value = "psa")]
    outdir: PathBuf,
    /// CSV table mapping SensorID to CalcID/UnitID
    #[arg(long, default_value = "variables_r2r_sbe911.csv")]
    variables: PathBuf,
    /// XML library of calculation templates
    #[arg(long, default_value = "sensors_all.xml")]
    templates: PathBuf,
    /// PSA skeleton providing the CalcArray
    #[arg(long, default_value = "default.psa")]
    psa_template: PathBuf,
    /// Also write the parsed configuration and coefficients as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Print the SensorID of every slot and exit
    #[arg(long, default_value_t = false)]
    list_sensors: bool,
    /// Load reference paths, output settings and reserved ids from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.variables,
            args.templates,
            args.psa_template,
            args.outdir,
            args.json,
        )
    };
    let runner = Runner::new(workflow_config);

    if args.list_sensors {
        let ids = runner
            .list_sensors(&args.infile)
            .context("listing sensors")?;
        for id in ids {
            println!("{id}");
        }
        return Ok(());
    }

    let report = runner.execute(&args.infile)?;
    println!(
        "{} -> {} entries ({} sensor, {} unused slots skipped) in {}",
        report.cast_id,
        report.entry_count,
        report.metrics.sensor_entries,
        report.metrics.skipped_slots,
        report.psa_path.display()
    );
    for path in &report.json_paths {
        println!("{} -> {}", report.cast_id, path.display());
    }

    Ok(())
}
