//! Run orchestration (`spec.md` §6): load a [`SimulationConfig`], execute
//! the driver, and write the final-step profile.

use std::path::Path;

use tf_sim::{Driver, SimulationConfig, SimulationReport};

use crate::error::AppResult;

/// Load a configuration from a YAML file, or the **S1** default if `path`
/// is `None`. Missing fields in the file fall back field-by-field to the
/// default (`spec.md` §6).
pub fn load_config(path: Option<&Path>) -> AppResult<SimulationConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&text)?)
        }
        None => Ok(SimulationConfig::default()),
    }
}

/// Run the simulation described by `config` to completion.
pub fn run(config: &SimulationConfig) -> AppResult<SimulationReport> {
    tracing::info!(n = config.n, t_max = config.t_max, dt = config.dt, "starting run");
    let report = Driver::run(config)?;
    tracing::info!(steps = report.diagnostics.len(), "run complete");
    Ok(report)
}

/// Write the final-step profile to `path` (`spec.md` §6).
pub fn write_output(path: &Path, report: &SimulationReport) -> AppResult<()> {
    tf_sim::output::write_profile(path, &report.fields)?;
    Ok(())
}
