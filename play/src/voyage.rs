use serde::Serialize;
use ship::Location;
use tracing::info;

use crate::ScenarioConfig;

/// The result of running a command string on a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoyageSummary {
    /// One `O` or `X` per command.
    pub report: String,
    pub blocked: usize,
    pub location: Location,
}

pub fn run_voyage(scenario: ScenarioConfig, commands: &str) -> anyhow::Result<VoyageSummary> {
    let mut ship = scenario.into_ship();
    let report = ship.receive_commands(commands)?;
    info!(%report, location = %ship.location(), "Voyage finished");
    Ok(VoyageSummary {
        report: report.to_string(),
        blocked: report.blocked_count(),
        location: ship.location(),
    })
}
