use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use ship::{Location, Planet, Point, Ship};

/// A ship scenario, read from a JSON file.
///
/// ```json
/// {
///   "max": { "x": 50, "y": 50 },
///   "start": { "position": { "x": 12, "y": 32 }, "direction": "N" },
///   "obstacles": [{ "x": 12, "y": 30 }]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Size of the grid, which covers `1..=max.x` and `1..=max.y`.
    pub max: Point,
    pub start: Location,
    #[serde(default)]
    pub obstacles: Vec<Point>,
}

impl ScenarioConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open scenario file '{}'", path.display()))?;
        let config: ScenarioConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse scenario file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max.x < 1 || self.max.y < 1 {
            anyhow::bail!("The grid must be at least 1x1, got {}", self.max);
        }
        if !self.start.position.is_within(self.max) {
            anyhow::bail!(
                "The ship starts at {}, which is outside of the grid",
                self.start.position
            );
        }
        if let Some(outside) = self.obstacles.iter().find(|p| !p.is_within(self.max)) {
            anyhow::bail!("Obstacle {} is outside of the grid", outside);
        }
        if self.obstacles.contains(&self.start.position) {
            anyhow::bail!("The ship starts on an obstacle at {}", self.start.position);
        }
        Ok(())
    }

    pub fn into_ship(self) -> Ship {
        Ship::new(self.start, Planet::new(self.max, self.obstacles))
    }
}
