use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use tracing::instrument;

use crate::json::types::{JsonPlanningInput, PlanningInput};

#[instrument(skip_all, level = "debug")]
pub fn read_planning_input<P: AsRef<Path>>(path: P) -> Result<PlanningInput, anyhow::Error> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let json: JsonPlanningInput = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse {}", path.display()))?;

    Ok(json.build_problem()?)
}
