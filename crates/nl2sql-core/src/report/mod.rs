pub mod console;

use crate::engine::scorer::ScoreReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub suite: String,
    pub metric: String,
    pub questions: Vec<String>,
    pub report: ScoreReport,
}
