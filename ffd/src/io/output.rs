use serde::{Deserialize, Serialize};

use crate::config::FFDConfig;
use zaagplan::io::ext_repr::{ExtCutInstance, ExtPlan};

#[derive(Serialize, Deserialize, Clone)]
pub struct CutOutput {
    #[serde(flatten)]
    pub instance: ExtCutInstance,
    pub plan: ExtPlan,
    pub config: FFDConfig,
    /// Time spent in the optimizer
    pub run_time_ms: f64,
}
