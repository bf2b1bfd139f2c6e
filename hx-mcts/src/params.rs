//! Search parameters and the difficulty mapping.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playing-strength knob exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Index into the per-difficulty parameter tables.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MED",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read params file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid params: {msg}")]
    Invalid { msg: &'static str },
}

/// Tunable search parameters.
///
/// Defaults reproduce the stock difficulty table; callers that want a
/// different balance (longer budgets, a different RAVE bias) can load
/// overrides from YAML and pass them to `get_move_with`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchParams {
    /// Wall-clock budget per difficulty in milliseconds (easy, medium, hard).
    #[serde(default = "default_time_budget_ms")]
    pub time_budget_ms: [u64; 3],
    /// RAVE bias per difficulty (easy, medium, hard).
    #[serde(default = "default_rave_bias")]
    pub rave_bias: [f64; 3],
    /// UCT exploration constant.
    #[serde(default = "default_uct_exploration")]
    pub uct_exploration: f64,
    /// Soft cap on arena nodes per call.
    #[serde(default = "default_node_pool_size")]
    pub node_pool_size: usize,
    /// Move-ordering base score for the board center.
    #[serde(default = "default_center_bias")]
    pub center_bias: i32,
    /// Move-ordering penalty per Manhattan step away from the center.
    #[serde(default = "default_dist_penalty")]
    pub dist_penalty: i32,
    /// Move-ordering bonus for moves forming a bridge with an own stone.
    #[serde(default = "default_bridge_build")]
    pub bridge_build: i32,
}

fn default_time_budget_ms() -> [u64; 3] {
    [500, 900, 1000]
}

fn default_rave_bias() -> [f64; 3] {
    [500.0, 500.0, 3000.0]
}

fn default_uct_exploration() -> f64 {
    0.2
}

fn default_node_pool_size() -> usize {
    200_000
}

fn default_center_bias() -> i32 {
    100
}

fn default_dist_penalty() -> i32 {
    10
}

fn default_bridge_build() -> i32 {
    5000
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            time_budget_ms: default_time_budget_ms(),
            rave_bias: default_rave_bias(),
            uct_exploration: default_uct_exploration(),
            node_pool_size: default_node_pool_size(),
            center_bias: default_center_bias(),
            dist_penalty: default_dist_penalty(),
            bridge_build: default_bridge_build(),
        }
    }
}

impl SearchParams {
    /// Load parameters from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load parameters from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParamsError> {
        let params: SearchParams = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.time_budget_ms.iter().any(|&ms| ms == 0) {
            return Err(ParamsError::Invalid {
                msg: "time budgets must be > 0",
            });
        }
        if self.rave_bias.iter().any(|b| !(b.is_finite() && *b > 0.0)) {
            return Err(ParamsError::Invalid {
                msg: "rave_bias must be finite and > 0",
            });
        }
        if !(self.uct_exploration.is_finite() && self.uct_exploration >= 0.0) {
            return Err(ParamsError::Invalid {
                msg: "uct_exploration must be finite and >= 0",
            });
        }
        if self.node_pool_size < 1_000 {
            return Err(ParamsError::Invalid {
                msg: "node_pool_size must be >= 1000",
            });
        }
        Ok(())
    }

    pub fn time_budget(&self, difficulty: Difficulty) -> Duration {
        Duration::from_millis(self.time_budget_ms[difficulty.index()])
    }

    pub fn rave_bias_for(&self, difficulty: Difficulty) -> f64 {
        self.rave_bias[difficulty.index()]
    }
}
