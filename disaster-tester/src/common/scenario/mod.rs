use anyhow::Result;
use async_trait::async_trait;
use disaster_core::{Catalog, GameApi};
use std::sync::Arc;

pub mod flow;
pub mod packing;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub catalog: Arc<Catalog>,
    pub verbose: bool,
}

pub type LogicCheck = fn(&ScenarioCtx) -> Result<()>;

// Logic test scenario
#[derive(Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Live backend scenario
#[async_trait(?Send)]
pub trait BackendScenario {
    async fn run_backend(&self, api: &dyn GameApi, ctx: &ScenarioCtx) -> Result<()>;
}

// Combined scenario that can run against logic, a live backend, or both
pub trait CombinedScenario: BackendScenario {
    fn name(&self) -> &'static str;
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// A scenario that only exercises `disaster-core`.
#[derive(Clone)]
pub struct LogicScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }
}

#[async_trait(?Send)]
impl BackendScenario for LogicScenario {
    async fn run_backend(&self, _api: &dyn GameApi, _ctx: &ScenarioCtx) -> Result<()> {
        anyhow::bail!("{} has no backend test", self.name)
    }
}

impl CombinedScenario for LogicScenario {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

/// Whether a scenario has a live-backend half.
pub fn has_backend_run(key: &str) -> bool {
    matches!(key, "full-flow" | "flow" | "smoke")
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario>> {
    match name.to_lowercase().as_str() {
        "full-flow" | "flow" | "smoke" => Some(Box::new(flow::FullFlowScenario)),
        "bag-capacity" | "capacity" => Some(Box::new(LogicScenario::new(
            "Bag Capacity Invariants",
            packing::bag_capacity_check,
        ))),
        "bag-boundary" | "boundary" => Some(Box::new(LogicScenario::new(
            "Bag Cap Boundary",
            packing::bag_boundary_check,
        ))),
        "flatten-submission" | "submission" => Some(Box::new(LogicScenario::new(
            "Submission Body Flattening",
            packing::flatten_submission_check,
        ))),
        "countdown" | "timer" => Some(Box::new(LogicScenario::new(
            "Countdown Expiry",
            packing::countdown_check,
        ))),
        "input-validation" | "validation" => Some(Box::new(LogicScenario::new(
            "Input Validation",
            packing::input_validation_check,
        ))),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full-flow", "Full Player Flow (logic + backend smoke)"),
        ("bag-capacity", "Bag Capacity Invariants"),
        ("bag-boundary", "Bag Cap Boundary"),
        ("flatten-submission", "Submission Body Flattening"),
        ("countdown", "Countdown Expiry"),
        ("input-validation", "Input Validation"),
    ]
}
