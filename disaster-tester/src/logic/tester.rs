use colored::Colorize;
use disaster_core::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::common::scenario::{ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Result of a single run, as recorded for backend scenarios.
    pub fn single(name: &str, seed: u64, duration: Duration, outcome: Result<(), String>) -> Self {
        let passed = outcome.is_ok();
        Self {
            scenario_name: name.to_string(),
            seed,
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: outcome.err().into_iter().collect(),
            average_duration: duration,
            performance_data: vec![duration],
        }
    }
}

pub struct LogicTester {
    catalog: Arc<Catalog>,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(catalog: Arc<Catalog>, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed: {})",
                    scenario.name.bright_white(),
                    seed
                );
            }

            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let ctx = ScenarioCtx {
                seed: iteration_seed,
                catalog: Arc::clone(&self.catalog),
                verbose: self.verbose,
            };
            let start_time = Instant::now();

            match (scenario.check)(&ctx) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?})",
                            i + 1,
                            iterations
                        );
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::sample_catalog;

    fn always_ok(_: &ScenarioCtx) -> anyhow::Result<()> {
        Ok(())
    }

    fn odd_seeds_fail(ctx: &ScenarioCtx) -> anyhow::Result<()> {
        anyhow::ensure!(ctx.seed % 2 == 0, "odd seed {}", ctx.seed);
        Ok(())
    }

    fn tester() -> LogicTester {
        LogicTester::new(Arc::new(sample_catalog()), false)
    }

    #[test]
    fn one_result_per_seed() {
        let scenario = TestScenario::new("ok", always_ok);
        let results = tester().run_scenario(&scenario, &[1, 2, 3], 4);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 4));
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn iterations_walk_the_seed() {
        let scenario = TestScenario::new("odd", odd_seeds_fail);
        let results = tester().run_scenario(&scenario, &[10], 4);
        let result = &results[0];
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 2);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("seed 11"));
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult::single("smoke", 1, Duration::from_millis(1500), Ok(()));
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 1500);
        assert_eq!(json["performance_data"][0], 1500);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.average_duration, Duration::from_millis(1500));
    }

    #[test]
    fn single_failure_is_recorded() {
        let result =
            ScenarioResult::single("smoke", 1, Duration::ZERO, Err("connection refused".into()));
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures, vec!["connection refused".to_string()]);
    }
}
