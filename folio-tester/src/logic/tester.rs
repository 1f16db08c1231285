use colored::Colorize;
use folio_core::Translations;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    pub fn passed(scenario_name: impl Into<String>, duration: Duration) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            passed: true,
            failures: Vec::new(),
            duration,
        }
    }

    pub fn failed(scenario_name: impl Into<String>, failure: String, duration: Duration) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            passed: false,
            failures: vec![failure],
            duration,
        }
    }
}

pub struct LogicTester {
    translations: Translations,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(translations: Translations, verbose: bool) -> Self {
        Self {
            translations,
            verbose,
        }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let start = Instant::now();
        let outcome = (scenario.check)(&self.translations);
        let duration = start.elapsed();

        match outcome {
            Ok(()) => {
                if self.verbose {
                    println!("  ✅ passed ({duration:?})");
                }
                ScenarioResult::passed(&scenario.name, duration)
            }
            Err(err) => {
                let failure = format!("{err:#}");
                if self.verbose {
                    println!("  ❌ failed: {}", failure.clone().red());
                }
                ScenarioResult::failed(&scenario.name, failure, duration)
            }
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
