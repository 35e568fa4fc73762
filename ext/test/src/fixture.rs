//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the finer selection engine.

use finer::prelude::*;
use finer::CatalogConfig;
use serde::Deserialize;
use std::sync::Arc;

/// A complete test fixture: a catalog plus the cases to select against it.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    pub catalog: CatalogConfig,
    pub cases: Vec<TestCase>,
}

/// One selection case.
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub action: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentConfig>,
    pub expect: ExpectedOutcome,
}

/// One available argument.
///
/// Omitting `type` makes the argument untyped; `present: false` registers
/// the name with no value.
#[derive(Debug, Deserialize)]
pub struct ArgumentConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: Option<TypeTag>,
    #[serde(default = "default_present")]
    pub present: bool,
}

fn default_present() -> bool {
    true
}

/// The outcome a case expects, keyed by signature shapes.
/// Uses untagged deserialization — each variant has a distinct key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExpectedOutcome {
    Selected {
        /// Shape of the signature that must win.
        selected: String,
    },
    Ambiguous {
        /// Shapes of the signatures that must tie, in registration order.
        ambiguous: Vec<String>,
    },
    NoMatch {
        /// Must be `true`; present for YAML readability.
        no_match: bool,
    },
}

impl TestCase {
    /// Build the case's argument snapshot.
    pub fn build_arguments(&self) -> ArgumentSet {
        self.arguments
            .iter()
            .map(|a| {
                if !a.present {
                    AvailableArgument::absent(&a.name)
                } else {
                    match &a.value_type {
                        Some(tag) => AvailableArgument::typed(&a.name, tag.clone()),
                        None => AvailableArgument::untyped(&a.name),
                    }
                }
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case.
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

fn render_outcome(outcome: &SelectionOutcome) -> String {
    match outcome {
        SelectionOutcome::Selected(signature) => format!("selected {}", signature.shape()),
        SelectionOutcome::NoMatch => "no match".to_string(),
        SelectionOutcome::Ambiguous(tied) => {
            let shapes: Vec<String> = tied.iter().map(CandidateSignature::shape).collect();
            format!("ambiguous [{}]", shapes.join(", "))
        }
    }
}

fn render_expected(expect: &ExpectedOutcome) -> String {
    match expect {
        ExpectedOutcome::Selected { selected } => format!("selected {selected}"),
        ExpectedOutcome::NoMatch { .. } => "no match".to_string(),
        ExpectedOutcome::Ambiguous { ambiguous } => {
            format!("ambiguous [{}]", ambiguous.join(", "))
        }
    }
}

fn outcome_matches(expect: &ExpectedOutcome, outcome: &SelectionOutcome) -> bool {
    match (expect, outcome) {
        (ExpectedOutcome::Selected { selected }, SelectionOutcome::Selected(signature)) => {
            *selected == signature.shape()
        }
        (ExpectedOutcome::NoMatch { no_match }, SelectionOutcome::NoMatch) => *no_match,
        (ExpectedOutcome::Ambiguous { ambiguous }, SelectionOutcome::Ambiguous(tied)) => {
            ambiguous.len() == tied.len()
                && ambiguous
                    .iter()
                    .zip(tied.iter())
                    .all(|(shape, signature)| *shape == signature.shape())
        }
        _ => false,
    }
}

impl Fixture {
    /// Parse a fixture from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators.
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results.
    ///
    /// # Panics
    ///
    /// Panics if the fixture's catalog config does not build — a broken
    /// catalog is a fixture authoring error, not a case failure.
    pub fn run(&self) -> Vec<CaseResult> {
        let catalog = self
            .catalog
            .build()
            .unwrap_or_else(|e| panic!("fixture '{}': invalid catalog: {e}", self.name));
        let selector = Selector::new(Arc::new(catalog));

        self.cases
            .iter()
            .map(|case| {
                let args = case.build_arguments();
                let outcome = selector.select(&case.action, &args);
                CaseResult {
                    case_name: case.name.clone(),
                    passed: outcome_matches(&case.expect, &outcome),
                    expected: render_expected(&case.expect),
                    actual: render_outcome(&outcome),
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure.
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {}, got {}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}
