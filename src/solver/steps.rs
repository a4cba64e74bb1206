use std::fmt;

use serde::Serialize;

/// One line of the shown working: the formula, the formula with numbers
/// substituted, and the value it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationStep {
    /// 1-based position in the derivation.
    pub index: usize,
    pub title: &'static str,
    /// Symbolic form, e.g. `s = (a + b + c) / 2`.
    pub formula: &'static str,
    /// The formula with input values substituted.
    pub substituted: String,
    pub result: String,
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}: {} = {}",
            self.index, self.title, self.substituted, self.result
        )
    }
}

/// Accumulates numbered steps in order.
#[derive(Debug, Default)]
pub(crate) struct StepLog {
    steps: Vec<DerivationStep>,
}

impl StepLog {
    pub(crate) fn push(
        &mut self,
        title: &'static str,
        formula: &'static str,
        substituted: String,
        result: String,
    ) {
        let index = self.steps.len() + 1;
        self.steps.push(DerivationStep {
            index,
            title,
            formula,
            substituted,
            result,
        });
    }

    pub(crate) fn finish(self) -> Vec<DerivationStep> {
        self.steps
    }
}
