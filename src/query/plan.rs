//! Query plans and their explain output
//!
//! A plan records how a query will be evaluated at the moment it was
//! taken: which strategy, and the order the selectors will be joined in.

use std::fmt;

use serde::Serialize;

/// How a query turns its selectors into one index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// No selectors: every row, in order
    FullScan,
    /// One selector: its matches directly, no merge
    Single,
    /// Two or more selectors: merge-join, smallest first
    Intersect,
}

impl Strategy {
    /// Returns the strategy name used in explain output
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FullScan => "FULL_SCAN",
            Strategy::Single => "SINGLE",
            Strategy::Intersect => "INTERSECT",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selector's place in the join order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Index of the selector in the order it was selected
    pub slot: usize,
    /// Its match count when the plan was taken
    pub matches: usize,
}

/// Evaluation plan for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    /// Chosen strategy
    pub strategy: Strategy,
    /// Rows in the store when the plan was taken
    pub table_rows: usize,
    /// Selectors in join order: ascending by match count, ties in
    /// selection order
    pub steps: Vec<PlanStep>,
}

impl QueryPlan {
    /// Orders `sizes` (match counts in selection order) into a plan.
    pub(crate) fn from_sizes(table_rows: usize, sizes: &[usize]) -> Self {
        let mut steps: Vec<PlanStep> = sizes
            .iter()
            .enumerate()
            .map(|(slot, &matches)| PlanStep { slot, matches })
            .collect();
        // Stable: equal sizes keep selection order.
        steps.sort_by_key(|step| step.matches);

        let strategy = match steps.len() {
            0 => Strategy::FullScan,
            1 => Strategy::Single,
            _ => Strategy::Intersect,
        };

        Self {
            strategy,
            table_rows,
            steps,
        }
    }

    /// Upper bound on the rows the query can yield
    pub fn max_candidates(&self) -> usize {
        self.steps
            .first()
            .map_or(self.table_rows, |step| step.matches)
    }

    /// Selection slots in join order
    pub fn join_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().map(|step| step.slot)
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== QUERY PLAN ===")?;
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Table Rows: {}", self.table_rows)?;
        if !self.steps.is_empty() {
            writeln!(f, "Join Order:")?;
            for step in &self.steps {
                writeln!(f, "  - selector #{} ({} matches)", step.slot, step.matches)?;
            }
        }
        write!(f, "Max Candidates: {}", self.max_candidates())
    }
}
