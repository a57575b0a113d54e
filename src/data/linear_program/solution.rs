//! # Representation of solve results
//!
//! Once a linear program is solved, the outcome is reported as a `SolveResult`: a status, the
//! optimal value and solution if there is one, and the trace of all tableaus that were visited.
use std::fmt;
use std::iter::once;

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// How a solve terminated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// The objective function can be improved without bound.
    Unbounded,
    /// No point satisfies all constraints.
    Infeasible,
    /// The maximum number of pivots was reached before the algorithm terminated.
    IterationLimit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Optimal => "optimal",
            Self::Unbounded => "unbounded",
            Self::Infeasible => "infeasible",
            Self::IterationLimit => "iteration limit reached",
        })
    }
}

/// Pass of the algorithm during which a tableau was recorded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Methods that pivot on a single tableau (standard, Big-M).
    Single,
    /// First phase of the two-phase method: finding a basic feasible solution.
    One,
    /// Second phase of the two-phase method: optimizing the original objective function.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "simplex",
            Self::One => "phase one",
            Self::Two => "phase two",
        })
    }
}

/// Snapshot of a tableau, taken before a pivot or at the end of a pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IterationRecord {
    phase: Phase,
    /// Row `0` is the objective row, the last column is the right hand side.
    tableau: Vec<Vec<f64>>,
    /// Column index of the basic variable of each constraint row.
    basis: Vec<usize>,
    /// Name of each column except the right hand side, only used for display.
    #[serde(skip)]
    column_names: Vec<String>,
}

impl IterationRecord {
    pub(crate) fn new(
        phase: Phase,
        tableau: Vec<Vec<f64>>,
        basis: Vec<usize>,
        column_names: Vec<String>,
    ) -> Self {
        debug_assert_eq!(tableau.len(), basis.len() + 1);
        debug_assert!(tableau.iter().all(|row| row.len() == column_names.len() + 1));

        Self { phase, tableau, basis, column_names }
    }

    #[allow(missing_docs)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All rows of the tableau, starting with the objective row.
    pub fn tableau(&self) -> &[Vec<f64>] {
        &self.tableau
    }

    #[allow(missing_docs)]
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }
}

/// The phase on one line, followed by the tableau.
impl fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.phase)?;
        write_table(f, &self.column_names, &self.basis, &self.tableau)
    }
}

/// Write a tableau as a table with right-aligned columns.
///
/// The header holds the column names, each row starts with the name of its basic variable and the
/// cost row is labeled `z`. Values are printed with four decimals.
///
/// # Arguments
///
/// * `column_names`: Name of each column, without the right hand side.
/// * `basis`: Column index of the basic variable of each constraint row.
/// * `rows`: Cost row followed by the constraint rows, each ending with the right hand side.
pub(crate) fn write_table(
    f: &mut fmt::Formatter<'_>,
    column_names: &[String],
    basis: &[usize],
    rows: &[Vec<f64>],
) -> fmt::Result {
    debug_assert_eq!(rows.len(), basis.len() + 1);

    let header = once("basis".to_string())
        .chain(column_names.iter().cloned())
        .chain(once("rhs".to_string()))
        .collect::<Vec<_>>();
    let rows = rows.iter().enumerate()
        .map(|(i, row)| {
            let label = match i {
                0 => "z".to_string(),
                _ => column_names[basis[i - 1]].clone(),
            };
            once(label)
                .chain(row.iter().map(|value| format!("{:.4}", value)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = (0..header.len())
        .map(|k| once(&header).chain(&rows).map(|cells| cells[k].len()).max().unwrap_or(0))
        .collect::<Vec<_>>();
    let line = |cells: &[String]| cells.iter().zip(&widths)
        .map(|(cell, &width)| format!("{:>width$}", cell))
        .join(" ");

    writeln!(f, "{}", line(&header))?;
    writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + widths.len() - 1))?;
    for row in &rows {
        writeln!(f, "{}", line(row))?;
    }

    Ok(())
}

/// Outcome of solving a linear program with any of the methods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolveResult {
    status: Status,
    optimal_value: Option<f64>,
    /// (variable name, solution value) tuples for all variables, in order.
    #[serde(serialize_with = "serialize_as_map")]
    optimal_solution: Vec<(String, f64)>,
    iterations: Vec<IterationRecord>,
}

impl SolveResult {
    /// A finite optimum.
    pub(crate) fn optimal(
        optimal_value: f64,
        optimal_solution: Vec<(String, f64)>,
        iterations: Vec<IterationRecord>,
    ) -> Self {
        Self { status: Status::Optimal, optimal_value: Some(optimal_value), optimal_solution, iterations }
    }

    /// Any status without a solution.
    pub(crate) fn without_solution(status: Status, iterations: Vec<IterationRecord>) -> Self {
        debug_assert_ne!(status, Status::Optimal);

        Self { status, optimal_value: None, optimal_solution: Vec::new(), iterations }
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> Status {
        self.status
    }

    #[allow(missing_docs)]
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Value of the objective function in the optimum, if one was found.
    pub fn optimal_value(&self) -> Option<f64> {
        self.optimal_value
    }

    /// Values of `x1` through `xn` in the optimum; empty if no optimum was found.
    pub fn optimal_solution(&self) -> &[(String, f64)] {
        &self.optimal_solution
    }

    /// Value of a single variable in the optimum.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.optimal_solution.iter()
            .find(|(variable, _)| variable == name)
            .map(|&(_, value)| value)
    }

    /// Solution values without their names.
    pub fn values(&self) -> Vec<f64> {
        self.optimal_solution.iter().map(|&(_, value)| value).collect()
    }

    /// Tableaus visited, in the order in which they were visited, across all phases.
    pub fn iterations(&self) -> &[IterationRecord] {
        &self.iterations
    }
}

fn serialize_as_map<S: Serializer>(values: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(values.iter().map(|(name, value)| (name, value)))
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        if let Some(value) = self.optimal_value {
            writeln!(f, "Optimal value: {}", value)?;
            for (name, value) in &self.optimal_solution {
                writeln!(f, "{} = {}", name, value)?;
            }
        }
        write!(f, "Tableaus visited: {}", self.iterations.len())
    }
}
