use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use breadthwise_solver::{Configuration, SolveOutcome};
use serde::Serialize;

use crate::cli::Format;

/// How a search ended, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Status {
    Solved,
    Unsolvable,
    LimitReached,
}

/// A named puzzle parameter shown before the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Parameter {
    name: &'static str,
    value: String,
}

impl Parameter {
    pub(crate) fn new(name: &'static str, value: impl Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// The result of one `solve` run, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Report {
    puzzle: &'static str,
    parameters: Vec<Parameter>,
    status: Status,
    total_expansions: usize,
    unique_states: usize,
    steps: Vec<String>,
}

impl Report {
    pub(crate) fn new<C>(
        puzzle: &'static str,
        parameters: Vec<Parameter>,
        outcome: &SolveOutcome<C>,
    ) -> Self
    where
        C: Configuration,
    {
        let status = match outcome {
            SolveOutcome::Solved { .. } => Status::Solved,
            SolveOutcome::Unsolvable { .. } => Status::Unsolvable,
            SolveOutcome::LimitReached { .. } => Status::LimitReached,
        };
        let steps = outcome
            .path()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect();
        Self {
            puzzle,
            parameters,
            status,
            total_expansions: outcome.stats().total_expansions(),
            unique_states: outcome.stats().unique_states(),
            steps,
        }
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn write(&self, format: Format, mut out: impl Write) -> io::Result<()> {
        match format {
            Format::Text => write!(out, "{self}"),
            Format::Json => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)
            }
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", parameter.name, parameter.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Total expansions: {}", self.total_expansions)?;
        writeln!(f, "Unique states: {}", self.unique_states)?;
        match self.status {
            Status::Solved => {
                for (i, step) in self.steps.iter().enumerate() {
                    if step.contains('\n') {
                        writeln!(f, "Step {i}:\n{step}")?;
                    } else {
                        writeln!(f, "Step {i}: {step}")?;
                    }
                }
            }
            Status::Unsolvable => writeln!(f, "No solution")?,
            Status::LimitReached => writeln!(
                f,
                "No solution found within {} expansions",
                self.total_expansions
            )?,
        }
        Ok(())
    }
}
