//! Command-line entry point for the breadthwise puzzle solver.
//!
//! ```sh
//! breadthwise clock 12 2 11
//! breadthwise water 4 3 5 --format json
//! breadthwise tip-over boards/tip_over/quarry.txt --max-expansions 100000
//! breadthwise play lunar-landing boards/lunar_landing/crater.txt
//! ```
//!
//! Exit status is `0` when a solution was found, `1` when there is none (or
//! the expansion limit was hit first), and `2` for invalid input.

use std::{
    io::{self, Write as _},
    path::Path,
    process::ExitCode,
};

use breadthwise_puzzles::{
    Board, ClockConfiguration, ClockError, LoadError, LunarLandingConfiguration,
    TipOverConfiguration, WaterConfiguration, WaterError,
};
use breadthwise_solver::{Configuration, Solver};
use clap::Parser as _;

use crate::{
    cli::{BoardPuzzle, Cli, Command, Format},
    play::{Controls, Player},
    report::{Parameter, Report, Status},
};

mod cli;
mod logging;
mod play;
mod report;

const EXIT_NO_SOLUTION: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

/// Errors that end the program before or while reporting a result.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Clock(#[error(not(source))] ClockError),
    #[display("{_0}")]
    Water(#[error(not(source))] WaterError),
    #[display("{_0}")]
    Load(#[error(not(source))] LoadError),
    #[display("failed to write output: {_0}")]
    Io(#[error(not(source))] io::Error),
}

fn main() -> ExitCode {
    better_panic::install();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            log::debug!("exiting on error: {err:?}");
            eprintln!("error: {err}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let solver = cli.solver();
    let report = match &cli.command {
        Command::Clock { hours, start, end } => {
            let start_config = ClockConfiguration::new(*hours, *start, *end)?;
            let parameters = vec![
                Parameter::new("Hours", hours),
                Parameter::new("Start", start),
                Parameter::new("End", end),
            ];
            solve("clock", parameters, start_config, solver)
        }
        Command::Water { amount, buckets } => {
            let start_config = WaterConfiguration::new(*amount, buckets.clone())?;
            let parameters = vec![
                Parameter::new("Amount", amount),
                Parameter::new("Buckets", format!("{buckets:?}")),
            ];
            solve("water", parameters, start_config, solver)
        }
        Command::LunarLanding { file } => solve_board::<LunarLandingConfiguration>(
            "lunar-landing",
            file,
            solver,
        )?,
        Command::TipOver { file } => {
            solve_board::<TipOverConfiguration>("tip-over", file, solver)?
        }
        Command::Play { puzzle, file } => {
            match puzzle {
                BoardPuzzle::LunarLanding => play::<LunarLandingConfiguration>(file, solver)?,
                BoardPuzzle::TipOver => play::<TipOverConfiguration>(file, solver)?,
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    write_report(&report, cli.format)?;
    Ok(match report.status() {
        Status::Solved => ExitCode::SUCCESS,
        Status::Unsolvable | Status::LimitReached => ExitCode::from(EXIT_NO_SOLUTION),
    })
}

fn solve<C>(puzzle: &'static str, parameters: Vec<Parameter>, start: C, solver: Solver) -> Report
where
    C: Configuration,
{
    log::info!("solving {puzzle} puzzle from {start}");
    let outcome = solver.solve(start);
    Report::new(puzzle, parameters, &outcome)
}

fn solve_board<B>(puzzle: &'static str, file: &Path, solver: Solver) -> Result<Report, CliError>
where
    B: Board + Configuration,
{
    let board = B::load(file)?;
    let parameters = vec![Parameter::new("File", file.display())];
    Ok(solve(puzzle, parameters, board, solver))
}

fn play<P>(file: &Path, solver: Solver) -> Result<(), CliError>
where
    P: Controls,
{
    let mut player = Player::<P>::open(file, solver)?;
    player.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn write_report(report: &Report, format: Format) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    report.write(format, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_errors_print_once() {
        let err = CliError::from(WaterConfiguration::new(4, vec![]).unwrap_err());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), WaterError::NoBuckets.to_string());

        let err = CliError::from(io::Error::other("broken pipe"));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "failed to write output: broken pipe");
    }
}
