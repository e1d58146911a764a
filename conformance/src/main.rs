// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    collections::HashMap,
    error::Error,
    fs::File,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use clap::{Args, Parser as ClapParser, Subcommand, builder::ArgPredicate};
use console::Style;
use intl_conformance::{
    fixtures::{self, FIXTURES},
    runner::{
        ConformanceRunner, TestExpectation, TestFilters, Test262Runner, Test262RunnerMetrics,
    },
};
use serde::Deserialize;

#[derive(Debug, ClapParser)]
#[command(name = "conformance")]
#[command(about = "Runs the Intl conformance fixtures against intl_vm.", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommands>,

    #[command(flatten)]
    run_tests: RunTestsArgs,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    /// Runs a single fixture and prints its output.
    EvalTest {
        /// Print every builtin function call.
        #[arg(short, long)]
        verbose: bool,

        /// The test262 path of the fixture.
        path: PathBuf,
    },
}

#[derive(Debug, Args)]
struct RunTestsArgs {
    #[arg(short = 'j', long)]
    num_threads: Option<NonZeroUsize>,

    /// Updates the expectations and metrics files with the results of the test.
    #[arg(short, long)]
    update: bool,

    /// Update the expectations file with the results of the test run.
    #[arg(
        long,
        default_value_if("update", ArgPredicate::Equals("true".into()), Some("true"))
    )]
    update_expectations: bool,

    /// Update the metrics file with the metrics of the test run.
    #[arg(
        long,
        default_value_if("update", ArgPredicate::Equals("true".into()), Some("true"))
    )]
    update_metrics: bool,

    #[arg(short, long)]
    /// Don't print progress messages
    noprogress: bool,

    /// Filters to apply to the tests to run, relative to the test262 `test`
    /// folder.
    filters: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // The configuration files live next to this crate's manifest.
    let runner_base_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let base_runner = ConformanceRunner {
        print_progress: false,
        in_test_eval: false,
        print_internals: false,
    };

    match cli.command {
        Some(CliCommands::EvalTest { verbose, path }) => eval_test(base_runner, &path, verbose),
        None => run_tests(base_runner, &runner_base_path, cli.run_tests),
    }
}

fn eval_test(
    mut base_runner: ConformanceRunner,
    path: &Path,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    base_runner.print_progress = false;
    base_runner.in_test_eval = true;
    base_runner.print_internals = verbose;

    let Some(fixture) = path.to_str().and_then(fixtures::find) else {
        eprintln!("{path:?} is not a registered conformance test");
        std::process::exit(1);
    };

    let result = base_runner.run_test(fixture);

    if result != Ok(TestExpectation::Pass) {
        std::process::exit(1);
    }
    Ok(())
}

/// Reads a JSON file, or returns `None` if it doesn't exist or is empty and
/// is about to be overwritten.
fn read_json<T: for<'de> Deserialize<'de>>(
    path: &Path,
    updating: bool,
) -> Result<Option<T>, Box<dyn Error>> {
    if updating && !path.is_file() {
        return Ok(None);
    }
    let file = File::open(path)?;
    if updating && file.metadata()?.len() == 0 {
        return Ok(None);
    }
    match serde_json::from_reader(&file) {
        Ok(value) => Ok(Some(value)),
        // Failed to parse JSON, but it's okay since we're updating the file
        // anyway.
        Err(error) if updating && !error.is_io() => Ok(None),
        Err(error) => Err(error.into()),
    }
}

fn run_tests(
    mut base_runner: ConformanceRunner,
    runner_base_path: &Path,
    args: RunTestsArgs,
) -> Result<(), Box<dyn Error>> {
    base_runner.print_progress = !args.noprogress;
    base_runner.in_test_eval = false;

    let expectation_path = runner_base_path.join("expectations.json");
    let expectations: HashMap<PathBuf, TestExpectation> =
        read_json(&expectation_path, args.update_expectations)?.unwrap_or_default();

    let metrics_path = runner_base_path.join("metrics.json");
    let metrics: Option<Test262RunnerMetrics> = read_json(&metrics_path, args.update_metrics)?;

    let mut filters = TestFilters::default();

    // Skip tests (skip.json)
    {
        #[derive(Deserialize)]
        struct SkipJson {
            skip: Vec<PathBuf>,
        }
        let skip_json: SkipJson = serde_json::from_reader(File::open(
            runner_base_path.join("skip.json"),
        )?)?;
        filters.denylist.extend(skip_json.skip);
    }
    filters.allowlist.extend(args.filters);

    let runner = Test262Runner {
        inner: base_runner,
        expectations,
    };
    let run_result = runner.run(FIXTURES, &filters, args.num_threads)?;

    let mismatch = Style::new().yellow();
    let mut metrics_mismatch = false;
    if args.update_metrics {
        let json = serde_json::to_value(Test262RunnerMetrics::from(&run_result))?;
        let mut file = File::create(metrics_path)?;
        serde_json::to_writer_pretty(&mut file, &json)?;
    } else if let Some(metrics) = metrics {
        let found = Test262RunnerMetrics::from(&run_result);
        let counts = [
            ("Total test count", found.total, metrics.total),
            ("Pass count", found.results.pass, metrics.results.pass),
            ("Fail count", found.results.fail, metrics.results.fail),
            ("Unresolved count", found.results.unresolved, metrics.results.unresolved),
            ("Crash count", found.results.crash, metrics.results.crash),
            ("Skip count", found.results.skip, metrics.results.skip),
        ];
        for (name, found, expected) in counts {
            if found != expected {
                let label = format!("{name} mismatch:");
                println!(
                    "{}",
                    mismatch.apply_to(format!("{label: <26}{found: >5} vs {expected: >5}"))
                );
                metrics_mismatch = true;
            }
        }

        if metrics_mismatch {
            println!("                         (found) vs (expected)");
            println!("Metrics mismatch detected. Please update the metrics file.");
        }
    }

    if run_result.num_tests_run == 0 {
        println!("No tests found. Check your filters.");
        std::process::exit(1);
    }

    if run_result.unexpected_results.is_empty() {
        if !metrics_mismatch {
            println!("{}", Style::new().green().apply_to("No unexpected test results"));
        }
    } else if !args.update_expectations {
        println!(
            "{}",
            Style::new().red().bold().apply_to(format!(
                "Found {} unexpected test results:",
                run_result.unexpected_results.len()
            ))
        );
        let mut unexpected: Vec<_> = run_result.unexpected_results.iter().collect();
        unexpected.sort_by_key(|(path, _)| *path);
        for (path, result) in unexpected {
            let expectation = runner
                .expectations
                .get(path)
                .copied()
                .unwrap_or(TestExpectation::Pass);
            println!("\t{path:?} -- Expected {expectation:?}, got {result:?}");
        }

        std::process::exit(1);
    } else {
        println!(
            "Updating the expectations file with {} unexpected test results.",
            run_result.unexpected_results.len()
        );

        let mut expectations = runner.expectations;
        for (path, result) in run_result.unexpected_results {
            if result == TestExpectation::Pass {
                expectations.remove(&path);
            } else {
                expectations.insert(path, result);
            }
        }

        // Converting to a JSON value first orders the paths alphabetically.
        let json = serde_json::to_value(expectations)?;
        let mut file = File::create(expectation_path)?;
        serde_json::to_writer_pretty(&mut file, &json)?;
    }

    Ok(())
}
