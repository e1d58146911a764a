// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::OsStr,
    num::NonZeroUsize,
    panic::{AssertUnwindSafe, catch_unwind},
    path::{Component, Path, PathBuf},
};

use intl_vm::ecmascript::execution::{Agent, Options};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::{
    fixtures::Fixture,
    metadata::{self, TestFailurePhase, TestMetadata},
};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestExpectation {
    Pass,
    Fail,
    Unresolved,
    Crash,
}

/// Harness files whose primitives the Rust harness provides.
const PROVIDED_INCLUDES: &[&str] = &["assert.js", "sta.js", "compareArray.js"];

pub fn is_test_file(file_name: &str) -> bool {
    // File names containing "_FIXTURE" are modules imported by other tests.
    file_name.ends_with(".js") && !file_name.contains("_FIXTURE")
}

#[derive(Debug, Default, Clone)]
pub struct TestFilters {
    pub allowlist: Vec<PathBuf>,
    pub denylist: Vec<PathBuf>,
}

impl TestFilters {
    /// Checks if a directory should be filtered out, and if not, returns the
    /// [`TestFilters`] object for its children.
    fn filter_dir(&self, os_folder_name: &OsStr) -> Option<TestFilters> {
        // No filters means that all directories (and valid test files within
        // them) should be visited.
        if self.allowlist.is_empty() && self.denylist.is_empty() {
            return Some(TestFilters::default());
        }

        let mut child_denylist = Vec::with_capacity(self.denylist.len());
        for filter in self.denylist.iter() {
            // An empty filter comes from a trailing slash and means the
            // parent directory was denied.
            if filter == OsStr::new("") || filter == os_folder_name {
                return None;
            }
            if let Ok(child_filter) = filter.strip_prefix(os_folder_name) {
                child_denylist.push(child_filter.to_path_buf());
            }
        }

        if self.allowlist.is_empty() {
            return Some(TestFilters {
                allowlist: vec![],
                denylist: child_denylist,
            });
        }

        let mut child_allowlist = Vec::with_capacity(self.allowlist.len());
        for filter in self.allowlist.iter() {
            // A filter naming this folder allows all of its descendants that
            // aren't denied.
            if filter == OsStr::new("") || filter == os_folder_name {
                return Some(TestFilters {
                    allowlist: vec![],
                    denylist: child_denylist,
                });
            }
            if let Ok(child_filter) = filter.strip_prefix(os_folder_name) {
                child_allowlist.push(child_filter.to_path_buf());
            }
        }

        if child_allowlist.is_empty() {
            None
        } else {
            Some(TestFilters {
                allowlist: child_allowlist,
                denylist: child_denylist,
            })
        }
    }

    fn filter_file(&self, os_file_name: &OsStr) -> bool {
        if let Some(str_file_name) = os_file_name.to_str()
            && !is_test_file(str_file_name)
        {
            return false;
        }
        if self.denylist.iter().any(|path| path == os_file_name) {
            return false;
        }
        if self.allowlist.is_empty() {
            return true;
        }
        self.allowlist.iter().any(|path| path == os_file_name)
    }

    /// Applies the filters to a test path relative to the test root, one
    /// directory at a time.
    pub fn allows(&self, path: &Path) -> bool {
        let mut components: Vec<&OsStr> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect();
        let Some(file_name) = components.pop() else {
            return false;
        };
        let mut filters = self.clone();
        for folder in components {
            match filters.filter_dir(folder) {
                Some(child_filters) => filters = child_filters,
                None => return false,
            }
        }
        filters.filter_file(file_name)
    }
}

/// Why a fixture did not run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedFeatures(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ConformanceRunner {
    pub print_progress: bool,
    pub in_test_eval: bool,
    pub print_internals: bool,
}

impl ConformanceRunner {
    /// Returns the features a fixture requires that this engine build lacks.
    pub fn unsupported_features(metadata: &TestMetadata) -> Vec<String> {
        let supported = intl_vm::supported_features();
        metadata
            .features
            .iter()
            .filter(|feature| !supported.contains(&feature.as_str()))
            .cloned()
            .collect()
    }

    /// Runs a fixture in a fresh agent and realm.
    pub fn run_test(&self, fixture: &Fixture) -> Result<TestExpectation, SkipReason> {
        if self.print_progress {
            let mut message = format!("Running {}", fixture.path);
            if message.len() > 80 {
                message.truncate(80 - 3);
                message.push_str("...");
            }
            // These escape codes make this line overwrite the previous line.
            print!("{message}\x1B[0K\r");
        }

        let metadata = match metadata::parse(fixture.metadata) {
            Ok(metadata) => metadata,
            Err(error) => {
                if self.in_test_eval {
                    eprintln!("{error}");
                }
                return Ok(TestExpectation::Unresolved);
            }
        };

        let unsupported = Self::unsupported_features(&metadata);
        if !unsupported.is_empty() {
            if self.in_test_eval {
                println!("Skipped, unsupported features: {}", unsupported.join(", "));
            }
            return Err(SkipReason::UnsupportedFeatures(unsupported));
        }

        if let Some(reason) = Self::unresolved_reason(&metadata) {
            if self.in_test_eval {
                println!("Unresolved: {reason}");
            }
            return Ok(TestExpectation::Unresolved);
        }

        if self.in_test_eval {
            if let Some(description) = &metadata.description {
                println!("{}", description.trim_end());
            }
            println!("Running: {}", fixture.path);
            println!();
        }

        let options = Options {
            print_internals: self.print_internals,
        };
        let body = fixture.body;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut agent = Agent::new(options);
            let realm = agent.create_realm();
            agent.run_in_realm(realm, body)
        }));

        let expectation = match (result, &metadata.negative) {
            (Err(_), _) => TestExpectation::Crash,
            (Ok(Ok(_)), None) => TestExpectation::Pass,
            (Ok(Ok(_)), Some(_)) => TestExpectation::Fail,
            (Ok(Err(error)), negative) => {
                if self.in_test_eval {
                    eprintln!("{error}");
                }
                let thrown = error.uncaught_error_type();
                match negative {
                    Some(negative)
                        if negative.phase == TestFailurePhase::Runtime
                            && thrown == Some(negative.error_type.as_str()) =>
                    {
                        TestExpectation::Pass
                    }
                    _ => TestExpectation::Fail,
                }
            }
        };

        if self.in_test_eval {
            println!();
            println!("Test result: {expectation:?}");
        }
        Ok(expectation)
    }

    /// Fixtures are Rust bodies, so anything that needs JavaScript source
    /// handling cannot be resolved here.
    fn unresolved_reason(metadata: &TestMetadata) -> Option<String> {
        if let Some(include) = metadata.includes.iter().find(|include| {
            !include
                .to_str()
                .is_some_and(|include| PROVIDED_INCLUDES.contains(&include))
        }) {
            return Some(format!("harness include {} is not provided", include.display()));
        }
        if metadata.flags.is_async {
            return Some("async tests are not supported".to_string());
        }
        if metadata.flags.module {
            return Some("module tests are not supported".to_string());
        }
        if let Some(negative) = &metadata.negative
            && negative.phase != TestFailurePhase::Runtime
        {
            return Some(format!("{:?} phase negative tests are not supported", negative.phase));
        }
        None
    }
}

#[derive(Debug)]
pub struct Test262Runner {
    pub inner: ConformanceRunner,
    pub expectations: HashMap<PathBuf, TestExpectation>,
}

#[derive(Debug, Default)]
pub struct Test262RunnerState {
    pub unexpected_results: HashMap<PathBuf, TestExpectation>,
    pub num_tests_run: usize,
    pub num_tests_pass: usize,
    pub num_tests_fail: usize,
    pub num_tests_unresolved: usize,
    pub num_tests_crash: usize,
    pub num_tests_skip: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Test262RunnerMetrics {
    pub total: usize,
    pub results: Test262RunnerMetricsResults,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Test262RunnerMetricsResults {
    pub pass: usize,
    pub fail: usize,
    pub unresolved: usize,
    pub crash: usize,
    pub skip: usize,
}

impl From<&Test262RunnerState> for Test262RunnerMetrics {
    fn from(state: &Test262RunnerState) -> Self {
        Test262RunnerMetrics {
            total: state.num_tests_run + state.num_tests_skip,
            results: Test262RunnerMetricsResults {
                pass: state.num_tests_pass,
                fail: state.num_tests_fail,
                unresolved: state.num_tests_unresolved,
                crash: state.num_tests_crash,
                skip: state.num_tests_skip,
            },
        }
    }
}

thread_local! {
    static RUNNER_STATE: RefCell<Test262RunnerState> = Default::default();
}

impl Test262Runner {
    /// Runs every fixture the filters allow. Fixtures run in parallel with
    /// each other; a fixture body always runs on a single thread.
    ///
    /// Fixtures in the filters' denylist count as skipped.
    pub fn run(
        &self,
        fixtures: &[Fixture],
        filters: &TestFilters,
        num_threads: Option<NonZeroUsize>,
    ) -> Result<Test262RunnerState, rayon::ThreadPoolBuildError> {
        let thread_pool = {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(num_threads) = num_threads {
                builder = builder.num_threads(num_threads.get());
            };
            builder.use_current_thread().build()?
        };

        let denied = TestFilters {
            allowlist: filters.denylist.clone(),
            denylist: vec![],
        };
        let without_denylist = TestFilters {
            allowlist: filters.allowlist.clone(),
            denylist: vec![],
        };

        thread_pool.install(|| {
            fixtures.par_iter().for_each(|fixture| {
                let path = Path::new(fixture.path);
                if filters.allows(path) {
                    self.run_test(fixture);
                } else if !filters.denylist.is_empty()
                    && denied.allows(path)
                    && without_denylist.allows(path)
                {
                    RUNNER_STATE.with_borrow_mut(|state| state.num_tests_skip += 1);
                }
            });
        });

        // Clear the previous line.
        if self.inner.print_progress {
            print!("\x1B[2K\r");
        }

        // Get the runner state for each thread, and merge them together.
        Ok(thread_pool
            .broadcast(|_| RUNNER_STATE.take())
            .into_iter()
            .reduce(|mut acc, el| {
                acc.num_tests_run += el.num_tests_run;
                acc.num_tests_pass += el.num_tests_pass;
                acc.num_tests_fail += el.num_tests_fail;
                acc.num_tests_unresolved += el.num_tests_unresolved;
                acc.num_tests_crash += el.num_tests_crash;
                acc.num_tests_skip += el.num_tests_skip;
                acc.unexpected_results.extend(el.unexpected_results);
                acc
            })
            .unwrap_or_default())
    }

    fn run_test(&self, fixture: &Fixture) {
        let Ok(test_result) = self.inner.run_test(fixture) else {
            RUNNER_STATE.with_borrow_mut(|state| state.num_tests_skip += 1);
            return;
        };

        RUNNER_STATE.with_borrow_mut(|state| {
            state.num_tests_run += 1;
            match test_result {
                TestExpectation::Pass => state.num_tests_pass += 1,
                TestExpectation::Fail => state.num_tests_fail += 1,
                TestExpectation::Unresolved => state.num_tests_unresolved += 1,
                TestExpectation::Crash => state.num_tests_crash += 1,
            }
        });

        let path = PathBuf::from(fixture.path);
        let expectation = self
            .expectations
            .get(&path)
            .copied()
            .unwrap_or(TestExpectation::Pass);

        if test_result != expectation {
            RUNNER_STATE.with_borrow_mut(|state| {
                state.unexpected_results.insert(path, test_result);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use intl_vm::ecmascript::execution::agent::ExceptionType;

    use super::*;
    use crate::harness::{Test262Error, TestCompletion, report_compare};

    #[test]
    fn filters_apply_per_directory() {
        let filters = TestFilters {
            allowlist: vec![PathBuf::from("intl402/ListFormat")],
            denylist: vec![PathBuf::from(
                "intl402/ListFormat/constructor/supportedLocalesOf/options-null.js",
            )],
        };
        let options = "intl402/ListFormat/constructor/supportedLocalesOf/options-toobject.js";
        assert!(filters.allows(Path::new(options)));
        assert!(!filters.allows(Path::new(
            "intl402/ListFormat/constructor/supportedLocalesOf/options-null.js"
        )));
        assert!(!filters.allows(Path::new(
            "intl402/Intl/getCanonicalLocales/canonicalized-tags.js"
        )));
        assert!(!filters.allows(Path::new("intl402/ListFormat/shell_FIXTURE.js")));
        assert!(TestFilters::default().allows(Path::new(options)));
    }

    fn passes(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
        report_compare(agent, 0u32.into(), 0u32.into())
    }

    fn throws_type_error(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
        let error = agent.throw_exception(ExceptionType::TypeError, "boom");
        Err(Test262Error::uncaught(agent, error))
    }

    fn panics(_: &mut Agent) -> Result<TestCompletion, Test262Error> {
        panic!("fixture bug")
    }

    fn fixture(metadata: &'static str, body: crate::fixtures::FixtureBody) -> Fixture {
        Fixture {
            path: "intl402/Synthetic/test.js",
            metadata,
            body,
        }
    }

    #[test]
    fn classifies_results() {
        let runner = ConformanceRunner {
            print_progress: false,
            in_test_eval: false,
            print_internals: false,
        };
        let plain = "description: x\nfeatures: [Intl.ListFormat]";
        let negative = "description: x\nnegative:\n  phase: runtime\n  type: TypeError";
        assert_eq!(runner.run_test(&fixture(plain, passes)), Ok(TestExpectation::Pass));
        assert_eq!(
            runner.run_test(&fixture(plain, throws_type_error)),
            Ok(TestExpectation::Fail)
        );
        assert_eq!(
            runner.run_test(&fixture(negative, throws_type_error)),
            Ok(TestExpectation::Pass)
        );
        assert_eq!(runner.run_test(&fixture(negative, passes)), Ok(TestExpectation::Fail));
        assert_eq!(runner.run_test(&fixture(plain, panics)), Ok(TestExpectation::Crash));
        assert_eq!(
            runner.run_test(&fixture("flags: [async]", passes)),
            Ok(TestExpectation::Unresolved)
        );
        assert_eq!(
            runner.run_test(&fixture("includes: [propertyHelper.js]", passes)),
            Ok(TestExpectation::Unresolved)
        );
        assert_eq!(
            runner.run_test(&fixture("features: [Temporal]", passes)),
            Err(SkipReason::UnsupportedFeatures(vec!["Temporal".to_string()]))
        );
    }
}
