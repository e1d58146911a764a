// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{collections::HashMap, fs::File, num::NonZeroUsize, path::PathBuf};

use intl_conformance::{
    fixtures::{self, FIXTURES},
    metadata,
    runner::{
        ConformanceRunner, Test262Runner, Test262RunnerMetrics, TestExpectation, TestFilters,
    },
};

fn runner() -> Test262Runner {
    Test262Runner {
        inner: ConformanceRunner {
            print_progress: false,
            in_test_eval: false,
            print_internals: false,
        },
        expectations: HashMap::new(),
    }
}

#[test]
fn every_fixture_passes() {
    let result = runner()
        .run(FIXTURES, &TestFilters::default(), NonZeroUsize::new(2))
        .unwrap();
    assert_eq!(result.unexpected_results, HashMap::new());
    assert_eq!(result.num_tests_run, FIXTURES.len());
    assert_eq!(result.num_tests_pass, FIXTURES.len());
}

#[test]
fn committed_metrics_match_a_full_run() {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let metrics: Test262RunnerMetrics =
        serde_json::from_reader(File::open(base.join("metrics.json")).unwrap()).unwrap();
    let expectations: HashMap<PathBuf, TestExpectation> =
        serde_json::from_reader(File::open(base.join("expectations.json")).unwrap()).unwrap();
    let mut runner = runner();
    runner.expectations = expectations;
    let result = runner.run(FIXTURES, &TestFilters::default(), None).unwrap();
    assert_eq!(Test262RunnerMetrics::from(&result), metrics);
    assert!(result.unexpected_results.is_empty());
}

#[test]
fn filters_and_denylist_select_fixtures() {
    let filters = TestFilters {
        allowlist: vec![PathBuf::from("intl402/ListFormat/constructor/supportedLocalesOf")],
        denylist: vec![PathBuf::from(
            "intl402/ListFormat/constructor/supportedLocalesOf/options-null.js",
        )],
    };
    let result = runner().run(FIXTURES, &filters, None).unwrap();
    let list_format_fixtures = FIXTURES
        .iter()
        .filter(|fixture| fixture.path.starts_with("intl402/ListFormat/"))
        .count();
    assert_eq!(result.num_tests_run, list_format_fixtures - 1);
    assert_eq!(result.num_tests_skip, 1);
}

#[test]
fn unexpected_results_are_reported() {
    let mut runner = runner();
    let path = "intl402/ListFormat/constructor/supportedLocalesOf/options-toobject.js";
    runner
        .expectations
        .insert(PathBuf::from(path), TestExpectation::Fail);
    let filters = TestFilters {
        allowlist: vec![PathBuf::from(path)],
        denylist: vec![],
    };
    let result = runner.run(FIXTURES, &filters, None).unwrap();
    assert_eq!(
        result.unexpected_results.get(&PathBuf::from(path)),
        Some(&TestExpectation::Pass)
    );
}

#[test]
fn the_toobject_fixture_is_registered() {
    let fixture =
        fixtures::find("intl402/ListFormat/constructor/supportedLocalesOf/options-toobject.js")
            .unwrap();
    let metadata = metadata::parse(fixture.metadata).unwrap();
    assert_eq!(
        metadata.esid.as_deref(),
        Some("sec-Intl.ListFormat.supportedLocalesOf")
    );
    assert_eq!(
        metadata.description.as_deref(),
        Some("Checks handling of non-object options arguments to the supportedLocalesOf function.")
    );
    assert_eq!(metadata.features, ["Intl.ListFormat"]);
    assert!(metadata.includes.is_empty());

    let runner = ConformanceRunner {
        print_progress: false,
        in_test_eval: false,
        print_internals: false,
    };
    assert_eq!(runner.run_test(fixture), Ok(TestExpectation::Pass));
}
