//! Integration tests for running package batches end to end.

use fittrack::report::OutputFormat;
use fittrack::runner::{sample_packages, FailurePolicy, Package, RunError, Runner};
use fittrack::{Summary, WorkoutError};

fn run_to_string(runner: Runner, packages: &[Package]) -> (Result<usize, RunError>, String) {
    let mut out = Vec::new();
    let result = runner.run(packages, &mut out).map(|report| report.written());
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_sample_batch_in_input_order() {
    let (result, output) = run_to_string(Runner::default(), &sample_packages());

    assert_eq!(result.unwrap(), 3);
    let types: Vec<&str> = output
        .lines()
        .map(|line| line.split(';').next().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            "Workout type: Swimming",
            "Workout type: Running",
            "Workout type: SportsWalking",
        ]
    );
}

#[test]
fn test_sample_batch_json() {
    let runner = Runner::new(OutputFormat::Json, FailurePolicy::Abort);
    let (result, output) = run_to_string(runner, &sample_packages());

    assert_eq!(result.unwrap(), 3);
    let summaries: Vec<Summary> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(summaries[0].training_type(), "Swimming");
    assert!((summaries[0].speed() - 1.0).abs() < 1e-9);
    assert!((summaries[1].calories() - 699.75).abs() < 1e-9);
    assert!((summaries[2].calories() - 157.5).abs() < 1e-9);
}

#[test]
fn test_sample_batch_csv() {
    let runner = Runner::new(OutputFormat::Csv, FailurePolicy::Abort);
    let (result, output) = run_to_string(runner, &sample_packages());

    assert_eq!(result.unwrap(), 3);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "Swimming,1.000,0.994,1.000,336.000");
}

#[test]
fn test_argument_count_aborts_batch() {
    let packages = vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];
    let (result, output) = run_to_string(Runner::default(), &packages);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RunError::Workout {
            index: 0,
            source: WorkoutError::ArgumentCount {
                expected: 5,
                actual: 4,
                ..
            },
            ..
        }
    ));
    assert!(err.to_string().contains("SWM"));
    assert!(output.is_empty());
}

#[test]
fn test_skip_policy_writes_valid_packages() {
    let mut packages = sample_packages();
    packages.insert(1, Package::new("BIKE", vec![1.0, 1.0, 1.0]));
    packages.push(Package::new("WLK", vec![9000.0, 1.0, 75.0, 0.0]));

    let runner = Runner::new(OutputFormat::Text, FailurePolicy::Skip);
    let mut out = Vec::new();
    let report = runner.run(&packages, &mut out).unwrap();

    assert_eq!(report.written(), 3);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(
        report.failures[0].error,
        WorkoutError::UnknownWorkoutType("BIKE".to_string())
    );
    assert_eq!(report.failures[1].error, WorkoutError::InvalidHeight(0.0));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
}
