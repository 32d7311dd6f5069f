//! Unit tests for summaries built from sensor packages.

use fittrack::read_package;
use fittrack::{Summary, WorkoutError};

fn summarize(code: &str, data: &[f64]) -> Summary {
    read_package(code, data).unwrap().show_training_info()
}

#[test]
fn test_swimming_summary() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);

    assert_eq!(summary.training_type(), "Swimming");
    assert_eq!(
        summary.render(),
        "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Avg speed: 1.000 km/h; Calories: 336.000."
    );
}

#[test]
fn test_running_summary() {
    let summary = summarize("RUN", &[15000.0, 1.0, 75.0]);

    assert_eq!(
        summary.render(),
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Avg speed: 9.750 km/h; Calories: 699.750."
    );
}

#[test]
fn test_walking_summary() {
    let summary = summarize("WLK", &[9000.0, 1.0, 75.0, 180.0]);

    assert_eq!(
        summary.render(),
        "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
         Avg speed: 5.850 km/h; Calories: 157.500."
    );
}

#[test]
fn test_every_number_has_three_decimals() {
    let summary = summarize("RUN", &[12345.0, 0.37, 81.2]);
    let line = summary.render();

    let numbers: Vec<&str> = line
        .split(|c: char| c == ' ' || c == ';')
        .filter(|token| token.contains('.') && token.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .map(|token| token.trim_end_matches('.'))
        .collect();

    assert_eq!(numbers.len(), 4, "line: {}", line);
    for number in numbers {
        let decimals = number.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 3, "number {} in {}", number, line);
    }
}

#[test]
fn test_zero_duration_is_detected() {
    for (code, data) in [
        ("RUN", vec![15000.0, 0.0, 75.0]),
        ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        let err = read_package(code, &data).unwrap_err();
        assert_eq!(err, WorkoutError::InvalidDuration(0.0), "code {}", code);
    }
}

#[test]
fn test_unknown_code_is_distinct_outcome() {
    let result = read_package("XYZ", &[1.0, 1.0, 1.0]);
    assert!(matches!(result, Err(WorkoutError::UnknownWorkoutType(ref code)) if code == "XYZ"));
}
