//! Caller-side contract of the person record

use std::collections::HashMap;

use interop_types::{PersonRecord, RecordError};

use crate::common::{RATIO_BOUNDS, TRIALS, ann};

#[test]
fn round_trip_for_assorted_inputs() {
    for (name, age) in [("Ann", 30), ("", 0), ("Zoë", -12), ("a b c", i32::MAX), ("x", i32::MIN)] {
        let record = PersonRecord::new(name, age);
        assert_eq!(record.name(), name);
        assert_eq!(record.age(), age);
    }
}

#[test]
fn display_after_mutation() {
    let mut record = ann();
    record.set_age(31);
    assert_eq!(record.to_string(), "PersonRecord{name='Ann', age=31}");

    record.set_name("Bo");
    assert_eq!(format!("{record}"), "PersonRecord{name='Bo', age=31}");
}

#[test]
fn description_split_is_roughly_even() {
    let record = PersonRecord::new("Cy", 44);
    let mut absent = 0_u32;
    for _ in 0..TRIALS {
        match record.description() {
            Some(text) => {
                assert!(text.contains("Cy"), "missing name: {text}");
                assert!(text.contains("44"), "missing age: {text}");
                assert_eq!(text, "Description: Cy is 44 years old");
            }
            None => absent += 1,
        }
    }
    let ratio = f64::from(absent) / f64::from(TRIALS);
    assert!(RATIO_BOUNDS.contains(&ratio), "absent ratio {ratio}");
}

#[test]
fn risky_method_split_is_roughly_even() {
    let record = ann();
    let mut failures = 0_u32;
    for _ in 0..TRIALS {
        match record.risky_method() {
            Ok(message) => assert_eq!(message, "Success from Java"),
            Err(err) => {
                assert_eq!(err, RecordError::GenericFailure);
                assert_eq!(err.to_string(), "Random exception from Java");
                failures += 1;
            }
        }
    }
    let ratio = f64::from(failures) / f64::from(TRIALS);
    assert!(RATIO_BOUNDS.contains(&ratio), "failure ratio {ratio}");
}

#[test]
fn risky_failure_propagates_with_question_mark() {
    fn call_until_failure(record: &PersonRecord) -> Result<(), RecordError> {
        loop {
            record.risky_method()?;
        }
    }

    let err = call_until_failure(&ann()).unwrap_err();
    assert_eq!(err.to_string(), "Random exception from Java");
}

#[test]
fn static_greeting_needs_no_instance() {
    let greetings: Vec<&str> = (0..100).map(|_| PersonRecord::static_greeting()).collect();
    assert!(greetings.iter().all(|g| *g == "Hello from Java static method"));
}

#[test]
fn collections_are_owned_by_the_caller() {
    let record = ann();

    let mut names = record.names();
    names.clear();
    assert_eq!(record.names(), ["Alice", "Bob", "Charlie"]);

    let mut scores = record.scores();
    scores.insert("Dave".to_string(), 1);
    let expected: HashMap<String, i32> = [("Alice", 95), ("Bob", 87), ("Charlie", 92)]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect();
    assert_eq!(record.scores(), expected);
}

#[test]
fn concatenate_cases() {
    let record = ann();
    assert_eq!(record.concatenate(Vec::<String>::new()), "");
    assert_eq!(record.concatenate(["a", "b", "c"]), "a b c");
    assert_eq!(record.concatenate(["x"]), "x");
}

#[test]
fn json_shape_for_foreign_callers() {
    let record = PersonRecord::new("Ann", 30);
    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(text, r#"{"name":"Ann","age":30}"#);
}
