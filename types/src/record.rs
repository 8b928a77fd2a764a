//! The person record and its demonstration behaviors.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::random::{RandomSource, ThreadRandom};

/// Draws strictly above this take the "unlucky" branch.
const BRANCH_THRESHOLD: f64 = 0.5;

pub const RISKY_SUCCESS: &str = "Success from Java";
pub const STATIC_GREETING: &str = "Hello from Java static method";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Random exception from Java")]
    GenericFailure,
}

/// A name and an age with no validation on either.
///
/// Empty names and negative ages are stored as given. Setters take `&mut self`
/// and there is no interior locking: share it across threads the way you would
/// any other plain value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    age: i32,
}

impl PersonRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// A sentence about the record, present about half the time.
    ///
    /// Callers must handle `None`; it is a normal outcome, not an error.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.description_with(&mut ThreadRandom)
    }

    /// [`Self::description`] with an explicit random source.
    #[must_use]
    pub fn description_with(&self, source: &mut impl RandomSource) -> Option<String> {
        if source.next_unit() > BRANCH_THRESHOLD {
            Some(format!("Description: {} is {} years old", self.name, self.age))
        } else {
            tracing::debug!(name = %self.name, "no description this time");
            None
        }
    }

    /// Join `parts` with single spaces, dropping trailing whitespace.
    ///
    /// Whitespace here means any char at or below U+0020, control characters
    /// included; wider Unicode spaces are kept.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn concatenate<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for part in parts {
            joined.push_str(part.as_ref());
            joined.push(' ');
        }
        let kept = joined.trim_end_matches(|c: char| c <= ' ').len();
        joined.truncate(kept);
        joined
    }

    /// Fails with [`RecordError::GenericFailure`] on roughly half of all calls.
    pub fn risky_method(&self) -> Result<String, RecordError> {
        self.risky_method_with(&mut ThreadRandom)
    }

    /// [`Self::risky_method`] with an explicit random source.
    #[allow(clippy::unused_self)]
    pub fn risky_method_with(
        &self,
        source: &mut impl RandomSource,
    ) -> Result<String, RecordError> {
        if source.next_unit() > BRANCH_THRESHOLD {
            tracing::debug!("risky method failed");
            return Err(RecordError::GenericFailure);
        }
        Ok(RISKY_SUCCESS.to_string())
    }

    #[must_use]
    pub fn static_greeting() -> &'static str {
        STATIC_GREETING
    }

    /// A new list on every call; mutating one result never affects another.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn names(&self) -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()]
    }

    /// A new map on every call; iteration order is unspecified.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn scores(&self) -> HashMap<String, i32> {
        HashMap::from([
            ("Alice".to_string(), 95),
            ("Bob".to_string(), 87),
            ("Charlie".to_string(), 92),
        ])
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonRecord{{name='{}', age={}}}", self.name, self.age)
    }
}
