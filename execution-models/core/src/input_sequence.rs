// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DispatchError;
use serde::{Deserialize, Serialize};

/// Ordered, immutable, non-empty list of values a task averages.
///
/// Emptiness is rejected at construction (and on deserialization), so every
/// holder can divide by `len()` without checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct InputSequence {
    values: Vec<i64>,
}

impl InputSequence {
    pub fn new(values: Vec<i64>) -> Result<Self, DispatchError> {
        if values.is_empty() {
            return Err(DispatchError::EmptyInput);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The three fixed samples every dispatcher runs against.
    pub fn samples() -> Vec<InputSequence> {
        vec![
            Self { values: (1..=10).collect() },
            Self { values: vec![2, 4, 6, 8, 10] },
            Self { values: vec![1, 3, 5, 7, 9, 11] },
        ]
    }
}

impl TryFrom<Vec<i64>> for InputSequence {
    type Error = DispatchError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<InputSequence> for Vec<i64> {
    fn from(sequence: InputSequence) -> Self {
        sequence.values
    }
}
