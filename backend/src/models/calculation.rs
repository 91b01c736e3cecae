//! Calculation records and the set of supported operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

crate::define_id_type!(i64, CalculationId);

/// One of the four supported binary operations.
///
/// The lowercase name is used both on the wire and in the `operation` column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// A persisted arithmetic computation.
///
/// Records are immutable once stored; the only lifecycle transition after
/// creation is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: CalculationId,
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    /// Native `f64` result. An overflow is stored as infinity and serialized
    /// as JSON `null`.
    pub result: f64,
    pub created_at: DateTime<Utc>,
}

/// A computed result waiting to be stored. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewCalculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

impl NewCalculation {
    pub fn new(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self {
            operation,
            a,
            b,
            result,
        }
    }

    /// Attach store-assigned identity and timestamp.
    pub fn into_calculation(self, id: CalculationId, created_at: DateTime<Utc>) -> Calculation {
        Calculation {
            id,
            operation: self.operation,
            a: self.a,
            b: self.b,
            result: self.result,
            created_at,
        }
    }
}
