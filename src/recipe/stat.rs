use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A numeric output-stat value, compared exactly.
///
/// Stat revisions are authored data, not measurements, so equality is
/// epsilon-free: any delta between two snapshots is a real change and must be
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatValue(pub f64);

// Manual implementation to handle f64
impl Eq for StatValue {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for StatValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue(value)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
