use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of the array exercise: the values read plus their max and sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayReport {
    pub values: Vec<i64>,
    pub max: i64,
    pub sum: i64,
}

/// One finished worker, with wall-clock start and finish times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerReport {
    pub id: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl WorkerReport {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn greeting(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old",
            self.name, self.age
        )
    }
}
