use crate::config::DrillsConfig;
use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read integers from stdin and print their max and sum
    Array {
        /// How many integers to read
        #[arg(long)]
        count: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve "hello world" on every path
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the worker pool demo
    Workers {
        #[arg(long)]
        count: Option<usize>,

        /// How long each worker sleeps, in milliseconds
        #[arg(long)]
        duration_ms: Option<u64>,

        /// Print the worker reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Greet concurrently from several tasks
    Greet {
        #[arg(default_values = ["goroutine 1", "goroutine 2", "goroutine 3"])]
        names: Vec<String>,
    },

    /// Baker/customer hand-off over a channel
    Bakery {
        #[arg(long)]
        bake_ms: Option<u64>,

        /// Channel buffer size
        #[arg(long)]
        capacity: Option<usize>,
    },

    /// Print a person's greeting
    Person {
        #[arg(long, default_value = "rupam")]
        name: String,

        #[arg(long, default_value_t = 22)]
        age: u32,
    },

    /// Data-structure drills
    Dsa {
        #[command(subcommand)]
        command: DsaCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DsaCommand {
    /// Find a target in a list of integers
    Search {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        #[arg(long, value_enum, default_value_t = SearchMethod::Binary)]
        method: SearchMethod,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort a list of numbers
    Sort {
        #[arg(long, value_enum, default_value_t = SortAlgorithm::Merge)]
        algorithm: SortAlgorithm,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Check whether two words are anagrams
    Anagram { first: String, second: String },

    /// Build a linked list and print it before and after reversal
    Reverse {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Compute the area of a shape
    Area {
        #[command(subcommand)]
        shape: ShapeCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ShapeCommand {
    Rectangle {
        #[arg(long)]
        height: f64,
        #[arg(long)]
        width: f64,
    },
    Circle {
        #[arg(long)]
        radius: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchMethod {
    Linear,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortAlgorithm {
    Selection,
    Quick,
    Merge,
}

impl Command {
    pub fn apply_overrides(&self, config: &mut DrillsConfig) {
        match self {
            Command::Array { count, .. } => {
                if let Some(count) = count {
                    config.array.count = *count;
                }
            }
            Command::Serve { host, port } => {
                if let Some(host) = host {
                    config.server.host = host.clone();
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
            }
            Command::Workers {
                count, duration_ms, ..
            } => {
                if let Some(count) = count {
                    config.workers.count = *count;
                }
                if let Some(duration_ms) = duration_ms {
                    config.workers.duration_ms = *duration_ms;
                }
            }
            Command::Bakery { bake_ms, capacity } => {
                if let Some(bake_ms) = bake_ms {
                    config.bakery.bake_ms = *bake_ms;
                }
                if let Some(capacity) = capacity {
                    config.bakery.capacity = *capacity;
                }
            }
            Command::Greet { .. } | Command::Person { .. } | Command::Dsa { .. } => {}
        }
    }
}
