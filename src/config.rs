use std::path::PathBuf;

use log::LevelFilter;

/// Settings for an interactive benchmarking run
#[derive(Clone, Debug)]
pub struct Config {
    input: Option<PathBuf>,
    seed: Option<u64>,
    log_level: LevelFilter,
}

impl Config {
    /// Create a default Config.
    ///
    /// * no input file, the session asks for one
    /// * no seed, random choices are seeded from system entropy
    /// * log level is Warn
    pub fn new() -> Config {
        Config {
            input: None,
            seed: None,
            log_level: LevelFilter::Warn,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Config {
        self.input = Some(input);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Config {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_level(mut self, log_level: LevelFilter) -> Config {
        self.log_level = log_level;
        self
    }

    pub fn input(&self) -> &Option<PathBuf> {
        &self.input
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
