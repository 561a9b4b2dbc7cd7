//! Command-line configuration of the analysis binary

use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// File the CSV result line is appended to
pub const DEFAULT_ANALYSIS_FILE: &str = "analysis.txt";

/// Environment variable overriding [`DEFAULT_ANALYSIS_FILE`]
pub const ANALYSIS_FILE_ENV: &str = "CHAINSET_ANALYSIS_FILE";

/// Usage line printed on bad arguments
pub const USAGE: &str = "Usage: chainset_analysis <input file> <number of lines> [--plot <png file>]";

/// Invalid command line
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Wrong number or shape of arguments
    #[error("{}", USAGE)]
    Usage,
    /// The line count is not a 32-bit integer
    #[error("invalid number of lines {value:?}: {source}")]
    InvalidLineCount {
        /// Argument as given
        value: String,
        /// Parse failure
        source: ParseIntError,
    },
}

/// Settings of one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Dataset to read
    pub input: PathBuf,
    /// Maximum number of records to read
    pub lines: usize,
    /// File the CSV result line is appended to
    pub analysis_file: PathBuf,
    /// Where to render a timing chart, if anywhere
    pub plot: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Parses the arguments that follow the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the arguments do not match [`USAGE`].
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let (input, lines, plot) = match args.as_slice() {
            [input, lines] => (input, lines, None),
            [input, lines, flag, plot] if flag == "--plot" => (input, lines, Some(plot)),
            _ => return Err(ConfigError::Usage),
        };

        // a negative count reads nothing
        let lines = lines
            .parse::<i32>()
            .map(|count| usize::try_from(count).unwrap_or(0))
            .map_err(|source| ConfigError::InvalidLineCount { value: lines.clone(), source })?;

        Ok(Self {
            input: PathBuf::from(input),
            lines,
            analysis_file: PathBuf::from(DEFAULT_ANALYSIS_FILE),
            plot: plot.map(PathBuf::from),
        })
    }

    /// Replaces the analysis file with `path` when one is given
    #[must_use]
    pub fn with_analysis_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.analysis_file = path;
        }
        self
    }
}
