//! Run configuration built once by the caller and passed into [`crate::run`].

use std::path::PathBuf;

/// Local changelog read when no source is given.
pub const DEFAULT_INPUT_FILE: &str = "changelog.md";

/// Report destination used when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Published UK sector file changelog.
pub const DEFAULT_CHANGELOG_URL: &str =
    "https://raw.githubusercontent.com/VATSIM-UK/UK-Sector-File/main/.github/CHANGELOG.md";

/// Where the changelog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Default for Source {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_INPUT_FILE))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Where the report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

impl Default for Output {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "stdout"),
        }
    }
}

/// Settings for a single sorting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub output: Output,
}

impl Config {
    /// Resolves the source from the optional input path and URL flags.
    ///
    /// An explicit input file always wins. Otherwise a URL is fetched when
    /// one was requested, falling back to [`DEFAULT_INPUT_FILE`].
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use airac_sorter_lib::{Config, Output, Source};
    ///
    /// let config = Config::resolve(None, Some("https://example.com/c.md".into()), Output::Stdout);
    /// assert_eq!(config.source, Source::Url("https://example.com/c.md".into()));
    ///
    /// let config = Config::resolve(
    ///     Some(PathBuf::from("local.md")),
    ///     Some("https://example.com/c.md".into()),
    ///     Output::Stdout,
    /// );
    /// assert_eq!(config.source, Source::File(PathBuf::from("local.md")));
    /// ```
    pub fn resolve(input: Option<PathBuf>, url: Option<String>, output: Output) -> Self {
        let source = match (input, url) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            (None, None) => Source::default(),
        };

        Self { source, output }
    }
}
