use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur when registering patterns, compiling a template, or
/// loading a catalog file.
///
/// Runtime issues (no match, a type coercion that doesn't parse) are never
/// represented here — they are not errors, per the library's lenient
/// matching contract.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A `%{NAME...}` reference pointed at a name with no registered
    /// definition.
    UnknownPattern(String),
    /// Expanding a pattern definition revisited a name already on the
    /// expansion stack. Carries the full cycle, e.g. `["A", "B", "A"]`.
    RecursionDetected(Vec<String>),
    /// The template text itself was malformed: an unclosed `%{`, an illegal
    /// character inside a reference, or a type tag other than `int`,
    /// `integer`, or `float`.
    SyntaxError(String),
    /// The backing regex engine rejected the fully assembled expression.
    RegexCompile(String),
    /// A catalog file failed to parse; the load is not cached.
    PatternFile(String),
    /// After expansion, the resulting regex was empty (e.g. `compile("")`).
    CompiledPatternIsEmpty(String),
    /// The named catalog file is not known to the repository.
    UnknownPatternFile(String),
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPattern(name) => write!(
                f,
                "the pattern definition \"{name}\" could not be found in the definition map"
            ),
            Error::RecursionDetected(cycle) => {
                write!(f, "pattern expansion cycle detected: {}", cycle.join(" -> "))
            }
            Error::SyntaxError(detail) => write!(f, "malformed grok reference: {detail}"),
            Error::RegexCompile(detail) => {
                write!(f, "the assembled regex failed to compile: {detail}")
            }
            Error::PatternFile(detail) => write!(f, "failed to parse pattern file: {detail}"),
            Error::CompiledPatternIsEmpty(pattern) => write!(
                f,
                "the given pattern \"{pattern}\" ended up compiling into an empty regex"
            ),
            Error::UnknownPatternFile(name) => {
                write!(f, "no catalog file named \"{name}\" is registered")
            }
        }
    }
}
