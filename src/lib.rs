//! Compiles `%{NAME:field:type}` log-line templates into named-capture
//! regexes backed by a reusable, categorized pattern catalog.
//!
//! ```
//! use grokit::GrokCompiler;
//!
//! let compiler = GrokCompiler::with_default_patterns();
//! let grok = compiler.compile("%{NUMBER:duration:float} %{WORD:status}").unwrap();
//! let capture = grok.capture("3.44 OK");
//! assert_eq!(capture.get("duration").unwrap().as_f64(), Some(3.44));
//! assert_eq!(capture.get("status").unwrap().as_str(), Some("OK"));
//! ```

mod catalog;
mod compiler;
mod error;
mod grok;
mod matcher;
mod pattern_file;
mod pattern_parser;
mod repository;
mod source;

#[cfg(feature = "fancy-regex")]
mod fancy_regex;
#[cfg(feature = "onig")]
mod onig;
#[cfg(feature = "pcre2")]
mod pcre2;
#[cfg(feature = "regex")]
mod regex;

#[cfg(all(
    not(feature = "onig"),
    not(feature = "fancy-regex"),
    not(feature = "regex"),
    not(feature = "pcre2")
))]
compile_error!("No regex engine selected. Please enable one of the following features: fancy-regex, onig, regex, pcre2");

// Enable features in the following preferred order. If multiple features are
// enabled, the first one in the list is used.
//
// 0. pcre2
// 1. fancy-regex
// 2. onig
// 3. regex
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(unused)]
pub(crate) enum Engine {
    Pcre2,
    FancyRegex,
    Onig,
    Regex,
}

pub use crate::catalog::{Category, CatalogFile};
pub use crate::compiler::{CoercionMode, GrokCompiler};
pub use crate::error::Error;
pub use crate::grok::{Grok, Match};
pub use crate::matcher::{Capture, TypeTag, Value};
pub use crate::repository::{default_repository, PatternRepository};
pub use crate::source::{EmbeddedPatternSource, InMemoryPatternSource, PatternSource};

/// The hand-rolled tokenizer over the `%{NAME:field:type}` reference
/// grammar, exposed for callers that want to inspect a template without
/// compiling it.
///
/// This API is currently unstable and may be subject to change.
pub mod parser {
    pub use crate::pattern_parser::*;
}

/// Returns the catalog entries bundled with this crate.
pub fn catalog() -> &'static [CatalogFile] {
    catalog::CATALOG
}
