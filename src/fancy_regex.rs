use crate::Error;
use fancy_regex::{Captures, Regex};

pub(crate) const ENGINE: crate::Engine = crate::Engine::FancyRegex;

/// A compiled regex, already carrying the `(?<_n_NN>...)` aliases the
/// compiler assigned. This layer knows nothing about field paths or
/// types — that resolution happens one level up, in `grok.rs`.
#[derive(Debug)]
pub(crate) struct FancyRegexPattern {
    regex: Regex,
}

impl FancyRegexPattern {
    pub(crate) fn new(regex: &str) -> Result<Self, Error> {
        Regex::new(regex)
            .map(|regex| Self { regex })
            .map_err(|e| Error::RegexCompile(format!("{e:?}:\n{regex}")))
    }

    pub(crate) fn match_against<'a>(&'a self, text: &'a str) -> Option<FancyRegexMatches<'a>> {
        self.regex
            .captures(text)
            .ok()
            .flatten()
            .map(|captures| FancyRegexMatches { captures })
    }
}

pub(crate) struct FancyRegexMatches<'a> {
    captures: Captures<'a>,
}

impl<'a> FancyRegexMatches<'a> {
    pub(crate) fn get_by_alias(&self, alias: &str) -> Option<&str> {
        self.captures.name(alias).map(|m| m.as_str())
    }
}
