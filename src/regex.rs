use crate::Error;
use regex::{Captures, Regex};

pub(crate) const ENGINE: crate::Engine = crate::Engine::Regex;

/// A compiled regex, already carrying the `(?<_n_NN>...)` aliases the
/// compiler assigned. This layer knows nothing about field paths or
/// types — that resolution happens one level up, in `grok.rs`.
#[derive(Debug)]
pub(crate) struct RegexPattern {
    regex: Regex,
}

impl RegexPattern {
    pub(crate) fn new(regex: &str) -> Result<Self, Error> {
        Regex::new(regex)
            .map(|regex| Self { regex })
            .map_err(|e| Error::RegexCompile(format!("{e}")))
    }

    pub(crate) fn match_against<'a>(&'a self, text: &'a str) -> Option<RegexMatches<'a>> {
        self.regex.captures(text).map(|captures| RegexMatches { captures })
    }
}

pub(crate) struct RegexMatches<'a> {
    captures: Captures<'a>,
}

impl<'a> RegexMatches<'a> {
    pub(crate) fn get_by_alias(&self, alias: &str) -> Option<&str> {
        self.captures.name(alias).map(|m| m.as_str())
    }
}
