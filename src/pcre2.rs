use crate::Error;
use pcre2::bytes::{Captures, Regex, RegexBuilder};

pub(crate) const ENGINE: crate::Engine = crate::Engine::Pcre2;

/// A compiled regex, already carrying the `(?<_n_NN>...)` aliases the
/// compiler assigned. This layer knows nothing about field paths or
/// types — that resolution happens one level up, in `grok.rs`.
#[derive(Debug)]
pub(crate) struct Pcre2Pattern {
    regex: Regex,
}

impl Pcre2Pattern {
    pub(crate) fn new(regex: &str) -> Result<Self, Error> {
        let mut builder = RegexBuilder::new();
        builder.jit_if_available(true);
        builder.utf(true);
        builder
            .build(regex)
            .map(|regex| Self { regex })
            .map_err(|e| Error::RegexCompile(format!("{e:?}:\n{regex}")))
    }

    pub(crate) fn match_against<'a>(&'a self, text: &'a str) -> Option<Pcre2Matches<'a>> {
        self.regex
            .captures(text.as_bytes())
            .ok()
            .flatten()
            .map(|captures| Pcre2Matches { captures })
    }
}

pub(crate) struct Pcre2Matches<'a> {
    captures: Captures<'a>,
}

impl<'a> Pcre2Matches<'a> {
    pub(crate) fn get_by_alias(&self, alias: &str) -> Option<&str> {
        self.captures
            .name(alias)
            .map(|m| std::str::from_utf8(m.as_bytes()).unwrap())
    }
}
