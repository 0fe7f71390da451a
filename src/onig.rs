use crate::Error;
use onig::{MatchParam, Regex, Region, SearchOptions};

pub(crate) const ENGINE: crate::Engine = crate::Engine::Onig;

/// A compiled regex, already carrying the `(?<_n_NN>...)` aliases the
/// compiler assigned. This layer knows nothing about field paths or
/// types — that resolution happens one level up, in `grok.rs`.
#[derive(Debug)]
pub(crate) struct OnigPattern {
    regex: Regex,
}

impl OnigPattern {
    pub(crate) fn new(regex: &str) -> Result<Self, Error> {
        Regex::new(regex)
            .map(|regex| Self { regex })
            .map_err(|e| Error::RegexCompile(format!("{e:?}:\n{regex}")))
    }

    pub(crate) fn match_against<'a>(&'a self, text: &'a str) -> Option<OnigMatches<'a>> {
        // Inlined version of the onig convenience methods, which panic
        // internally on some inputs.
        let mut region = Region::new();
        let to = text.len();
        let result = self.regex.search_with_param(
            text,
            0,
            to,
            SearchOptions::SEARCH_OPTION_NONE,
            Some(&mut region),
            MatchParam::default(),
        );
        match result {
            Ok(Some(_)) => Some(OnigMatches {
                text,
                region,
                pattern: self,
            }),
            _ => None,
        }
    }
}

pub(crate) struct OnigMatches<'a> {
    text: &'a str,
    region: Region,
    pattern: &'a OnigPattern,
}

impl<'a> OnigMatches<'a> {
    pub(crate) fn get_by_alias(&self, alias: &str) -> Option<&str> {
        let mut found = None;
        self.pattern.regex.foreach_name(|name, groups| {
            if name == alias {
                found = Some(groups[0]);
                false
            } else {
                true
            }
        });
        let idx = found?;
        self.region.pos(idx as usize).map(|(start, end)| &self.text[start..end])
    }
}
