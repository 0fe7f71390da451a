//! The compiled pattern type and its match handle (spec §4.F–§4.J / §6.F).

use std::collections::{BTreeMap, HashMap};

use crate::compiler::{CoercionMode, InnerMatches, InnerPattern};
use crate::matcher::{build_capture, Capture, FieldEntry};

/// A template compiled against a fixed snapshot of its compiler's
/// definitions, renaming setting, and coercion mode. A `Grok` never
/// observes later mutation of the `GrokCompiler` that produced it —
/// `register`-ing a new pattern, or flipping a setting, only affects
/// templates compiled afterwards.
pub struct Grok {
    inner: InnerPattern,
    aliases: HashMap<String, FieldEntry>,
    alias_order: Vec<String>,
    field_order: Vec<String>,
    source: String,
    definitions: BTreeMap<String, String>,
    coercion_mode: CoercionMode,
}

impl Grok {
    pub(crate) fn new(
        inner: InnerPattern,
        aliases: HashMap<String, FieldEntry>,
        alias_order: Vec<String>,
        field_order: Vec<String>,
        source: String,
        definitions: BTreeMap<String, String>,
        coercion_mode: CoercionMode,
    ) -> Self {
        Self {
            inner,
            aliases,
            alias_order,
            field_order,
            source,
            definitions,
            coercion_mode,
        }
    }

    /// The template text this `Grok` was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiler's pattern definitions at the time this `Grok` was
    /// compiled.
    pub fn pattern_definitions(&self) -> &BTreeMap<String, String> {
        &self.definitions
    }

    /// Every distinct field path this pattern can produce, in the order
    /// each first appears in the template.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.field_order.iter().map(|s| s.as_str())
    }

    /// Matches `text` against this pattern. Never fails: a non-match is
    /// represented by an empty [`Match`], not `None` or an error.
    pub fn match_against<'a>(&'a self, text: &'a str) -> Match<'a> {
        Match {
            raw: self.inner.match_against(text),
            pattern: self,
        }
    }

    /// Convenience for `self.match_against(text).capture()`.
    pub fn capture(&self, text: &str) -> Capture {
        self.match_against(text).capture()
    }
}

impl std::fmt::Debug for Grok {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grok")
            .field("source", &self.source)
            .field("capture_names", &self.field_order)
            .finish()
    }
}

/// A handle to the raw outcome of matching a `Grok` against one string.
///
/// `get`/`iter` give un-coerced, un-merged access to every alias that
/// participated — several aliases can share a field path (when a template
/// alternates between equivalent sub-patterns that both feed the same
/// field), so the same field may appear more than once here. [`Match::capture`]
/// resolves that down to one value per field.
pub struct Match<'a> {
    raw: Option<InnerMatches<'a>>,
    pattern: &'a Grok,
}

impl<'a> Match<'a> {
    /// Returns the text of the first alias belonging to `field`, if any
    /// alias for it matched.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.raw_hits().find(|(f, _)| *f == field).map(|(_, text)| text)
    }

    /// Every `(field_path, text)` pair that matched, in group order,
    /// without merging duplicate field paths into a list.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.raw_hits()
    }

    pub fn len(&self) -> usize {
        self.raw_hits().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_none() || self.len() == 0
    }

    /// The pattern that produced this match.
    pub fn pattern(&self) -> &'a Grok {
        self.pattern
    }

    /// Resolves this match into field-path -> value pairs: one entry per
    /// distinct field, fields that didn't fire inside an otherwise-successful
    /// match as `Value::Null`, repeated fields merged into a `Value::List`,
    /// typed references coerced leniently. A total non-match (the regex
    /// never matched `text` at all) yields an empty `Capture`, not a
    /// `Null`-filled one.
    pub fn capture(&self) -> Capture {
        let Some(raw) = &self.raw else {
            return Capture::new(Vec::new());
        };
        let hits = self
            .pattern
            .alias_order
            .iter()
            .filter_map(|alias| raw.get_by_alias(alias).map(|text| (alias.as_str(), text)));
        build_capture(hits, &self.pattern.aliases, &self.pattern.field_order, self.pattern.coercion_mode)
    }

    fn raw_hits(&self) -> impl Iterator<Item = (&str, &str)> {
        let pattern = self.pattern;
        let raw = self.raw.as_ref();
        pattern.alias_order.iter().filter_map(move |alias| {
            let text = raw?.get_by_alias(alias)?;
            let field = pattern.aliases.get(alias)?.field_path.as_str();
            Some((field, text))
        })
    }
}

impl<'a> std::fmt::Debug for Match<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
