//! Group resolution and capture building (spec §4.G): resolves compiler
//! aliases back to user-visible field paths, folds duplicate matches into
//! lists, and applies lenient type coercion.

use std::collections::HashMap;

use crate::compiler::CoercionMode;

/// The type tag attached to a `%{NAME:field:type}` reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    Float,
}

impl TypeTag {
    /// Parses a type tag token, returning `None` for anything other than
    /// `int`, `integer`, or `float` — the caller turns that into a
    /// compile-time `SyntaxError`.
    pub(crate) fn parse(tag: &str) -> Option<TypeTag> {
        match tag {
            "int" | "integer" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            _ => None,
        }
    }
}

/// What a single compiler-generated alias resolves to.
#[derive(Clone, Debug)]
pub(crate) struct FieldEntry {
    pub field_path: String,
    pub type_tag: Option<TypeTag>,
}

/// A captured value. Lists only ever contain `Str`, `Int`, or `Float`
/// elements — an element can't itself be absent, since it only exists
/// because some alternation branch actually matched.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    List(Vec<Value>),
}

impl Value {
    /// Returns the value as a string slice if it is a scalar string, or
    /// `None` for every other variant (including lists).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// An insertion-ordered field path -> value mapping produced by a
/// successful (or unsuccessful — then empty) match.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    entries: Vec<(String, Value)>,
}

impl Capture {
    pub(crate) fn new(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a Capture {
    type Item = (&'a str, &'a Value);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

fn coerce(raw: &str, type_tag: Option<TypeTag>, mode: CoercionMode) -> Value {
    match type_tag {
        None => Value::Str(raw.to_string()),
        Some(TypeTag::Int) => match raw.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => {
                if mode == CoercionMode::Strict {
                    log::debug!("strict coercion requested but not enforced: \"{raw}\" is not a valid int");
                }
                Value::Str(raw.to_string())
            }
        },
        Some(TypeTag::Float) => match raw.parse::<f64>() {
            Ok(n) => Value::Float(n),
            Err(_) => {
                if mode == CoercionMode::Strict {
                    log::debug!("strict coercion requested but not enforced: \"{raw}\" is not a valid float");
                }
                Value::Str(raw.to_string())
            }
        },
    }
}

/// Builds the resolved `Capture` for one *successful* match. Callers must
/// short-circuit to an empty `Capture` themselves on a total non-match —
/// this function has no way to tell "the regex never matched" from "it
/// matched, but this field's branch didn't fire", so every field in
/// `field_order` always gets an entry here, `Value::Null` when nothing hit.
///
/// `hits` yields every alias that actually participated in the match, in
/// the compiled regex's group order, together with its captured text.
/// `aliases` maps every alias the template declared to its field path and
/// type tag; `field_order` is the first-appearance order of distinct field
/// paths, which drives both iteration order and which fields are null
/// vs. merged into a list vs. scalar.
pub(crate) fn build_capture<'a>(
    hits: impl Iterator<Item = (&'a str, &'a str)>,
    aliases: &HashMap<String, FieldEntry>,
    field_order: &[String],
    mode: CoercionMode,
) -> Capture {
    let mut per_field: HashMap<&str, Vec<&str>> = HashMap::new();
    for (alias, text) in hits {
        if let Some(entry) = aliases.get(alias) {
            per_field.entry(entry.field_path.as_str()).or_default().push(text);
        }
    }

    let mut type_by_field: HashMap<&str, Option<TypeTag>> = HashMap::new();
    for entry in aliases.values() {
        type_by_field.insert(entry.field_path.as_str(), entry.type_tag);
    }

    let mut entries = Vec::with_capacity(field_order.len());
    for field in field_order {
        let type_tag = type_by_field.get(field.as_str()).copied().flatten();
        let value = match per_field.get(field.as_str()) {
            None => Value::Null,
            Some(hits) if hits.len() == 1 => coerce(hits[0], type_tag, mode),
            Some(hits) => Value::List(hits.iter().map(|h| coerce(h, type_tag, mode)).collect()),
        };
        entries.push((field.clone(), value));
    }
    Capture::new(entries)
}
