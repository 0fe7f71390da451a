//! Expands a template into a named-capture regex and compiles it with the
//! selected backend (spec §4.D–§4.F / §6.D).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::error::Error;
use crate::grok::Grok;
use crate::matcher::{FieldEntry, TypeTag};
use crate::pattern_parser::{grok_split, GrokComponent};
use crate::repository::PatternRepository;
use crate::Engine;

#[cfg(feature = "pcre2")]
pub(crate) use crate::pcre2::{Pcre2Matches as InnerMatches, Pcre2Pattern as InnerPattern, ENGINE};

#[cfg(all(not(feature = "pcre2"), feature = "fancy-regex"))]
pub(crate) use crate::fancy_regex::{
    FancyRegexMatches as InnerMatches, FancyRegexPattern as InnerPattern, ENGINE,
};

#[cfg(all(not(feature = "pcre2"), not(feature = "fancy-regex"), feature = "onig"))]
pub(crate) use crate::onig::{OnigMatches as InnerMatches, OnigPattern as InnerPattern, ENGINE};

#[cfg(all(
    not(feature = "pcre2"),
    not(feature = "fancy-regex"),
    not(feature = "onig"),
    feature = "regex"
))]
pub(crate) use crate::regex::{RegexMatches as InnerMatches, RegexPattern as InnerPattern, ENGINE};

const MAX_RECURSION: usize = 1024;

/// How a type-tagged reference behaves when the captured text fails to
/// parse as that type.
///
/// Only `Lenient` is actually enforced: a failed parse always falls back to
/// the raw string, since runtime matching is never allowed to fail. `Strict`
/// is kept for API completeness and future use — it currently only changes
/// whether the fallback is logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoercionMode {
    #[default]
    Lenient,
    Strict,
}

/// Renames a handful of field names that collide with conventions used by
/// common log shippers, so a user's `%{...}` references never silently
/// clobber a reserved key. Renaming is a pure function of the name: it is
/// applied once, at alias-recording time, never at capture time, and is
/// idempotent (`rename_reserved(rename_reserved(x)) == rename_reserved(x)`).
fn rename_reserved(field_path: &str) -> &str {
    match field_path {
        "timestamp" => "log_timestamp",
        "time" => "log_time",
        "message" => "log_message",
        "content" => "log_content",
        "category" => "log_category",
        "pcode" => "log_pcode",
        "logContent" => "log_body",
        other => other,
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    template: String,
    reserved_keyword_renaming: bool,
    expose_anonymous_captures: bool,
    definitions_fingerprint: u64,
}

fn fingerprint(patterns: &BTreeMap<Cow<'static, str>, Cow<'static, str>>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for (k, v) in patterns {
        k.hash(&mut hasher);
        v.hash(&mut hasher);
    }
    hasher.finish()
}

/// The compiler: an accumulating registry of named pattern definitions plus
/// the knobs (reserved-keyword renaming, anonymous captures, coercion mode)
/// that a compiled [`Grok`] snapshots at `compile` time.
///
/// Compiling the same template against an unchanged definition set and
/// unchanged knobs is cached; the cache is never evicted automatically, so
/// long-lived compilers that `register` many one-off templates should call
/// [`GrokCompiler::clear_cache`] periodically.
pub struct GrokCompiler {
    #[allow(unused)]
    engine: Engine,
    patterns: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
    repository: Arc<PatternRepository>,
    reserved_keyword_renaming: bool,
    expose_anonymous_captures: bool,
    coercion_mode: CoercionMode,
    cache: RwLock<HashMap<CacheKey, Arc<Grok>>>,
}

impl GrokCompiler {
    /// A compiler with no registered patterns and no definition source
    /// other than `register`/`register_patterns`.
    pub fn empty() -> Self {
        Self {
            engine: ENGINE,
            patterns: BTreeMap::new(),
            repository: Arc::new(PatternRepository::new()),
            reserved_keyword_renaming: true,
            expose_anonymous_captures: false,
            coercion_mode: CoercionMode::Lenient,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A compiler pre-loaded with the base `patterns` catalog file.
    pub fn with_default_patterns() -> Self {
        let mut compiler = Self::empty();
        compiler
            .register_default_patterns()
            .expect("the bundled base catalog file must parse");
        compiler
    }

    /// A compiler pre-loaded with every bundled catalog file.
    pub fn with_all_patterns() -> Self {
        let mut compiler = Self::empty();
        compiler
            .register_all_patterns()
            .expect("the bundled catalog must parse");
        compiler
    }

    /// Builds a compiler backed by a specific repository, useful for tests
    /// or callers shipping their own catalog.
    pub fn with_repository(repository: Arc<PatternRepository>) -> Self {
        Self {
            repository,
            ..Self::empty()
        }
    }

    /// Registers (or overwrites) a single named pattern definition.
    pub fn register(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.patterns.insert(Cow::Owned(name.into()), Cow::Owned(body.into()));
    }

    /// Loads every definition from the named catalog file into the
    /// compiler's pattern map, overwriting any existing definitions with
    /// the same name.
    pub fn register_patterns(&mut self, file_name: &str) -> Result<(), Error> {
        let definitions = self.repository.load_patterns(file_name)?;
        for (name, body) in definitions.iter() {
            self.patterns.insert(Cow::Owned(name.clone()), Cow::Owned(body.clone()));
        }
        Ok(())
    }

    /// Loads the base `patterns` catalog file.
    pub fn register_default_patterns(&mut self) -> Result<(), Error> {
        self.register_patterns("patterns")
    }

    /// Loads every bundled catalog file.
    pub fn register_all_patterns(&mut self) -> Result<(), Error> {
        for entry in crate::catalog::CATALOG {
            self.register_patterns(entry.file_name)?;
        }
        Ok(())
    }

    /// Enables or disables renaming of reserved field names (on by default).
    pub fn set_reserved_keyword_renaming(&mut self, enabled: bool) -> &mut Self {
        self.reserved_keyword_renaming = enabled;
        self
    }

    /// Enables or disables capturing references with no field path (off by
    /// default): when off, `%{NAME}` without a `:field` is matched but not
    /// captured, and compiles to a non-capturing group.
    pub fn set_expose_anonymous_captures(&mut self, enabled: bool) -> &mut Self {
        self.expose_anonymous_captures = enabled;
        self
    }

    pub fn set_coercion_mode(&mut self, mode: CoercionMode) -> &mut Self {
        self.coercion_mode = mode;
        self
    }

    /// A snapshot of every currently registered definition.
    pub fn pattern_definitions(&self) -> BTreeMap<String, String> {
        self.patterns.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    /// Drops every cached compiled pattern. Compiled `Grok` instances
    /// already handed out are unaffected.
    pub fn clear_cache(&self) {
        self.cache.write().unwrap().clear();
    }

    /// Compiles `template`, reusing a cached result if one exists for this
    /// exact template, renaming setting, and definition set.
    pub fn compile(&self, template: &str) -> Result<Arc<Grok>, Error> {
        let key = CacheKey {
            template: template.to_string(),
            reserved_keyword_renaming: self.reserved_keyword_renaming,
            expose_anonymous_captures: self.expose_anonymous_captures,
            definitions_fingerprint: fingerprint(&self.patterns),
        };
        if let Some(hit) = self.cache.read().unwrap().get(&key) {
            return Ok(hit.clone());
        }

        let (regex_str, aliases, alias_order) = self.compile_regex(template)?;
        if regex_str.is_empty() {
            return Err(Error::CompiledPatternIsEmpty(template.to_string()));
        }
        let inner = InnerPattern::new(&regex_str)?;
        let field_order = dedup_field_order(&alias_order, &aliases);
        let grok = Arc::new(Grok::new(
            inner,
            aliases,
            alias_order,
            field_order,
            template.to_string(),
            self.pattern_definitions(),
            self.coercion_mode,
        ));

        let mut cache = self.cache.write().unwrap();
        let entry = cache.entry(key).or_insert(grok);
        Ok(entry.clone())
    }

    /// Non-recursive depth-first expansion of `template` into a single
    /// named-capture regex, an alias table, and the first-appearance order
    /// of the aliases. Cycle detection walks an explicit "currently
    /// expanding" stack rather than relying solely on a recursion-depth
    /// backstop, so a detected cycle reports the exact chain of names
    /// involved.
    fn compile_regex<'s>(
        &'s self,
        template: &'s str,
    ) -> Result<(String, HashMap<String, FieldEntry>, Vec<String>), Error> {
        let mut named_regex = String::with_capacity(template.len() * 4);
        let mut aliases: HashMap<String, FieldEntry> = HashMap::new();
        let mut alias_order: Vec<String> = Vec::new();
        let mut visiting: Vec<String> = Vec::new();
        let mut counter = 0usize;

        let mut stack = Vec::with_capacity(16);
        stack.push((grok_split(template), None));

        while let Some((mut it, frame_name)) = stack.pop() {
            if let Some(component) = it.next() {
                stack.push((it, frame_name));
                match component {
                    GrokComponent::GrokPattern { name, field, type_tag, .. } => {
                        if let Some(start) = visiting.iter().position(|n| n == name) {
                            let mut cycle = visiting[start..].to_vec();
                            cycle.push(name.to_string());
                            return Err(Error::RecursionDetected(cycle));
                        }
                        let body: &str = self
                            .patterns
                            .get(name)
                            .ok_or_else(|| Error::UnknownPattern(name.to_string()))?
                            .as_ref();

                        visiting.push(name.to_string());
                        stack.push((grok_split(body), Some(name.to_string())));

                        if field.is_empty() && !self.expose_anonymous_captures {
                            named_regex.push_str("(?:");
                        } else {
                            let alias = format!("_n_{counter}");
                            counter += 1;

                            let field_path = if field.is_empty() { name } else { field };
                            let field_path = if self.reserved_keyword_renaming {
                                rename_reserved(field_path)
                            } else {
                                field_path
                            };

                            let type_tag = if type_tag.is_empty() {
                                None
                            } else {
                                match TypeTag::parse(type_tag) {
                                    Some(tag) => Some(tag),
                                    None => {
                                        return Err(Error::SyntaxError(format!(
                                            "unsupported type \"{type_tag}\" in %{{{name}:{field}:{type_tag}}}"
                                        )))
                                    }
                                }
                            };

                            alias_order.push(alias.clone());
                            aliases.insert(
                                alias.clone(),
                                FieldEntry {
                                    field_path: field_path.to_string(),
                                    type_tag,
                                },
                            );

                            named_regex.push_str("(?<");
                            named_regex.push_str(&alias);
                            named_regex.push('>');
                        }
                    }
                    GrokComponent::RegularExpression { string, .. } => named_regex.push_str(string),
                    GrokComponent::PatternError(e) => {
                        return Err(Error::SyntaxError(format!("{e:?}")));
                    }
                }
            } else {
                named_regex.push(')');
                if let Some(name) = frame_name {
                    debug_assert_eq!(visiting.last(), Some(&name));
                    visiting.pop();
                }
            }

            if stack.len() > MAX_RECURSION {
                let mut cycle = visiting.clone();
                cycle.push("...".to_string());
                return Err(Error::RecursionDetected(cycle));
            }
        }

        named_regex.pop();
        Ok((named_regex, aliases, alias_order))
    }
}

fn dedup_field_order(alias_order: &[String], aliases: &HashMap<String, FieldEntry>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut order = Vec::new();
    for alias in alias_order {
        if let Some(entry) = aliases.get(alias) {
            if seen.insert(entry.field_path.clone()) {
                order.push(entry.field_path.clone());
            }
        }
    }
    order
}

impl Default for GrokCompiler {
    fn default() -> Self {
        Self::with_default_patterns()
    }
}
