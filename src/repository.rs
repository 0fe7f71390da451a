//! Lazily loads, caches, categorizes, and searches the bundled pattern
//! catalog (spec §4.C / §6.E).

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, RwLock};

use crate::catalog::{self, CatalogFile};
use crate::error::Error;
use crate::pattern_file::parse_pattern_file;
use crate::source::{EmbeddedPatternSource, PatternSource};

/// Loader/cache over the bundled catalog. Safe for concurrent readers;
/// population of the per-file cache is first-write-wins.
pub struct PatternRepository {
    source: Box<dyn PatternSource>,
    cache: RwLock<HashMap<String, Arc<BTreeMap<String, String>>>>,
}

impl PatternRepository {
    /// Builds a repository backed by the bundled, build-time-embedded
    /// catalog.
    pub fn new() -> Self {
        Self::with_source(Box::new(EmbeddedPatternSource))
    }

    /// Builds a repository backed by a caller-supplied source. Useful in
    /// tests to observe load counts or to swap in a smaller catalog.
    pub fn with_source(source: Box<dyn PatternSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loads (if needed) and returns the parsed definitions for `file_name`.
    /// Subsequent calls for the same file return the cached map without
    /// reading or reparsing the source.
    pub fn load_patterns(&self, file_name: &str) -> Result<Arc<BTreeMap<String, String>>, Error> {
        if let Some(cached) = self.cache.read().unwrap().get(file_name) {
            return Ok(cached.clone());
        }

        let text = self.source.open(file_name)?;
        let definitions = Arc::new(parse_pattern_file(file_name, &text));

        // First-write-wins: if another thread raced us, keep whichever
        // landed first rather than clobbering it.
        let mut cache = self.cache.write().unwrap();
        let entry = cache
            .entry(file_name.to_string())
            .or_insert_with(|| definitions.clone());
        Ok(entry.clone())
    }

    /// Returns true if the source can currently serve `file_name`, without
    /// loading or caching it.
    pub fn is_pattern_file_available(&self, file_name: &str) -> bool {
        self.source.open(file_name).is_ok()
    }

    /// Searches every catalog file for a definition named `name`, returning
    /// the set of catalog files that define it. Triggers a load of every
    /// file not already cached.
    pub fn find_pattern(&self, name: &str) -> Result<Vec<&'static CatalogFile>, Error> {
        let mut found = Vec::new();
        for entry in catalog::CATALOG {
            let definitions = self.load_patterns(entry.file_name)?;
            if definitions.contains_key(name) {
                found.push(entry);
            }
        }
        Ok(found)
    }

    /// Returns every catalog entry, regardless of load state.
    pub fn get_all_pattern_types(&self) -> &'static [CatalogFile] {
        catalog::CATALOG
    }

    /// Groups catalog entries by their declared category.
    pub fn get_pattern_types_by_category(&self) -> BTreeMap<&'static str, Vec<&'static CatalogFile>> {
        let mut grouped: BTreeMap<&'static str, Vec<&'static CatalogFile>> = BTreeMap::new();
        for entry in catalog::CATALOG {
            grouped.entry(entry.category.as_str()).or_default().push(entry);
        }
        grouped
    }

    /// Per-catalog-file count of definitions. Loads (and caches) every
    /// file that isn't already cached.
    pub fn get_pattern_statistics(&self) -> Result<BTreeMap<&'static str, usize>, Error> {
        let mut stats = BTreeMap::new();
        for entry in catalog::CATALOG {
            let definitions = self.load_patterns(entry.file_name)?;
            stats.insert(entry.file_name, definitions.len());
        }
        Ok(stats)
    }

    /// Drops every cached map. The next `load_patterns` call re-reads and
    /// re-parses its source.
    pub fn clear_cache(&self) {
        self.cache.write().unwrap().clear();
    }

    /// Returns how many distinct catalog files currently have a populated
    /// cache entry. Exposed mainly for tests.
    pub fn cached_file_count(&self) -> usize {
        self.cache.read().unwrap().len()
    }
}

impl Default for PatternRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide convenience instance, backed by the embedded catalog.
/// Mutating a caller's own `PatternRepository` (e.g. via `clear_cache`)
/// never affects this one.
static DEFAULT_REPOSITORY: OnceLock<PatternRepository> = OnceLock::new();

pub fn default_repository() -> &'static PatternRepository {
    DEFAULT_REPOSITORY.get_or_init(PatternRepository::new)
}
