//! Compiled-regex cache for header extraction rules.

use std::collections::HashMap;

use regex::Regex;

use crate::error::ConfigError;
use crate::models::config::HeaderExtractor;

/// Memoization table mapping regex source text to its compiled form.
///
/// Built eagerly from the configured extractors so that a misconfigured
/// pattern fails setup instead of every document. After [`precompile`]
/// the cache is read-only; `&self` lookups never compile or allocate, so
/// the cache can be shared across concurrently processed documents.
///
/// [`precompile`]: PatternCache::precompile
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<String, Regex>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every configured extractor pattern up front.
    ///
    /// Fails on the first pattern that does not compile or that defines
    /// fewer than two capture groups.
    pub fn precompile(extractors: &[HeaderExtractor]) -> Result<Self, ConfigError> {
        let mut cache = Self::new();
        for extractor in extractors {
            cache.get_or_compile(&extractor.regex)?;
        }
        Ok(cache)
    }

    /// Return the compiled form of `source`, compiling and memoizing on
    /// first use. Repeated calls with the same source return the cached
    /// pattern without recompiling.
    pub fn get_or_compile(&mut self, source: &str) -> Result<&Regex, ConfigError> {
        if !self.patterns.contains_key(source) {
            let pattern = Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })?;
            // captures_len counts the implicit whole-match group 0
            if pattern.captures_len() < 3 {
                return Err(ConfigError::TooFewCaptureGroups {
                    pattern: source.to_string(),
                });
            }
            self.patterns.insert(source.to_string(), pattern);
        }
        Ok(&self.patterns[source])
    }

    /// Look up an already-compiled pattern.
    pub fn get(&self, source: &str) -> Option<&Regex> {
        self.patterns.get(source)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the cache holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
