//! # Compiled Regex Cache
//!
//! Shares compiled handles between threads, keyed by pattern and options.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::alloc::string::{String, ToString};
use crate::errors::RegezResult;
use crate::options::RegexOptions;
use crate::regex::Regex;
use crate::types::{RzHashMap, hash_map_new};

/// Interior-mutable cache of compiled [`Regex`] handles.
///
/// Lookups take a read lock; compilation of a missing entry happens outside
/// any lock, and the first handle inserted for a key wins.
#[derive(Debug)]
pub struct RegexCache {
    entries: RwLock<RzHashMap<RegexOptions, RzHashMap<String, Arc<Regex>>>>,
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(hash_map_new()),
        }
    }

    /// Get a cached handle, if present.
    pub fn get(
        &self,
        pattern: &str,
        options: &RegexOptions,
    ) -> Option<Arc<Regex>> {
        self.entries
            .read()
            .get(options)
            .and_then(|patterns| patterns.get(pattern))
            .cloned()
    }

    /// Get the handle for `pattern` under `options`, compiling it if needed.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text.
    /// * `options` - the compile options.
    ///
    /// ## Returns
    /// The shared handle, or the compile error; errors are not cached.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        options: &RegexOptions,
    ) -> RegezResult<Arc<Regex>> {
        if let Some(regex) = self.get(pattern, options) {
            return Ok(regex);
        }

        let regex = Arc::new(Regex::with_options(pattern, *options)?);

        let mut writer = self.entries.write();
        let regex = writer
            .entry(*options)
            .or_insert_with(hash_map_new)
            .entry(pattern.to_string())
            .or_insert(regex)
            .clone();
        log::debug!("cached regex {pattern:?}");
        Ok(regex)
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.entries.read().values().map(|patterns| patterns.len()).sum()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached handle.
    ///
    /// Handles already handed out remain valid.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
