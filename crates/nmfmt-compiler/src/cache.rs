//! Generational template cache.
//!
//! [`TemplateCache`] memoizes [`compile`] by raw template text. There is no
//! per-entry eviction: every miss bumps a counter, and the miss that brings
//! the counter to the reset limit throws the whole table away. Callers that
//! build many one-off templates therefore cost some recompilation but never
//! grow the table past the limit.
//!
//! # Thread Safety
//!
//! A single mutex guards the table and the miss counter. The lookup, the
//! compile on a miss, the insert and the possible reset all happen under one
//! acquisition, so a reader can never observe a half-cleared table.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::compile::{CompiledTemplate, compile};
use nmfmt_parser::Syntax;

/// Misses tolerated before the table is cleared.
pub const DEFAULT_RESET_LIMIT: usize = 100;

#[derive(Default)]
struct CacheInner {
    entries: FxHashMap<String, Arc<CompiledTemplate>>,
    misses: usize,
}

/// Concurrent memo table from raw template to [`CompiledTemplate`].
pub struct TemplateCache {
    inner: Mutex<CacheInner>,
    syntax: Syntax,
    reset_limit: usize,
    /// Total compile runs since construction. Never reset.
    compilations: AtomicU64,
}

impl TemplateCache {
    /// Create a cache that resets after `reset_limit` misses.
    ///
    /// A limit of zero is treated as one.
    pub fn new(reset_limit: usize, syntax: Syntax) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            syntax,
            reset_limit: reset_limit.max(1),
            compilations: AtomicU64::new(0),
        }
    }

    /// The compiled form of `template`, compiling it on a miss.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn get(&self, template: &str) -> Arc<CompiledTemplate> {
        let mut inner = self.lock();
        if let Some(hit) = inner.entries.get(template) {
            return Arc::clone(hit);
        }

        let compiled = Arc::new(compile(template, &self.syntax));
        self.compilations.fetch_add(1, Ordering::Relaxed);
        trace!(
            "compiled template {template:?} ({} placeholders)",
            compiled.arg_names().len()
        );

        inner.misses += 1;
        if inner.misses >= self.reset_limit {
            debug!(
                "template cache reset after {} misses ({} entries dropped)",
                inner.misses,
                inner.entries.len()
            );
            inner.entries = FxHashMap::default();
            inner.misses = 0;
        } else {
            inner
                .entries
                .insert(template.to_owned(), Arc::clone(&compiled));
        }
        compiled
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Misses since the last reset.
    pub fn misses(&self) -> usize {
        self.lock().misses
    }

    /// Total number of compile runs since construction.
    pub fn compilations(&self) -> u64 {
        self.compilations.load(Ordering::Relaxed)
    }

    /// Drop every entry and reset the miss counter.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries = FxHashMap::default();
        inner.misses = 0;
    }

    #[inline]
    pub fn reset_limit(&self) -> usize {
        self.reset_limit
    }

    #[inline]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// The table only memoizes a pure function, so a panic while it was held
    /// cannot leave it wrong, only incomplete.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_LIMIT, Syntax::default())
    }
}

impl std::fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("TemplateCache")
            .field("entries", &inner.entries.len())
            .field("misses", &inner.misses)
            .field("reset_limit", &self.reset_limit)
            .field("compilations", &self.compilations())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_returns_stored_entry() {
        let cache = TemplateCache::default();
        let first = cache.get("hello, $name");
        let second = cache.get("hello, $name");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.compilations(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn matches_direct_compile() {
        let cache = TemplateCache::default();
        let template = "$=a:q and ${ b } at 5%";
        assert_eq!(*cache.get(template), compile(template, &Syntax::default()));
    }

    #[test]
    fn reset_on_limit() {
        let cache = TemplateCache::new(3, Syntax::default());
        cache.get("$a");
        cache.get("$b");
        assert_eq!(cache.len(), 2);

        cache.get("$a");
        assert_eq!(cache.compilations(), 2);

        // Third miss reaches the limit: everything goes, including "$c".
        let c = cache.get("$c");
        assert_eq!(c.arg_names(), ["c"]);
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);

        // "$a" was cached before the reset and must be compiled again.
        cache.get("$a");
        assert_eq!(cache.compilations(), 4);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn limit_of_one_never_stores() {
        let cache = TemplateCache::new(0, Syntax::default());
        assert_eq!(cache.reset_limit(), 1);
        cache.get("$a");
        cache.get("$a");
        assert!(cache.is_empty());
        assert_eq!(cache.compilations(), 2);
    }

    #[test]
    fn clear_is_transparent() {
        let cache = TemplateCache::default();
        let before = cache.get("$x:d items");
        cache.clear();
        let after = cache.get("$x:d items");
        assert_eq!(*before, *after);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn concurrent_gets_agree() {
        let cache = TemplateCache::new(7, Syntax::default());
        let templates: Vec<String> = (0..20).map(|i| format!("$n{i} and ${{ m{i}:q }}")).collect();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..50 {
                        for template in &templates {
                            let got = cache.get(template);
                            assert_eq!(*got, compile(template, &Syntax::default()));
                        }
                    }
                });
            }
        });

        assert!(cache.len() < 7);
    }
}
