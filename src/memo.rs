use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::theme::{AppColorTokens, Mode, Theme};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct MemoKey<A> {
    theme: u64,
    args: A,
}

/// Caches one generator's recipes by its exact input tuple: the theme
/// fingerprint plus the component arguments.
pub struct RecipeMemo<A, R> {
    cache: LruCache<MemoKey<A>, Arc<R>>,
    hits: u64,
    misses: u64,
}

impl<A, R> Default for RecipeMemo<A, R>
where
    A: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<A, R> RecipeMemo<A, R>
where
    A: Clone + Eq + Hash,
{
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_generate(
        &mut self,
        theme: &Theme,
        args: &A,
        generate: impl FnOnce(&AppColorTokens, Mode, &A) -> R,
    ) -> Arc<R> {
        let key = MemoKey {
            theme: theme.fingerprint(),
            args: args.clone(),
        };
        if let Some(recipe) = self.cache.get(&key) {
            self.hits += 1;
            return recipe.clone();
        }

        self.misses += 1;
        tracing::trace!(
            scheme = theme.scheme.as_str(),
            mode = theme.mode.as_str(),
            "recipe memo miss"
        );
        let recipe = Arc::new(generate(&theme.colors, theme.mode, args));
        self.cache.put(key, recipe.clone());
        recipe
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
