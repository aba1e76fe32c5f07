//! # Parallel Regex

use core::ops::Range;

use crate::alloc::vec::Vec;
use crate::exec::{MatchCache, MatchResult};
use crate::regex::Regex;

/// Batch-Level Parallel Regex Wrapper.
///
/// Evaluates batches of inputs with ``rayon``, one [`MatchCache`] per worker.
#[derive(Debug, Clone)]
pub struct ParallelRegex<R: AsRef<Regex> = Regex> {
    /// Wrapped handle.
    pub inner: R,
}

impl<R: AsRef<Regex>> From<R> for ParallelRegex<R> {
    fn from(inner: R) -> Self {
        Self::new(inner)
    }
}

impl<R: AsRef<Regex>> ParallelRegex<R> {
    /// Create a new parallel wrapper.
    ///
    /// ## Arguments
    /// * `inner` - The handle to wrap; a [`Regex`] or a shared reference to one.
    ///
    /// ## Returns
    /// A new `ParallelRegex` instance.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped handle.
    pub fn regex(&self) -> &Regex {
        self.inner.as_ref()
    }

    /// Does the pattern match each input?
    ///
    /// ## Returns
    /// One flag per input, in input order.
    pub fn is_match_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<bool>
    where
        S: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let regex = self.regex();
        batch
            .par_iter()
            .map_init(MatchCache::default, |cache, input| {
                regex.is_match_with(input.as_ref(), cache)
            })
            .collect()
    }

    /// The leftmost-first match span of each input.
    ///
    /// ## Returns
    /// One optional span per input, in input order.
    pub fn find_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Option<Range<usize>>>
    where
        S: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let regex = self.regex();
        batch
            .par_iter()
            .map_init(MatchCache::default, |cache, input| {
                regex.find_at_with(input.as_ref(), 0, cache)
            })
            .collect()
    }

    /// The leftmost-first match of each input, with group spans.
    ///
    /// ## Returns
    /// One result per input, in input order.
    pub fn find_captures_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<MatchResult>
    where
        S: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let regex = self.regex();
        batch
            .par_iter()
            .map_init(MatchCache::default, |cache, input| {
                regex.find_captures_with(input.as_ref(), cache)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::alloc::vec;

    fn inputs() -> Vec<String> {
        (0..200)
            .map(|i| if i % 3 == 0 { format!("id-{i}") } else { format!("none{}", "-".repeat(i)) })
            .collect()
    }

    #[test]
    fn test_batches_match_serial() {
        let regex = Regex::new("id-([0-9]+)").unwrap();
        let batch = inputs();

        let serial_matches: Vec<bool> = batch.iter().map(|s| regex.is_match(s)).collect();
        let serial_spans: Vec<_> = batch.iter().map(|s| regex.find(s)).collect();
        let serial_captures: Vec<_> = batch.iter().map(|s| regex.find_captures(s)).collect();

        let parallel = ParallelRegex::new(regex);
        assert_eq!(parallel.is_match_batch(&batch), serial_matches);
        assert_eq!(parallel.find_batch(&batch), serial_spans);
        assert_eq!(parallel.find_captures_batch(&batch), serial_captures);
    }

    #[test]
    fn test_shared_handle() {
        let regex = Arc::new(Regex::new("^a").unwrap());
        let parallel: ParallelRegex<Arc<Regex>> = regex.clone().into();
        assert_eq!(
            parallel.is_match_batch(&["abc", "bca", "a"]),
            vec![true, false, true]
        );
        assert_eq!(parallel.regex().as_str(), regex.as_str());
    }
}
