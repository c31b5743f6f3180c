//! Metrics hooks for the `matcher` crate.
//!
//! Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
//! then every call to [`Matcher::find_matches`](crate::Matcher::find_matches)
//! reports its strategy, latency, corpus size and hit count. This keeps
//! instrumentation decoupled from any specific metrics backend.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchStrategy;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one matching call.
    ///
    /// `corpus_size` is the number of corpus documents actually scored (after
    /// self-match exclusion) and `hit_count` the number of results returned.
    fn record_match(
        &self,
        strategy: MatchStrategy,
        latency: Duration,
        corpus_size: usize,
        hit_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
