//! Bookkeeping for sign-in attempts still waiting on their popup.

use futures::future::AbortHandle;
use std::collections::BTreeMap;

/// Identifier handed out per registered attempt.
pub type AttemptId = u64;

/// Abort handles of in-flight attempts, keyed by attempt.
#[derive(Debug, Default)]
pub struct PendingAttempts {
    next_id: AttemptId,
    handles: BTreeMap<AttemptId, AbortHandle>,
}

impl PendingAttempts {
    /// Track a newly spawned attempt.
    pub fn register(&mut self, handle: AbortHandle) -> AttemptId {
        self.next_id += 1;
        self.handles.insert(self.next_id, handle);
        self.next_id
    }

    /// Forget an attempt that ran to completion.
    pub fn finish(&mut self, id: AttemptId) {
        self.handles.remove(&id);
    }

    /// Number of attempts still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no attempt is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Abort every waiting attempt and forget them.
    pub fn abort_all(&mut self) {
        for handle in std::mem::take(&mut self.handles).into_values() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{Aborted, abortable};

    #[test]
    fn finished_attempts_are_forgotten() {
        let mut pending = PendingAttempts::default();
        let (first, _) = AbortHandle::new_pair();
        let (second, _) = AbortHandle::new_pair();
        let first_id = pending.register(first);
        let second_id = pending.register(second);
        assert_ne!(first_id, second_id);
        assert_eq!(pending.len(), 2);

        pending.finish(first_id);
        assert_eq!(pending.len(), 1);
        assert!(!pending.is_empty());

        pending.finish(second_id);
        pending.finish(second_id);
        assert!(pending.is_empty());
    }

    #[test]
    fn overlapping_attempts_stay_busy_until_the_last_finishes() {
        let mut pending = PendingAttempts::default();
        let (early, _) = AbortHandle::new_pair();
        let (late, _) = AbortHandle::new_pair();
        let early_id = pending.register(early);
        let late_id = pending.register(late);

        pending.finish(early_id);
        assert!(!pending.is_empty());
        pending.finish(late_id);
        assert!(pending.is_empty());
    }

    #[test]
    fn abort_all_cancels_waiting_tasks() {
        let mut pending = PendingAttempts::default();
        let (task, handle) = abortable(futures::future::pending::<()>());
        pending.register(handle);

        pending.abort_all();

        assert!(pending.is_empty());
        assert_eq!(block_on(task), Err(Aborted));
    }
}
