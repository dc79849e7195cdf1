use std::cell::Cell;
use std::rc::Rc;

use foundation::ids::{TaskId, TaskIdGen};

/// Shared "has fired" flag handed to a deferred task's callback.
#[derive(Debug, Clone, Default)]
pub struct Completion(Rc<Cell<bool>>);

impl Completion {
    pub fn mark_done(&self) {
        self.0.set(true);
    }

    pub fn is_done(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
struct Slot<K, H> {
    id: TaskId,
    key: K,
    handle: H,
    done: Completion,
}

/// Registry of deferred tasks that have been scheduled but may not have run.
///
/// `H` is the host timer handle; dropping it must cancel the timer (as a
/// `gloo_timers::callback::Timeout` does). `K` groups tasks so a re-trigger
/// can cancel whatever is still pending for the same element.
///
/// Tasks are kept in scheduling order. Finished tasks are pruned lazily, on
/// the next `schedule`, because a timer callback cannot drop its own handle.
#[derive(Debug)]
pub struct PendingTasks<K, H> {
    ids: TaskIdGen,
    slots: Vec<Slot<K, H>>,
}

impl<K, H> Default for PendingTasks<K, H> {
    fn default() -> Self {
        Self {
            ids: TaskIdGen::new(),
            slots: Vec::new(),
        }
    }
}

impl<K: PartialEq, H> PendingTasks<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task. `start` receives the completion flag the task must
    /// mark when it runs, and returns the timer handle.
    pub fn schedule(&mut self, key: K, start: impl FnOnce(Completion) -> H) -> TaskId {
        self.prune();
        let id = self.ids.next_id();
        let done = Completion::default();
        let handle = start(done.clone());
        self.slots.push(Slot {
            id,
            key,
            handle,
            done,
        });
        id
    }

    /// Number of tasks that have not run yet.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.done.is_done()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cancels every task scheduled under `key`; returns how many were still pending.
    pub fn cancel_key(&mut self, key: &K) -> usize {
        let mut cancelled = 0usize;
        self.slots.retain(|s| {
            if s.key != *key {
                return true;
            }
            if !s.done.is_done() {
                cancelled += 1;
            }
            false
        });
        cancelled
    }

    pub fn cancel_all(&mut self) -> usize {
        self.drain().len()
    }

    /// Empties the registry and hands back the handles of tasks that have
    /// not run, in scheduling order, so the caller can settle them before
    /// dropping (and so cancelling) them.
    pub fn drain(&mut self) -> Vec<H> {
        let pending: Vec<H> = std::mem::take(&mut self.slots)
            .into_iter()
            .filter(|s| !s.done.is_done())
            .map(|s| s.handle)
            .collect();
        if !pending.is_empty() {
            tracing::debug!(cancelled = pending.len(), "cancelled pending tasks");
        }
        pending
    }

    /// Drops handles of tasks that already ran.
    pub fn prune(&mut self) {
        self.slots.retain(|s| !s.done.is_done());
    }
}

#[cfg(test)]
impl<K: PartialEq, H> PendingTasks<K, H> {
    fn is_pending(&self, id: TaskId) -> bool {
        self.slots.iter().any(|s| s.id == id && !s.done.is_done())
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        before != self.slots.len()
    }

    fn handle(&self, id: TaskId) -> Option<&H> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::{Completion, PendingTasks};
    use foundation::ids::TaskId;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stand-in for a browser timer: dropping it records a cancellation.
    struct FakeTimer {
        label: &'static str,
        done: Completion,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakeTimer {
        fn fire(&self) {
            self.done.mark_done();
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            if !self.done.is_done() {
                self.cancelled.borrow_mut().push(self.label);
            }
        }
    }

    fn timer(
        label: &'static str,
        cancelled: &Rc<RefCell<Vec<&'static str>>>,
    ) -> impl FnOnce(Completion) -> FakeTimer {
        let cancelled = cancelled.clone();
        move |done| FakeTimer {
            label,
            done,
            cancelled,
        }
    }

    #[test]
    fn schedule_hands_out_increasing_ids() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        let a = tasks.schedule(0u32, timer("a", &cancelled));
        let b = tasks.schedule(0u32, timer("b", &cancelled));
        assert_eq!((a, b), (TaskId(0), TaskId(1)));
        assert_eq!(tasks.len(), 2);
        assert!(tasks.is_pending(a));
    }

    #[test]
    fn fired_tasks_stop_counting_and_are_pruned() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        let a = tasks.schedule(0u32, timer("a", &cancelled));
        tasks.handle(a).unwrap().fire();
        assert_eq!(tasks.len(), 0);
        assert!(!tasks.is_pending(a));

        tasks.schedule(0u32, timer("b", &cancelled));
        assert!(tasks.handle(a).is_none());
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn cancel_key_only_touches_that_group() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        tasks.schedule(1u32, timer("grid1-a", &cancelled));
        tasks.schedule(2u32, timer("grid2", &cancelled));
        tasks.schedule(1u32, timer("grid1-b", &cancelled));

        assert_eq!(tasks.cancel_key(&1), 2);
        assert_eq!(*cancelled.borrow(), vec!["grid1-a", "grid1-b"]);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn cancel_all_drops_every_pending_timer() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        let a = tasks.schedule(0u32, timer("a", &cancelled));
        tasks.schedule(0u32, timer("b", &cancelled));
        tasks.handle(a).unwrap().fire();

        assert_eq!(tasks.cancel_all(), 1);
        assert_eq!(*cancelled.borrow(), vec!["b"]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn drain_returns_only_unfired_handles_in_order() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        tasks.schedule(0u32, timer("a", &cancelled));
        let b = tasks.schedule(1u32, timer("b", &cancelled));
        tasks.schedule(0u32, timer("c", &cancelled));
        tasks.handle(b).unwrap().fire();

        let drained = tasks.drain();
        assert_eq!(drained.iter().map(|t| t.label).collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(tasks.is_empty());
        assert!(cancelled.borrow().is_empty());

        drop(drained);
        assert_eq!(*cancelled.borrow(), vec!["a", "c"]);
    }

    #[test]
    fn cancel_by_id() {
        let cancelled = Rc::default();
        let mut tasks = PendingTasks::new();
        let a = tasks.schedule(0u32, timer("a", &cancelled));
        assert!(tasks.cancel(a));
        assert!(!tasks.cancel(a));
        assert_eq!(*cancelled.borrow(), vec!["a"]);
    }
}
