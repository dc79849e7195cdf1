/// Monotonic id for a deferred task.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// Hands out [`TaskId`]s in increasing order.
#[derive(Debug, Default)]
pub struct TaskIdGen {
    next: u64,
}

impl TaskIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskId, TaskIdGen};

    #[test]
    fn ids_increase() {
        let mut ids = TaskIdGen::new();
        assert_eq!(ids.next_id(), TaskId(0));
        assert_eq!(ids.next_id(), TaskId(1));
        assert!(TaskId(1) < TaskId(2));
    }
}
