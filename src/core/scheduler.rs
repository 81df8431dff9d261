//! Session-owned virtual clock for periodic and deferred game tasks.
//!
//! Every timer-driven behaviour of a game (obstacle advance, animation
//! frames, the computer's think delay, the jump duration) is registered here
//! under a task name. The owning session drives the clock with the real
//! elapsed time of each frame and handles whatever comes due, one task at a
//! time, in due-time order. Tearing a session down is a single `cancel_all`.
//!
//! ```text
//! let deadline = scheduler.deadline(dt_ms);
//! while let Some(task) = scheduler.pop_due(deadline) {
//!     handle(task); // may schedule or cancel other tasks
//! }
//! ```

/// Handle returned when a task is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    id: TaskId,
    task: T,
    due_at_ms: u64,
    /// `Some` for recurring tasks, `None` for one-shots.
    period_ms: Option<u64>,
}

/// A fixed-timestep task scheduler over a virtual millisecond clock.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T: Copy + PartialEq> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Register a recurring task firing every `period_ms` (first run one
    /// period from now).
    pub fn every(&mut self, task: T, period_ms: u64) -> TaskId {
        let period_ms = period_ms.max(1);
        self.push(task, period_ms, Some(period_ms))
    }

    /// Register a one-shot task firing `delay_ms` from now.
    pub fn after(&mut self, task: T, delay_ms: u64) -> TaskId {
        self.push(task, delay_ms, None)
    }

    fn push(&mut self, task: T, delay_ms: u64, period_ms: Option<u64>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            task,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
        });
        id
    }

    /// Cancel a single registration. Returns false if it already fired
    /// (one-shot) or was cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancel every registration of `task`. Returns how many were removed.
    pub fn cancel_task(&mut self, task: T) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task != task);
        before - self.tasks.len()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, task: T) -> bool {
        self.tasks.iter().any(|t| t.task == task)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Milliseconds until the next firing of `task`, if it is scheduled.
    pub fn time_until(&self, task: T) -> Option<u64> {
        self.tasks
            .iter()
            .filter(|t| t.task == task)
            .map(|t| t.due_at_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// The clock value `dt_ms` from now, for use with [`Scheduler::pop_due`].
    pub fn deadline(&self, dt_ms: u64) -> u64 {
        self.now_ms.saturating_add(dt_ms)
    }

    /// Fire the earliest task due at or before `deadline_ms`.
    ///
    /// Ties go to the task registered first. The clock moves to the fired
    /// task's due time; once nothing is left to fire it settles on the
    /// deadline and `None` is returned.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<T> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at_ms <= deadline_ms)
            .min_by_key(|(_, t)| (t.due_at_ms, t.id))
            .map(|(i, _)| i);

        let Some(index) = index else {
            self.now_ms = self.now_ms.max(deadline_ms);
            return None;
        };

        let entry = &mut self.tasks[index];
        let task = entry.task;
        self.now_ms = self.now_ms.max(entry.due_at_ms);
        match entry.period_ms {
            Some(period) => entry.due_at_ms += period,
            None => {
                self.tasks.remove(index);
            }
        }
        Some(task)
    }

    /// Advance the clock by `dt_ms`, returning every task that came due in
    /// firing order. Handlers that need to schedule or cancel while the
    /// clock runs should loop over [`Scheduler::pop_due`] instead.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<T> {
        let deadline = self.deadline(dt_ms);
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(deadline) {
            fired.push(task);
        }
        fired
    }
}
