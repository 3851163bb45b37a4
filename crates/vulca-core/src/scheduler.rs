//! Millisecond clocks and a cancellable one-shot task queue.

use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

/// Wall clock, measured from construction.
#[derive(Clone, Debug)]
pub struct SystemClock {
    start: instant::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Test clock. Clones share the same time, so a test can keep one handle
/// and hand another to the gallery.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Pending<T> {
    handle: TaskHandle,
    due_ms: u64,
    task: T,
}

/// One-shot tasks fired by [`TaskScheduler::poll`] once their due time passes.
pub struct TaskScheduler<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule_at(&mut self, due_ms: u64, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due_ms,
            task,
        });
        handle
    }

    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, task: T) -> TaskHandle {
        self.schedule_at(now_ms.saturating_add(delay_ms), task)
    }

    /// Returns false when the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Move every task due at or before `now_ms` into `out`, earliest first.
    pub fn poll(&mut self, now_ms: u64, out: &mut Vec<T>) {
        if self.pending.iter().all(|p| p.due_ms > now_ms) {
            return;
        }
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|p| (p.due_ms, p.handle.0));
        out.extend(due.into_iter().map(|p| p.task));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
