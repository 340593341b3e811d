//! In-memory stand-ins for the browser, used by the unit tests.

use crate::{
    error::ArcadeError,
    schedule::{Scheduler, Task, TaskHandle},
    viewport::Viewport,
};
use or_poisoned::OrPoisoned;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};

struct Pending {
    due: Duration,
    id: u32,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u32,
    pending: Vec<Pending>,
}

/// A scheduler driven by an explicit clock.
///
/// Tasks run, in due order, only from [`ManualScheduler::advance`]. Tasks
/// scheduled by a running task are picked up by the same `advance` call if
/// they fall due within it.
#[derive(Default, Clone)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.lock().or_poisoned().now
    }

    /// Number of tasks that have been scheduled but have not yet run.
    pub fn pending(&self) -> usize {
        self.state.lock().or_poisoned().pending.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.lock().or_poisoned();
                let due = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(idx, _)| idx);
                match due {
                    Some(idx) => {
                        let pending = state.pending.remove(idx);
                        state.now = state.now.max(pending.due);
                        Some(pending.task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            // the lock is released here so the task may schedule more work
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Task,
    ) -> Result<TaskHandle, ArcadeError> {
        let mut state = self.state.lock().or_poisoned();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(Pending { due, id, task });
        Ok(TaskHandle::Manual(id))
    }

    fn cancel(&self, handle: TaskHandle) {
        if let TaskHandle::Manual(id) = handle {
            self.state
                .lock()
                .or_poisoned()
                .pending
                .retain(|p| p.id != id);
        }
    }
}

/// What a [`RecordingViewport`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportAction {
    Click(String),
    Focus(String),
    ScrollIntoView(String),
}

/// A viewport that knows a fixed set of element ids and records every
/// request made against one of them.
#[derive(Debug, Default, Clone)]
pub struct RecordingViewport {
    known: Arc<HashSet<String>>,
    actions: Arc<Mutex<Vec<ViewportAction>>>,
}

impl RecordingViewport {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: Arc::new(ids.into_iter().map(Into::into).collect()),
            actions: Default::default(),
        }
    }

    /// Every request that hit a known element, oldest first.
    pub fn actions(&self) -> Vec<ViewportAction> {
        self.actions.lock().or_poisoned().clone()
    }

    fn record(
        &self,
        id: &str,
        action: fn(String) -> ViewportAction,
    ) -> Result<(), ArcadeError> {
        if !self.known.contains(id) {
            return Err(ArcadeError::MissingElement(id.to_string()));
        }
        self.actions.lock().or_poisoned().push(action(id.to_string()));
        Ok(())
    }
}

impl Viewport for RecordingViewport {
    fn click(&self, id: &str) -> Result<(), ArcadeError> {
        self.record(id, ViewportAction::Click)
    }

    fn focus(&self, id: &str) -> Result<(), ArcadeError> {
        self.record(id, ViewportAction::Focus)
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), ArcadeError> {
        self.record(id, ViewportAction::ScrollIntoView)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn counting_task(counter: &Arc<AtomicUsize>) -> Task {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn runs_only_when_due() {
        let scheduler = ManualScheduler::new();
        let ran = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(ms(100), counting_task(&ran)).unwrap();

        scheduler.advance(ms(99));
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(1));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(1000));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let order = Arc::clone(&order);
            scheduler
                .schedule(
                    ms(delay),
                    Box::new(move || order.lock().unwrap().push(tag)),
                )
                .unwrap();
        }
        scheduler.advance(ms(30));
        assert_eq!(*order.lock().unwrap(), vec!["a", "a2", "b", "c"]);
        assert_eq!(scheduler.now(), ms(30));
    }

    #[test]
    fn nested_tasks_run_within_the_same_advance() {
        let scheduler = ManualScheduler::new();
        let ran = Arc::new(AtomicUsize::new(0));
        let inner_scheduler = scheduler.clone();
        let inner = counting_task(&ran);
        scheduler
            .schedule(
                ms(800),
                Box::new(move || {
                    inner_scheduler.schedule(ms(300), inner).unwrap();
                }),
            )
            .unwrap();

        scheduler.advance(ms(1000));
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        scheduler.advance(ms(100));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let scheduler = ManualScheduler::new();
        let ran = Arc::new(AtomicUsize::new(0));
        let handle = scheduler.schedule(ms(5), counting_task(&ran)).unwrap();
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        scheduler.advance(ms(10));
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn records_known_elements_only() {
        let viewport = RecordingViewport::with_elements(["about-tab"]);
        viewport.click("about-tab").unwrap();
        viewport.focus("about-tab").unwrap();
        assert_eq!(
            viewport.focus("nowhere"),
            Err(ArcadeError::MissingElement("nowhere".into()))
        );
        assert_eq!(
            viewport.actions(),
            vec![
                ViewportAction::Click("about-tab".into()),
                ViewportAction::Focus("about-tab".into()),
            ]
        );
    }
}
