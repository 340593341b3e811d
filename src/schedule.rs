//! Deferred callbacks.
//!
//! Everything the shell does "a little later" (finishing the loading
//! screen, selecting the first tab, moving focus after a tab change) goes
//! through a [`Scheduler`]. In the browser that is Leptos' timeout helper;
//! unit tests drive a manual clock instead.

use crate::error::ArcadeError;
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a scheduled task so it can be cancelled.
#[derive(Debug, Clone, Copy)]
pub enum TaskHandle {
    Timeout(TimeoutHandle),
    #[cfg(test)]
    Manual(u32),
}

pub trait Scheduler: Send + Sync {
    /// Runs `task` once, no earlier than `delay` from now.
    fn schedule(
        &self,
        delay: Duration,
        task: Task,
    ) -> Result<TaskHandle, ArcadeError>;

    /// Drops a task that has not run yet. Cancelling a task that already
    /// ran, or was already cancelled, does nothing.
    fn cancel(&self, handle: TaskHandle);
}

/// Schedules tasks on the browser's timer queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomScheduler;

impl Scheduler for DomScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Task,
    ) -> Result<TaskHandle, ArcadeError> {
        set_timeout_with_handle(task, delay)
            .map(TaskHandle::Timeout)
            .map_err(|e| ArcadeError::Schedule(format!("{e:?}")))
    }

    fn cancel(&self, handle: TaskHandle) {
        #[allow(irrefutable_let_patterns)]
        if let TaskHandle::Timeout(handle) = handle {
            handle.clear();
        }
    }
}
