//! The simulated boot sequence in front of the résumé.

use crate::{
    config::ArcadeConfig,
    navigation::Navigator,
    schedule::{Scheduler, Task, TaskHandle},
    section::Section,
    viewport::Viewport,
};
use leptos::prelude::*;
use or_poisoned::OrPoisoned;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Holds the ready flag and the timers that drive it.
///
/// Once started, the flag turns `true` after the startup delay and never
/// goes back. After a further initialisation delay the gate selects the
/// default section and clicks and focuses its tab, so the tab strip's own
/// state agrees with the navigator on first paint.
#[derive(Clone)]
pub struct LoadingGate {
    ready: RwSignal<bool>,
    scheduler: Arc<dyn Scheduler>,
    timers: Arc<Mutex<Vec<TaskHandle>>>,
}

impl LoadingGate {
    pub fn start(
        config: &ArcadeConfig,
        navigator: Navigator,
        scheduler: Arc<dyn Scheduler>,
        viewport: Arc<dyn Viewport>,
    ) -> Self {
        let gate = Self {
            ready: RwSignal::new(false),
            scheduler,
            timers: Default::default(),
        };

        let ready = gate.ready;
        let init_delay = config.init_delay();
        let follow_up = gate.clone();
        gate.defer(
            config.startup_delay(),
            Box::new(move || {
                if ready.try_set(true).is_some() {
                    return;
                }
                log::debug!("ready, selecting initial tab");
                follow_up.defer(
                    init_delay,
                    Box::new(move || {
                        initialize(navigator, viewport.as_ref())
                    }),
                );
            }),
        );
        gate
    }

    /// Whether the boot sequence has finished. Subscribes the caller.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn ready(&self) -> Signal<bool> {
        self.ready.into()
    }

    /// Cancels any timer that has not fired yet.
    pub fn cancel(&self) {
        for handle in self.timers.lock().or_poisoned().drain(..) {
            self.scheduler.cancel(handle);
        }
    }

    fn defer(&self, delay: Duration, task: Task) {
        match self.scheduler.schedule(delay, task) {
            Ok(handle) => self.timers.lock().or_poisoned().push(handle),
            Err(e) => log::warn!("loading gate timer not scheduled: {e}"),
        }
    }
}

fn initialize(navigator: Navigator, viewport: &dyn Viewport) {
    if navigator.try_active_untracked().is_none() {
        return;
    }
    let section = Section::default();
    navigator.select(section);
    let tab = section.tab_id();
    if let Err(e) = viewport.click(&tab).and_then(|_| viewport.focus(&tab)) {
        log::debug!("initial tab not selected: {e}");
    }
}
