//! The navigation coordinator: which section is on screen.

use crate::{schedule::Scheduler, section::Section, viewport::Viewport};
use leptos::prelude::*;
use std::{sync::Arc, time::Duration};

struct FollowUp {
    scheduler: Arc<dyn Scheduler>,
    viewport: Arc<dyn Viewport>,
    delay: Duration,
}

/// Owns the active [`Section`] and is the only way to change it.
///
/// `Navigator` is a `Copy` handle into the reactive graph. Hand it to every
/// view that needs to read or change the active section; reads are
/// reactive and always observe the latest write.
///
/// After each change the navigator schedules a follow-up that focuses the
/// section's tab and scrolls its panel into view. The follow-up is
/// best-effort: if either element is missing, nothing happens.
#[derive(Clone, Copy)]
pub struct Navigator {
    active: RwSignal<Section>,
    follow_up: StoredValue<FollowUp>,
}

impl Navigator {
    pub fn new(
        scheduler: Arc<dyn Scheduler>,
        viewport: Arc<dyn Viewport>,
        focus_delay: Duration,
    ) -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            follow_up: StoredValue::new(FollowUp {
                scheduler,
                viewport,
                delay: focus_delay,
            }),
        }
    }

    /// The active section. Subscribes the caller to changes.
    pub fn active(&self) -> Section {
        self.active.get()
    }

    /// The active section, without subscribing.
    pub fn active_untracked(&self) -> Section {
        self.active.get_untracked()
    }

    /// Like [`Navigator::active_untracked`], but `None` once the owning
    /// view has been torn down.
    pub fn try_active_untracked(&self) -> Option<Section> {
        self.active.try_get_untracked()
    }

    /// Whether `section` is the active one. Subscribes the caller to changes.
    pub fn is_active(&self, section: Section) -> bool {
        self.active.with(|active| *active == section)
    }

    /// Activates the section named `id`.
    ///
    /// Unknown ids are ignored and leave the active section as it was.
    pub fn set_active(&self, id: &str) {
        match id.parse::<Section>() {
            Ok(section) => self.select(section),
            Err(e) => log::debug!("ignoring navigation request: {e}"),
        }
    }

    pub fn select(&self, section: Section) {
        self.active.set(section);
        self.schedule_reveal(section);
    }

    pub fn select_next(&self) {
        self.select(self.active_untracked().next());
    }

    pub fn select_previous(&self) {
        self.select(self.active_untracked().previous());
    }

    fn schedule_reveal(&self, section: Section) {
        self.follow_up.try_with_value(|follow_up| {
            let viewport = Arc::clone(&follow_up.viewport);
            let task = Box::new(move || reveal(viewport.as_ref(), section));
            if let Err(e) = follow_up.scheduler.schedule(follow_up.delay, task) {
                log::debug!("skipping focus for {section}: {e}");
            }
        });
    }
}

fn reveal(viewport: &dyn Viewport, section: Section) {
    if let Err(e) = viewport.focus(&section.tab_id()) {
        log::debug!("could not focus tab: {e}");
    }
    if let Err(e) = viewport.scroll_into_view(&section.panel_id()) {
        log::debug!("could not scroll panel: {e}");
    }
}
