//! The four content panels. Only the active one is visible.

use crate::{
    content::{self, Channel, Role, SkillGroup},
    navigation::Navigator,
    section::Section,
};
use leptos::prelude::*;

#[component]
pub fn PanelDeck(navigator: Navigator) -> impl IntoView {
    view! {
        <div class="panel-frame">
            <Panel navigator section=Section::About>
                <AboutPanel/>
            </Panel>
            <Panel navigator section=Section::Skills>
                <SkillsPanel/>
            </Panel>
            <Panel navigator section=Section::Experience>
                <ExperiencePanel/>
            </Panel>
            <Panel navigator section=Section::Contact>
                <ContactPanel/>
            </Panel>
        </div>
    }
}

/// A `tabpanel` wired to its tab. Hidden unless `section` is active.
#[component]
pub fn Panel(
    navigator: Navigator,
    section: Section,
    children: Children,
) -> impl IntoView {
    let selected = move || navigator.is_active(section);

    view! {
        <section
            id=section.panel_id()
            class="panel"
            role="tabpanel"
            aria-labelledby=section.tab_id()
            tabindex="0"
            data-state=move || if selected() { "active" } else { "inactive" }
            hidden=move || !selected()
        >
            {children()}
        </section>
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <h2 class="panel-title">"ABOUT ME"</h2>
        <div class="about-grid">
            <Avatar/>
            <div class="about-text">
                <p class="lead">{content::SUMMARY}</p>
                <p>{content::FOCUS}</p>
                <div class="card">
                    <h3>"PLAYER STATS"</h3>
                    <ul>
                        {content::PLAYER_STATS
                            .iter()
                            .map(|stat| view! { <li>{*stat}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
        <div class="card game-controls">
            <h3>"GAME CONTROLS"</h3>
            <p>
                "Use the controller at the bottom of the screen or keyboard arrow keys to navigate through my resume."
            </p>
            <ul>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <span class=format!("accent-text-{}", section.accent())>
                                    {format!("{} Button ({})", colour_name(section), section.button())}
                                </span>
                                {format!(": {} tab", section.label())}
                            </li>
                        }
                    })
                    .collect_view()}
                <li>"D-pad Left/Right: Navigate between tabs"</li>
                <li>"D-pad Up/Down: Scroll content"</li>
            </ul>
        </div>
    }
}

/// Profile picture, falling back to initials if the image fails to load.
#[component]
fn Avatar() -> impl IntoView {
    let broken = RwSignal::new(false);

    view! {
        <div class="avatar">
            <Show
                when=move || !broken.get()
                fallback=|| view! { <div class="avatar-fallback">{content::INITIALS}</div> }
            >
                <img src=content::AVATAR alt="Brandon Han" on:error=move |_| broken.set(true)/>
            </Show>
            <div class="scanline"></div>
        </div>
    }
}

fn colour_name(section: Section) -> &'static str {
    match section {
        Section::About => "Purple",
        Section::Skills => "Pink",
        Section::Experience => "Cyan",
        Section::Contact => "Orange",
    }
}

#[component]
fn SkillsPanel() -> impl IntoView {
    view! {
        <h2 class="panel-title">"SKILLS"</h2>
        <div class="skill-groups">
            {content::SKILLS.iter().map(skill_group).collect_view()}
        </div>
    }
}

fn skill_group(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{group.title}</h3>
            <ul class="skill-list">
                {group
                    .items
                    .iter()
                    .map(|(name, level)| {
                        view! {
                            <li class="skill">
                                <span class="skill-name">{*name}</span>
                                <span class="skill-bar">
                                    <span
                                        class="skill-bar-fill"
                                        style=format!("width: {}%", (*level).min(100))
                                    ></span>
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ExperiencePanel() -> impl IntoView {
    view! {
        <h2 class="panel-title">"EXPERIENCE"</h2>
        <ol class="timeline">{content::EXPERIENCE.iter().map(role).collect_view()}</ol>
    }
}

fn role(role: &'static Role) -> impl IntoView {
    view! {
        <li class="card role">
            <h3>{role.title}</h3>
            <p class="role-meta">{format!("{} \u{b7} {}", role.place, role.period)}</p>
            <ul>
                {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
        </li>
    }
}

#[component]
fn ContactPanel() -> impl IntoView {
    view! {
        <h2 class="panel-title">"CONTACT"</h2>
        <p>"Ready for player two? Reach out on any channel below."</p>
        <ul class="channels">{content::CONTACT.iter().map(channel).collect_view()}</ul>
    }
}

fn channel(channel: &'static Channel) -> impl IntoView {
    view! {
        <li class="card channel">
            <span class="channel-label">{channel.label}</span>
            <a href=channel.href target="_blank" rel="noreferrer">
                {channel.value}
            </a>
        </li>
    }
}
