//! Email preferences card.
//!
//! # Design
//! - Stateless: everything shown comes from the snapshot prop.
//! - Toggles are emitted by category; the caller decides what a toggle does.

use crate::components::checkbox::Checkbox;
use spectrum_notifications::{
    ConfirmEmailView, CurrentUser, Notice, NotificationCategory, PanelView, PreferencesView,
    SettingsViewRow,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmailSettingsPanelProps {
    pub(crate) user: Rc<CurrentUser>,
    pub(crate) on_toggle: Callback<NotificationCategory>,
    #[prop_or_default]
    pub(crate) small_only: bool,
    #[prop_or_default]
    pub(crate) large_only: bool,
    /// Email confirmation flow shown while no address is confirmed.
    #[prop_or_default]
    pub(crate) confirmation: Html,
}

#[function_component(EmailSettingsPanel)]
pub(crate) fn email_settings_panel(props: &EmailSettingsPanelProps) -> Html {
    let card_class = classes!(
        "card",
        "settings-card",
        props.small_only.then_some("small-only"),
        props.large_only.then_some("large-only")
    );

    match PanelView::for_user(&props.user) {
        PanelView::ConfirmEmail(prompt) => {
            render_confirm_email(card_class, &prompt, props.confirmation.clone())
        }
        PanelView::Preferences(preferences) => {
            render_preferences(card_class, &preferences, &props.on_toggle)
        }
    }
}

fn render_confirm_email(card_class: Classes, prompt: &ConfirmEmailView, confirmation: Html) -> Html {
    html! {
        <section class={card_class}>
            <header class="list-header">
                <h2 class="list-heading large">{prompt.heading}</h2>
            </header>
            <div class="list-container">
                <p class="description">{prompt.description}</p>
                {confirmation}
            </div>
        </section>
    }
}

fn render_preferences(
    card_class: Classes,
    preferences: &PreferencesView,
    on_toggle: &Callback<NotificationCategory>,
) -> Html {
    html! {
        <section class={card_class}>
            <header class="list-header">
                <h2 class="list-heading large">{preferences.heading}</h2>
            </header>
            <div class="list-container">
                {for preferences.rows.iter().map(|row| render_row(row, on_toggle))}
            </div>
        </section>
    }
}

fn render_row(row: &SettingsViewRow, on_toggle: &Callback<NotificationCategory>) -> Html {
    let category = row.category;
    let onchange = on_toggle.reform(move |_: bool| category);

    html! {
        <div class="email-list-item" key={row.key()}>
            <Checkbox
                id={row.key()}
                checked={row.email_enabled}
                align={row.layout.as_css()}
                onchange={onchange}
            >
                <div class="checkbox-content">
                    {row.label}
                    {row.notice.map(render_notice).unwrap_or_default()}
                </div>
            </Checkbox>
        </div>
    }
}

fn render_notice(notice: &Notice) -> Html {
    html! {
        <p class="notice">
            {notice.emphasis.map(|lead| html! { <><strong>{lead}</strong>{" "}</> }).unwrap_or_default()}
            {notice.body}
            {notice.icon.map(|icon| html! {
                <>
                    {" "}
                    <span class="inline-icon" data-glyph={icon.glyph()} aria-hidden="true"></span>
                </>
            }).unwrap_or_default()}
            {notice.trailer.map(|trailer| html! { <>{" "}{trailer}</> }).unwrap_or_default()}
        </p>
    }
}
