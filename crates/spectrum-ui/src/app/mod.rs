use crate::components::toast::ToastHost;
use crate::features::email_settings::PanelController;
use crate::features::email_settings::api::{CachedMutations, StoreToasts};
use crate::features::email_settings::view::EmailSettingsPanel;
use crate::services::api::ApiClient;
use crate::store::{
    LoadState, SIGNED_OUT_MESSAGE, SettingsStore, apply_snapshot, configure_toasts, dismiss_toast,
    record_load_failure,
};
use gloo::console;
use preferences::{load_client_config, load_panel_config};
use spectrum_notifications::NotificationCategory;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;

#[function_component(SpectrumSettingsApp)]
pub(crate) fn spectrum_settings_app() -> Html {
    let dispatch = Dispatch::<SettingsStore>::new();
    let panel_config = use_memo(|_| load_panel_config(), ());
    // One client per app boot; every mutation shares it.
    let client = use_memo(|_| ApiClient::new(&load_client_config()), ());

    let user = use_selector(|store: &SettingsStore| store.user.clone());
    let load = use_selector(|store: &SettingsStore| store.load.clone());
    let toasts = use_selector(|store: &SettingsStore| store.toasts.as_slice().to_vec());

    let controller: Rc<PanelController> = {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let config = (*panel_config).clone();
        use_memo(
            move |_| {
                PanelController::new(
                    CachedMutations::new(client, dispatch.clone()),
                    StoreToasts::new(dispatch),
                    config,
                )
            },
            (),
        )
    };

    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let capacity = panel_config.toast_capacity;
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(move |store| configure_toasts(store, capacity));
                yew::platform::spawn_local(async move {
                    match client.fetch_current_user().await {
                        Ok(Some(user)) => {
                            dispatch.reduce_mut(move |store| apply_snapshot(store, user));
                        }
                        Ok(None) => {
                            dispatch.reduce_mut(|store| {
                                record_load_failure(store, SIGNED_OUT_MESSAGE);
                            });
                        }
                        Err(err) => {
                            let detail = format!("{err:#}");
                            console::error!("settings load failed", detail.clone());
                            dispatch.reduce_mut(move |store| record_load_failure(store, detail));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let controller = controller.clone();
        Callback::from(move |category: NotificationCategory| {
            let controller = controller.clone();
            yew::platform::spawn_local(async move {
                controller.handle_change(category).await;
            });
        })
    };
    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(move |store| dismiss_toast(store, id));
        })
    };

    let body = match (&*user, &*load) {
        (Some(user), _) => html! {
            <EmailSettingsPanel user={Rc::new(user.clone())} on_toggle={on_toggle} />
        },
        (None, LoadState::Failed(message)) => html! {
            <p class="load-error" role="alert">{message.clone()}</p>
        },
        (None, _) => html! { <p class="loading">{"Loading\u{2026}"}</p> },
    };

    html! {
        <main class="user-settings">
            {body}
            <ToastHost
                toasts={(*toasts).clone()}
                on_dismiss={on_dismiss}
                timeout_ms={panel_config.toast_timeout_ms}
            />
        </main>
    }
}

/// Mount the settings app on `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SpectrumSettingsApp>::with_root(root).render();
    } else {
        yew::Renderer::<SpectrumSettingsApp>::new().render();
    }
}
