use crate::logic::reconcile_toast_timers;
use gloo::timers::callback::Timeout;
use spectrum_notifications::Toast;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) on_dismiss: Callback<u64>,
    pub(crate) timeout_ms: u32,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let scheduled: Vec<u64> = timers.keys().copied().collect();
                let plan = reconcile_toast_timers(&scheduled, list);
                for id in plan.cancel {
                    timers.remove(&id);
                }
                for id in plan.start {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(id, Timeout::new(timeout_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            toasts,
        );
    }

    html! {
        <div class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", toast.kind.as_class())} role="status" key={id}>
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"\u{2715}"}</button>
        </div>
    }
}
