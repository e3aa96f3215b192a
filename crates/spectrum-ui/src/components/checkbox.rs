use crate::logic::controlled_change;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    pub(crate) id: AttrValue,
    /// Snapshot value; clicks do not change it.
    #[prop_or_default]
    pub(crate) checked: bool,
    #[prop_or_default]
    pub(crate) disabled: bool,
    /// `align-items` value for the box against its content.
    #[prop_or(AttrValue::Static("center"))]
    pub(crate) align: AttrValue,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<bool>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        let checked = props.checked;
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let change = controlled_change(checked, input.checked());
                input.set_checked(change.displayed);
                onchange.emit(change.requested);
            }
        })
    };
    let style = format!("display: flex; align-items: {};", props.align);

    html! {
        <label for={props.id.clone()} class="label cursor-pointer gap-2" style={style}>
            <input
                type="checkbox"
                id={props.id.clone()}
                class={classes!("checkbox", props.class.clone())}
                disabled={props.disabled}
                checked={props.checked}
                onchange={onchange}
            />
            { for props.children.iter() }
        </label>
    }
}
