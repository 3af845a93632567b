use crate::core::css::input_id;
use crate::core::identity::InstanceIdentity;
use crate::core::labels::LabelPair;
use crate::core::scoped_style::{ScopedStyleManager, StyleLifecycle};
use crate::dom::DocumentHeadRegistry;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleButtonProps {
    #[prop_or_default]
    pub checked_label: AttrValue,
    #[prop_or_default]
    pub unchecked_label: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
}

/// Toggle switch whose on/off captions come from a per-instance stylesheet.
#[function_component(ToggleButton)]
pub(crate) fn toggle_button(props: &ToggleButtonProps) -> Html {
    let identity = use_memo(|_| InstanceIdentity::allocate(), ());
    let styles = {
        let identity = *identity;
        use_mut_ref(move || ScopedStyleManager::new(identity, DocumentHeadRegistry))
    };
    let checked = {
        let initial = props.checked;
        use_state(move || initial)
    };
    let labels = LabelPair::new(
        props.checked_label.to_string(),
        props.unchecked_label.to_string(),
    );

    {
        let styles = styles.clone();
        use_effect_with_deps(
            move |labels: &LabelPair| {
                if let Err(err) = styles.borrow_mut().sync(labels) {
                    console::error!("toggle label style failed", err.to_string());
                }
                || ()
            },
            labels,
        );
    }
    {
        let styles = styles.clone();
        use_effect_with_deps(move |_| move || styles.borrow_mut().on_unmount(), ());
    }

    let onchange = {
        let checked = checked.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.checked();
                checked.set(value);
                on_toggle.emit(value);
            }
        })
    };

    let scope = styles.borrow().scope_class();
    let input = input_id(&identity);
    html! {
        <div class={classes!("toggle-button-container", "slide", scope, props.class.clone())}>
            <input id={input.clone()} type="checkbox" checked={*checked} onchange={onchange} />
            <label for={input} class="toggle-button-label">
                <div class="toggle-button-cover slide"></div>
            </label>
        </div>
    }
}
