use crate::core::widgets::{ButtonSize, button_style};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub text: AttrValue,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let style = button_style(ButtonSize {
        width: props.width,
        height: props.height,
    });
    html! {
        <button
            type="button"
            class={props.class.clone()}
            style={style}
            onclick={props.onclick.clone()}
        >
            {props.text.clone()}
        </button>
    }
}
