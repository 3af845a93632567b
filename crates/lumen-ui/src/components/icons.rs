use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Pointer cursor glyph used by the select tools.
#[function_component(CursorIcon)]
pub(crate) fn cursor_icon(props: &IconProps) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            width="16"
            height="16"
            viewBox="0 0 16 16"
            fill="none"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            <path d="M6 14.5L2 2L14.5 6.5L8 8.5L6 14.5Z" stroke="white" stroke-linejoin="round" />
        </svg>
    }
}
