use crate::core::widgets::{ToolbarTool, default_tools};
use crate::components::icons::CursorIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToolbarProps {
    #[prop_or_else(default_tool_list)]
    pub tools: Vec<ToolbarTool>,
    #[prop_or_default]
    pub on_select: Callback<&'static str>,
}

fn default_tool_list() -> Vec<ToolbarTool> {
    default_tools().to_vec()
}

#[function_component(Toolbar)]
pub(crate) fn toolbar(props: &ToolbarProps) -> Html {
    html! {
        <div class="toolbar">
            { for props.tools.iter().map(|tool| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = tool.id;
                    Callback::from(move |_| on_select.emit(id))
                };
                html! {
                    <button type="button" aria-label={tool.label} onclick={onclick}>
                        <CursorIcon />
                    </button>
                }
            }) }
        </div>
    }
}
