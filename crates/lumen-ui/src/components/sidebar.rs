use crate::app::preferences::{load_setting, persist_setting};
use crate::core::widgets::{SidebarEntry, SidebarSection, default_sections};
use crate::components::toggle_button::ToggleButton;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarProps {
    #[prop_or_else(default_sections)]
    pub sections: Vec<SidebarSection>,
}

#[function_component(Sidebar)]
pub(crate) fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="sidebar">
            <div class="sidebar-block">{"Settings"}</div>
            { for props.sections.iter().map(section_block) }
        </div>
    }
}

fn section_block(section: &SidebarSection) -> Html {
    html! {
        <div class="sidebar-block sidebar-block-background">
            <div>{section.title}</div>
            { for section.entries.iter().map(entry_row) }
        </div>
    }
}

fn entry_row(entry: &SidebarEntry) -> Html {
    let key = entry.storage_key();
    let checked = load_setting(&key);
    let on_toggle = Callback::from(move |value: bool| persist_setting(&key, value));
    html! {
        <div class="sidebar-block-entry-child">
            <div>{entry.title}</div>
            <div>
                <ToggleButton
                    checked_label={entry.labels.checked.clone()}
                    unchecked_label={entry.labels.unchecked.clone()}
                    checked={checked}
                    on_toggle={on_toggle}
                />
            </div>
        </div>
    }
}
