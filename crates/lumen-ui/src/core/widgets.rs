//! DOM-free models behind the button, toolbar, and sidebar widgets.

use crate::core::labels::LabelPair;

/// Explicit pixel dimensions for a resizable button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSize {
    /// Width in CSS pixels.
    pub width: Option<u32>,
    /// Height in CSS pixels.
    pub height: Option<u32>,
}

/// Inline style for a button of `size`; `None` lets the stylesheet decide.
#[must_use]
pub fn button_style(size: ButtonSize) -> Option<String> {
    let parts: Vec<String> = [("width", size.width), ("height", size.height)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|px| format!("{name}: {px}px;")))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// One toolbar button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolbarTool {
    /// Stable identifier emitted on click.
    pub id: &'static str,
    /// Accessible label.
    pub label: &'static str,
}

/// Tools shown when the toolbar is rendered without explicit configuration.
#[must_use]
pub const fn default_tools() -> [ToolbarTool; 2] {
    [
        ToolbarTool {
            id: "select",
            label: "Select",
        },
        ToolbarTool {
            id: "move",
            label: "Move",
        },
    ]
}

/// A setting rendered as a toggle inside a sidebar block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Stable key used for persistence.
    pub key: &'static str,
    /// Row caption.
    pub title: &'static str,
    /// Labels painted on the toggle itself.
    pub labels: LabelPair,
}

impl SidebarEntry {
    /// Storage key for this entry's persisted on/off state.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("lumen.settings.{}", self.key)
    }
}

/// Titled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    /// Block heading.
    pub title: &'static str,
    /// Entries in display order.
    pub entries: Vec<SidebarEntry>,
}

/// Settings layout shown by the default sidebar.
#[must_use]
pub fn default_sections() -> Vec<SidebarSection> {
    vec![SidebarSection {
        title: "Floor Grid",
        entries: vec![
            SidebarEntry {
                key: "floor_grid.visible",
                title: "Visible",
                labels: LabelPair::new("On", "Off"),
            },
            SidebarEntry {
                key: "floor_grid.draw_axis",
                title: "Draw Axis",
                labels: LabelPair::new("On", "Off"),
            },
        ],
    }]
}
