//! Yew widgets rendered by the application shell.
pub(crate) mod button;
pub(crate) mod icons;
pub(crate) mod sidebar;
pub(crate) mod toggle_button;
pub(crate) mod toolbar;
