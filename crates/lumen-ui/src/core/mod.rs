//! Core, DOM-free primitives for the widget layer.
pub mod css;
pub mod error;
pub mod identity;
pub mod labels;
pub mod registry;
pub mod scoped_style;
pub mod widgets;
