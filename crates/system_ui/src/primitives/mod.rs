//! Shared structural, shell, overlay, data-display, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod overlays;
mod shell;

pub use controls::{RangeField, SelectField, Switch, TextArea, TextField, ToggleRow};
pub use data_display::{
    Pane, PaneHeader, StatusBar, StatusBarItem, TerminalLine, TerminalPrompt, TerminalSurface,
    ToolBar, Tree, TreeItem,
};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};
pub use shell::{DesktopBackdrop, DesktopWindowLayer, Dock, DockButton};

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
