//! Shared UI primitive library for the desktop shell and the built-in
//! application mockups.
//!
//! The crate owns reusable Leptos primitives, a centralized inline-SVG icon
//! API, and the stable `data-ui-*` DOM contract consumed by the shell CSS
//! layers. Apps compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopWindowLayer, Dock, DockButton, MenuItem, MenuSeparator, MenuSurface,
    Pane, PaneHeader, RangeField, SelectField, StatusBar, StatusBarItem, Switch, TerminalLine,
    TerminalPrompt, TerminalSurface, TextArea, TextField, ToggleRow, ToolBar, Tree, TreeItem,
};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        DesktopBackdrop, DesktopWindowLayer, Dock, DockButton, Icon, IconName, IconSize, MenuItem,
        MenuSeparator, MenuSurface, Pane, PaneHeader, RangeField, SelectField, StatusBar,
        StatusBarItem, Switch, TerminalLine, TerminalPrompt, TerminalSurface, TextArea, TextField,
        ToggleRow, ToolBar, Tree, TreeItem,
    };
}
