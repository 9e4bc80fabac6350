use desktop_app_contract::AppKind;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
/// Stable identifier for a managed window, unique for the session lifetime.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-left corner of a window frame in desktop-canvas coordinates.
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window frame dimensions in pixels.
pub struct Size {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer location in desktop-canvas coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Menu-bar menus that track open state.
pub enum MenuBarMenu {
    /// The leftmost system menu.
    Apple,
    /// The active-application menu.
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Authoritative state for one open application window.
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub position: Point,
    pub size: Size,
    /// Stacking rank; higher draws on top. Assigned only by the focus
    /// transition.
    pub z_order: u64,
    /// Reserved flag; no transition consumes it yet.
    pub minimized: bool,
    /// Reserved flag; no transition consumes it yet.
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop session state: the open windows, focus pointer, and id/z counters.
///
/// `windows` keeps insertion order; stacking is derived from `z_order` alone,
/// never from list position.
pub struct DesktopState {
    pub next_window_id: u64,
    pub next_z_order: u64,
    pub windows: Vec<WindowRecord>,
    pub focused: Option<WindowId>,
    pub open_menu: Option<MenuBarMenu>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z_order: 0,
            windows: Vec::new(),
            focused: None,
            open_menu: None,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn focused_window(&self) -> Option<&WindowRecord> {
        self.focused.and_then(|window_id| self.window(window_id))
    }

    /// Window currently holding the greatest stacking rank, if any.
    pub fn top_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A live title-bar drag. The dragged record's `position` is untouched until
/// the gesture ends; presentation adds [`DragSession::translation`] on top.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub pointer: PointerPosition,
}

impl DragSession {
    pub fn translation(&self) -> (i32, i32) {
        (
            self.pointer.x - self.pointer_start.x,
            self.pointer.y - self.pointer_start.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Transient pointer-interaction state, kept apart from [`DesktopState`].
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_translation_is_pointer_delta() {
        let session = DragSession {
            window_id: WindowId(1),
            pointer_start: PointerPosition { x: 10, y: 20 },
            pointer: PointerPosition { x: 4, y: 55 },
        };
        assert_eq!(session.translation(), (-6, 35));
    }

    #[test]
    fn top_window_is_none_for_empty_desktop() {
        let state = DesktopState::default();
        assert_eq!(state.top_window_id(), None);
        assert_eq!(state.focused_window(), None);
    }
}
