//! Reducer actions and transition logic for the desktop window manager.
//!
//! Every action is total: an action referencing a window id that is no longer
//! present is a silent no-op, never an error. A drag gesture may finish after
//! its window was already closed by another input, and the stale reference
//! must simply fall through.

use desktop_app_contract::AppKind;

use crate::apps;
use crate::model::{
    DesktopState, DragSession, InteractionState, MenuBarMenu, Point, PointerPosition, Size,
    WindowId, WindowRecord,
};

const CASCADE_ORIGIN_X: i32 = 80;
const CASCADE_ORIGIN_Y: i32 = 100;
const CASCADE_STEP: i32 = 30;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window hosting the given application kind.
    OpenApplication {
        /// Application to launch.
        kind: AppKind,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Close the focused window, if any, and dismiss the open menu.
    QuitFocusedApplication,
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Reposition a window unconditionally; frames may leave the canvas.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: Point,
    },
    /// Resize a window unconditionally.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New frame dimensions.
        size: Size,
    },
    /// Begin a title-bar drag.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the live pointer of an in-progress drag. Nothing is committed.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag: commit the translation, then raise the window.
    EndDrag,
    /// Toggle a menu-bar menu open or closed.
    ToggleMenu {
        /// Menu associated with the menu-bar button.
        menu: MenuBarMenu,
    },
    /// Dismiss any open menu-bar menu.
    CloseMenus,
}

/// Applies a [`DesktopAction`] to the desktop state.
///
/// This is the authoritative transition engine for window management: the
/// sole mutator of `z_order` and the sole assignor of `focused` to a window.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) {
    match action {
        DesktopAction::OpenApplication { kind } => {
            let window_id = next_window_id(state);
            let slot = state.windows.len() as i32;
            let record = WindowRecord {
                id: window_id,
                kind,
                title: kind.title().to_string(),
                position: Point {
                    x: CASCADE_ORIGIN_X + CASCADE_STEP * slot,
                    y: CASCADE_ORIGIN_Y + CASCADE_STEP * slot,
                },
                size: apps::default_window_size(kind),
                z_order: 0,
                minimized: false,
                maximized: false,
            };
            state.windows.push(record);
            focus_window_internal(state, window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window_internal(state, window_id);
        }
        DesktopAction::QuitFocusedApplication => {
            if let Some(window_id) = state.focused {
                close_window_internal(state, window_id);
                state.open_menu = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, window_id);
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.position = position;
            }
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.size = size;
            }
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            if state.window(window_id).is_some() {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    pointer,
                });
            }
        }
        DesktopAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                session.pointer = pointer;
            }
        }
        DesktopAction::EndDrag => {
            if let Some(session) = interaction.dragging.take() {
                let (dx, dy) = session.translation();
                if let Some(window) = find_window_mut(state, session.window_id) {
                    window.position = window.position.offset(dx, dy);
                    focus_window_internal(state, session.window_id);
                }
            }
        }
        DesktopAction::ToggleMenu { menu } => {
            state.open_menu = if state.open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
        }
        DesktopAction::CloseMenus => {
            state.open_menu = None;
        }
    }
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Raises `window_id` to the top of the stack and takes focus.
///
/// Focus is the only transition that advances `next_z_order`; the list order
/// of `windows` is never touched.
fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return;
    };
    state.next_z_order += 1;
    state.windows[index].z_order = state.next_z_order;
    state.focused = Some(window_id);
    state.open_menu = None;
}

/// Removes `window_id` if present. Focus is cleared but never handed to
/// another window.
fn close_window_internal(state: &mut DesktopState, window_id: WindowId) {
    state.windows.retain(|w| w.id != window_id);
    if state.focused == Some(window_id) {
        state.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, kind: AppKind) -> WindowId {
        reduce_desktop(state, interaction, DesktopAction::OpenApplication { kind });
        state.windows.last().expect("window").id
    }

    fn record(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("record")
    }

    #[test]
    fn open_assigns_distinct_ids_and_cascade_positions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for kind in [
            AppKind::Finder,
            AppKind::Safari,
            AppKind::Terminal,
            AppKind::TextEdit,
        ] {
            open(&mut state, &mut interaction, kind);
        }

        let ids: std::collections::HashSet<WindowId> =
            state.windows.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 4);
        for (slot, window) in state.windows.iter().enumerate() {
            let slot = slot as i32;
            assert_eq!(
                window.position,
                Point {
                    x: 80 + 30 * slot,
                    y: 100 + 30 * slot,
                }
            );
        }
    }

    #[test]
    fn open_uses_kind_defaults_and_focuses_the_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppKind::Finder);
        let second = open(&mut state, &mut interaction, AppKind::Terminal);

        assert_eq!(record(&state, second).title, "Terminal");
        assert_eq!(
            record(&state, second).size,
            apps::default_window_size(AppKind::Terminal)
        );
        assert_eq!(state.focused, Some(second));
        assert!(record(&state, second).z_order > record(&state, first).z_order);
        assert_eq!(state.top_window_id(), Some(second));
    }

    #[test]
    fn cascade_slot_is_the_count_of_open_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppKind::Finder);
        open(&mut state, &mut interaction, AppKind::Safari);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: first },
        );

        let third = open(&mut state, &mut interaction, AppKind::Xcode);
        assert_eq!(record(&state, third).position, Point { x: 110, y: 130 });
    }

    #[test]
    fn focus_bumps_only_the_target_z_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppKind::Finder);
        let b = open(&mut state, &mut interaction, AppKind::Safari);
        let c = open(&mut state, &mut interaction, AppKind::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        );

        assert_eq!(state.focused, Some(a));
        assert_eq!(state.next_z_order, 4);
        assert_eq!(record(&state, a).z_order, 4);
        assert_eq!(record(&state, b).z_order, 2);
        assert_eq!(record(&state, c).z_order, 3);
        // List order stays insertion order; only z_order expresses stacking.
        let order: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn close_removes_exactly_one_record_and_never_hands_off_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppKind::Finder);
        let b = open(&mut state, &mut interaction, AppKind::Safari);
        let a_before = record(&state, a).clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: b },
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(record(&state, a), &a_before);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn closing_an_unfocused_window_keeps_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppKind::Finder);
        let b = open(&mut state, &mut interaction, AppKind::Safari);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );

        assert_eq!(state.focused, Some(b));
    }

    #[test]
    fn operations_on_unknown_ids_are_byte_for_byte_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppKind::Finder);
        open(&mut state, &mut interaction, AppKind::Terminal);
        let stale = WindowId(99);
        let state_before = state.clone();
        let interaction_before = interaction;

        for action in [
            DesktopAction::CloseWindow { window_id: stale },
            DesktopAction::FocusWindow { window_id: stale },
            DesktopAction::MoveWindow {
                window_id: stale,
                position: Point { x: 5, y: 5 },
            },
            DesktopAction::ResizeWindow {
                window_id: stale,
                size: Size { w: 300, h: 200 },
            },
            DesktopAction::BeginDrag {
                window_id: stale,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ] {
            reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(state, state_before);
            assert_eq!(interaction, interaction_before);
        }
    }

    #[test]
    fn move_and_resize_touch_only_geometry_without_clamping() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppKind::Safari);
        let z_before = record(&state, win).z_order;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                position: Point { x: -250, y: -40 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: win,
                size: Size { w: 320, h: 180 },
            },
        );

        let moved = record(&state, win);
        assert_eq!(moved.position, Point { x: -250, y: -40 });
        assert_eq!(moved.size, Size { w: 320, h: 180 });
        assert_eq!(moved.kind, AppKind::Safari);
        assert_eq!(moved.z_order, z_before);
    }

    #[test]
    fn drag_updates_are_transient_until_the_gesture_ends() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppKind::TextEdit);
        let origin = record(&state, win).position;
        let z_before = record(&state, win).z_order;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );

        assert_eq!(record(&state, win).position, origin);
        assert_eq!(
            interaction.dragging.expect("session").translation(),
            (25, 40)
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);

        let ended = record(&state, win);
        assert_eq!(ended.position, origin.offset(25, 40));
        assert!(ended.z_order > z_before);
        assert_eq!(state.focused, Some(win));
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_finishing_after_close_is_a_silent_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppKind::Calculator);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );
        let state_after_close = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 40, y: 12 },
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);

        assert_eq!(state, state_after_close);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn quit_closes_the_focused_window_and_dismisses_the_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppKind::Finder);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Application,
            },
        );
        assert_eq!(state.open_menu, Some(MenuBarMenu::Application));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::QuitFocusedApplication,
        );

        assert_eq!(state.window(win), None);
        assert_eq!(state.focused, None);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn quit_with_nothing_focused_is_a_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Apple,
            },
        );
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::QuitFocusedApplication,
        );

        assert_eq!(state, before);
    }

    #[test]
    fn menu_toggle_cycles_and_switches_between_menus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Apple,
            },
        );
        assert_eq!(state.open_menu, Some(MenuBarMenu::Apple));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Application,
            },
        );
        assert_eq!(state.open_menu, Some(MenuBarMenu::Application));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Application,
            },
        );
        assert_eq!(state.open_menu, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuBarMenu::Apple,
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseMenus);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn scenario_open_three_click_close_and_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppKind::Finder);
        let b = open(&mut state, &mut interaction, AppKind::Safari);
        let c = open(&mut state, &mut interaction, AppKind::Terminal);
        assert_eq!(record(&state, a).z_order, 1);
        assert_eq!(record(&state, b).z_order, 2);
        assert_eq!(record(&state, c).z_order, 3);
        assert_eq!(state.focused, Some(c));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        );
        assert_eq!(record(&state, a).z_order, 4);
        assert_eq!(state.focused, Some(a));
        assert_eq!(record(&state, b).z_order, 2);
        assert_eq!(record(&state, c).z_order, 3);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: b },
        );
        let order: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(order, vec![a, c]);
        assert_eq!(state.focused, Some(a));

        let c_origin = record(&state, c).position;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: c,
                pointer: PointerPosition { x: 200, y: 120 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 210, y: 125 },
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);

        assert_eq!(record(&state, c).position, c_origin.offset(10, 5));
        assert_eq!(record(&state, c).z_order, 5);
        assert_eq!(state.focused, Some(c));
    }
}
