//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopWindowLayer, Icon, IconName, IconSize};

use self::{dock::DesktopDock, menu_bar::MenuBar, window::DesktopWindow};
use crate::{
    model::{MenuBarMenu, PointerPosition, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the full desktop shell: wallpaper, window layer, menu bar, dock.
///
/// The root element owns the pointer-move/up phase of window drags so a fast
/// drag that leaves the title bar keeps tracking until release.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndDrag);
        }
    };

    let window_ids = move || {
        state
            .get()
            .windows
            .iter()
            .map(|w| w.id)
            .collect::<Vec<WindowId>>()
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopBackdrop>
                <div class="desktop-wallpaper" data-ui-slot="wallpaper-layer" aria-hidden="true"></div>
            </DesktopBackdrop>
            <DesktopWindowLayer>
                <For each=window_ids key=|window_id| *window_id let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>
            <MenuBar />
            <DesktopDock />
        </div>
    }
}
