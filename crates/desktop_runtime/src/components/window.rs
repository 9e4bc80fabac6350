use super::*;
use crate::apps;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Kind is immutable for the record's lifetime, so the content view is
    // built exactly once; app-local signals survive focus and drag updates.
    let kind = state.get_untracked().window(window_id).map(|w| w.kind);
    let contents = kind.map(apps::render_window_contents);

    let window = Signal::derive(move || state.get().window(window_id).cloned());
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());
    let is_focused = Signal::derive(move || state.get().focused == Some(window_id));
    let frame_style = Signal::derive(move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        let (dx, dy) = runtime
            .interaction
            .get()
            .dragging
            .filter(|session| session.window_id == window_id)
            .map(|session| session.translation())
            .unwrap_or((0, 0));
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.position.x + dx,
            win.position.y + dy,
            win.size.w,
            win.size.h,
            win.z_order
        )
    });

    // Pressing anywhere on the frame raises a background window; the topmost
    // window is left alone so its z_order is not bumped by plain clicks.
    let raise = move |_ev: web_sys::PointerEvent| {
        let desktop = state.get_untracked();
        if desktop.window(window_id).is_some() && desktop.top_window_id() != Some(window_id) {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let close = move |_ev: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <section
            class=move || {
                if is_focused.get() {
                    "desktop-window focused"
                } else {
                    "desktop-window"
                }
            }
            style=move || frame_style.get()
            data-scheme=kind.map(|kind| kind.color_scheme().token())
            role="dialog"
            aria-label=move || title.get()
            on:pointerdown=raise
        >
            <header class="titlebar" on:pointerdown=begin_drag>
                <div class="traffic-lights">
                    <button
                        type="button"
                        class="traffic-light traffic-light-close"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close(ev);
                        }
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </button>
                    <button
                        type="button"
                        class="traffic-light traffic-light-minimize"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| stop_mouse_event(&ev)
                    >
                        <Icon icon=IconName::Minus size=IconSize::Xs />
                    </button>
                    <button
                        type="button"
                        class="traffic-light traffic-light-maximize"
                        aria-label="Maximize window"
                        on:pointerdown=swallow_pointer
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| stop_mouse_event(&ev)
                    >
                        <Icon icon=IconName::Expand size=IconSize::Xs />
                    </button>
                </div>
                <div class="titlebar-title">{move || title.get()}</div>
                <div class="titlebar-spacer" aria-hidden="true"></div>
            </header>
            <div class="window-body">{contents}</div>
        </section>
    }
}
