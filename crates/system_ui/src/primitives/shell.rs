use super::*;

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Stacking-context host for managed window frames.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom dock surface.
pub fn Dock(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class="dock"
            data-ui-primitive="true"
            data-ui-kind="dock"
            aria-label=aria_label.unwrap_or_else(|| "Dock".to_string())
        >
            <div class="dock-tray" data-ui-slot="dock-tray">{children()}</div>
        </nav>
    }
}

#[component]
/// One dock launcher tile.
pub fn DockButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] data_app: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="dock-item"
            data-ui-primitive="true"
            data-ui-kind="dock-item"
            data-app=data_app
            title=label.clone()
            aria-label=label
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
