use super::*;

#[component]
/// Floating menu surface anchored under a menu-bar title or button.
pub fn MenuSurface(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-menu-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            role="menu"
            aria-label=aria_label
            on:mousedown=move |ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// One menu entry. Entries without a handler render as decorative items.
pub fn MenuItem(
    #[prop(into)] label: String,
    #[prop(optional)] on_select: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            role="menuitem"
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(ev);
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
/// Horizontal rule between menu groups.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
            role="separator"
        />
    }
}
