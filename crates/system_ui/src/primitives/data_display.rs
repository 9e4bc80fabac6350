use super::*;

#[component]
/// Horizontal toolbar strip.
pub fn ToolBar(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom status strip.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// One status-bar cell.
pub fn StatusBarItem(children: Children) -> impl IntoView {
    view! {
        <span class="ui-statusbar-item" data-ui-primitive="true" data-ui-kind="statusbar-item">
            {children()}
        </span>
    }
}

#[component]
/// Vertical content pane, usually one side of a split layout.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Small uppercase heading above a pane group.
pub fn PaneHeader(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <header class="ui-pane-header" data-ui-primitive="true" data-ui-kind="pane-header">
            {label}
        </header>
    }
}

#[component]
/// Sidebar tree list.
pub fn Tree(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class="ui-tree"
            data-ui-primitive="true"
            data-ui-kind="tree"
            role="tree"
            aria-label=aria_label
        >
            {children()}
        </ul>
    }
}

#[component]
/// One selectable tree row.
pub fn TreeItem(
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <li role="none">
            <button
                type="button"
                class="ui-tree-item"
                data-ui-primitive="true"
                data-ui-kind="tree-item"
                role="treeitem"
                aria-selected=move || bool_token(selected.get())
                data-ui-selected=move || bool_token(selected.get())
                on:click=move |ev| {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(ev);
                    }
                }
            >
                {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
                <span>{label}</span>
            </button>
        </li>
    }
}

#[component]
/// Monospaced terminal transcript surface.
pub fn TerminalSurface(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-terminal"
            data-ui-primitive="true"
            data-ui-kind="terminal"
            role="log"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// One transcript line.
pub fn TerminalLine(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="ui-terminal-line" data-ui-primitive="true" data-ui-kind="terminal-line">
            {text}
        </div>
    }
}

#[component]
/// Prompt line with a blinking caret.
pub fn TerminalPrompt(#[prop(into)] prompt: String) -> impl IntoView {
    view! {
        <div class="ui-terminal-prompt" data-ui-primitive="true" data-ui-kind="terminal-prompt">
            <span>{prompt}</span>
            <span class="ui-terminal-caret" aria-hidden="true"></span>
        </div>
    }
}
