use leptos::*;
use system_ui::prelude::*;

#[component]
pub fn TerminalApp() -> impl IntoView {
    view! {
        <div class="app app-terminal">
            <TerminalSurface aria_label="Terminal session">
                <TerminalLine text="Last login: Wed Aug  6 09:41:07 on ttys000" />
                <TerminalPrompt prompt="user@MacBook-Pro ~ %" />
            </TerminalSurface>
        </div>
    }
}
