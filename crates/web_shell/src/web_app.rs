use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn ShellApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta
            name="description"
            content="A macOS-style desktop shell mockup rendered entirely in the browser."
        />

        <main class="shell-root">
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
