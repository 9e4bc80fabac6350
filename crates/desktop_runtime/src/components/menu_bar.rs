use std::time::Duration;

use super::*;
use crate::host::ClockSnapshot;
use system_ui::{MenuItem, MenuSeparator, MenuSurface};

const FALLBACK_APP_TITLE: &str = "Finder";

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Any press outside a menu surface or menu-bar button dismisses the menu;
    // those elements stop mousedown propagation themselves.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if state.get_untracked().open_menu.is_some() {
            runtime.dispatch_action(DesktopAction::CloseMenus);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let active_title = Signal::derive(move || {
        state
            .get()
            .focused_window()
            .map(|w| w.title.clone())
            .unwrap_or_else(|| FALLBACK_APP_TITLE.to_string())
    });
    let apple_open = Signal::derive(move || state.get().open_menu == Some(MenuBarMenu::Apple));
    let app_open = Signal::derive(move || state.get().open_menu == Some(MenuBarMenu::Application));

    let toggle_apple = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::ToggleMenu {
            menu: MenuBarMenu::Apple,
        });
    };
    let toggle_app = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::ToggleMenu {
            menu: MenuBarMenu::Application,
        });
    };
    let quit = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::QuitFocusedApplication);
    });

    view! {
        <header class="menu-bar" data-ui-kind="menu-bar">
            <div class="menu-bar-left">
                <div class="menu-bar-entry">
                    <button
                        type="button"
                        class="menu-bar-button menu-bar-apple"
                        aria-label="Apple menu"
                        aria-haspopup="menu"
                        aria-expanded=move || apple_open.get()
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=toggle_apple
                    >
                        <Icon icon=IconName::Apple size=IconSize::Sm />
                    </button>
                    <Show when=move || apple_open.get() fallback=|| ()>
                        <MenuSurface id="apple-menu" aria_label="Apple menu">
                            <MenuItem label="About This Mac" />
                            <MenuSeparator />
                            <MenuItem label="System Settings..." />
                            <MenuItem label="App Store..." />
                            <MenuSeparator />
                            <MenuItem label="Sleep" />
                            <MenuItem label="Restart..." />
                            <MenuItem label="Shut Down..." />
                            <MenuSeparator />
                            <MenuItem label="Lock Screen" />
                            <MenuItem label="Log Out User..." />
                        </MenuSurface>
                    </Show>
                </div>
                <div class="menu-bar-entry">
                    <button
                        type="button"
                        class="menu-bar-button menu-bar-app-title"
                        aria-haspopup="menu"
                        aria-expanded=move || app_open.get()
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=toggle_app
                    >
                        {move || active_title.get()}
                    </button>
                    <Show when=move || app_open.get() fallback=|| ()>
                        <MenuSurface id="application-menu" aria_label="Application menu">
                            <MenuItem label=format!("About {}", active_title.get_untracked()) />
                            <MenuSeparator />
                            <MenuItem label="Settings..." />
                            <MenuSeparator />
                            <MenuItem label="Quit" on_select=quit />
                        </MenuSurface>
                    </Show>
                </div>
                <nav class="menu-bar-static" aria-label="Application menus">
                    {["File", "Edit", "View", "Go", "Window", "Help"]
                        .into_iter()
                        .map(|label| view! { <span class="menu-bar-label">{label}</span> })
                        .collect_view()}
                </nav>
            </div>
            <div class="menu-bar-right">
                <span class="menu-bar-status" aria-label="Battery">
                    <Icon icon=IconName::Battery size=IconSize::Sm />
                </span>
                <span class="menu-bar-status" aria-label="Wi-Fi">
                    <Icon icon=IconName::Wifi size=IconSize::Sm />
                </span>
                <span class="menu-bar-status" aria-label="Spotlight">
                    <Icon icon=IconName::Search size=IconSize::Sm />
                </span>
                <span class="menu-bar-status" aria-label="Control Center">
                    <Icon icon=IconName::Toggles size=IconSize::Sm />
                </span>
                <span class="menu-bar-clock">{move || clock.get().label()}</span>
            </div>
        </header>
    }
}
