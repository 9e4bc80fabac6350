use super::*;
use crate::apps;
use system_ui::{Dock, DockButton};

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Dock aria_label="Dock">
            {apps::app_registry()
                .iter()
                .map(|descriptor| {
                    let kind = descriptor.kind;
                    view! {
                        <DockButton
                            label=descriptor.dock_label
                            data_app=kind.slug()
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenApplication { kind });
                            })
                        >
                            <span
                                class="dock-icon"
                                data-app-icon=kind.icon_id()
                                aria-hidden="true"
                            ></span>
                        </DockButton>
                    }
                })
                .collect_view()}
        </Dock>
    }
}
