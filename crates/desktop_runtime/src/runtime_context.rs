//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the reducer container: state and interaction signals plus
//! the single dispatch callback every surface mutates through. UI composition
//! stays in [`crate::components`].

use leptos::*;

use crate::{
    boot,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`]
/// values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag-interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens any
/// boot-query applications.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut pointer = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_pointer = pointer;

        reduce_desktop(&mut desktop, &mut pointer, action);

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if pointer != previous_pointer {
            interaction.set(pointer);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        dispatch,
    };
    provide_context(runtime);

    for kind in boot::current_boot_apps() {
        runtime.dispatch_action(DesktopAction::OpenApplication { kind });
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
