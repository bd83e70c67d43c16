//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle handed to window contents.
    pub host: StoredValue<HostServices>,
    /// Name of the logged-in user.
    pub username: StoredValue<String>,
    /// Window registry and launcher menu state.
    pub state: RwSignal<DesktopState>,
    /// Window positions and the active drag gesture.
    pub interaction: RwSignal<WindowManager>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Invoked once the session has been discarded.
    pub on_session_end: Callback<()>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Host services assembled by the entry layer.
    host_services: HostServices,
    /// Name of the logged-in user.
    #[prop(into)]
    username: String,
    /// Called after "Cerrar Sesión" discarded every window.
    on_session_end: Callback<()>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let username = store_value(username);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(WindowManager::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut manager = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_manager = manager.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut manager, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if manager != previous_manager {
            interaction.set(manager);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        username,
        state,
        interaction,
        effects,
        dispatch,
        on_session_end,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

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
