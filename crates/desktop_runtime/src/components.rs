//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{menus::StartMenu, taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
    window_manager::visible_windows,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the desktop surface, open windows, launcher menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;

    // Sorted by id so focus changes restack through z-index without moving DOM nodes.
    let visible_ids = move || {
        let mut ids: Vec<WindowId> = interaction.with_untracked(|manager| {
            state.with(|desktop| {
                visible_windows(desktop, manager)
                    .into_iter()
                    .map(|placement| placement.descriptor.id)
                    .collect()
            })
        });
        ids.sort();
        ids
    };

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if interaction.with_untracked(|manager| manager.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        if interaction.with_untracked(|manager| manager.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    });

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
            on_pointercancel=on_pointer_end
            on_pointerleave=on_pointer_end
        >
            <DesktopBackdrop>
                <DesktopWindowLayer>
                    <For each=visible_ids key=|id| id.0 let:window_id>
                        <DesktopWindow window_id />
                    </For>
                </DesktopWindowLayer>
                <StartMenu />
            </DesktopBackdrop>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
