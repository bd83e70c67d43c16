//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    model::{ContentType, DesktopState, PointerPosition, WindowId},
    registry::{close_window, focus_window, open_window, restore_window, toggle_minimize},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open a window from the launcher menu and close the menu.
    ///
    /// Opening a content type that already has a window changes nothing but the menu.
    LaunchFromMenu {
        /// Content selected in the menu.
        content_type: ContentType,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Flip a window between shown and minimized.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Taskbar activation: raise the window and restore it if minimized.
    ActivateTaskbarEntry {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Discard every window and leave the desktop session.
    EndSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Return the site to the logged-out screen.
    EndSession,
}

/// Applies a [`DesktopAction`] to the registry and window manager and collects side effects.
///
/// Actions naming a window id that is not in the registry leave both states unchanged. A drag
/// that outlives its window keeps updating only the position map until it ends.
pub fn reduce_desktop(
    state: &mut DesktopState,
    manager: &mut WindowManager,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LaunchFromMenu { content_type } => {
            open_and_pin(state, manager, content_type);
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, window_id);
        }
        DesktopAction::ToggleMinimize { window_id } => {
            toggle_minimize(state, window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id);
        }
        DesktopAction::ActivateTaskbarEntry { window_id } => {
            restore_window(state, window_id);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if let Some(index) = state.window_index(window_id) {
                manager.begin_drag(window_id, index, pointer);
                focus_window(state, window_id);
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            manager.update_drag(pointer);
        }
        DesktopAction::EndMove => {
            manager.end_drag();
        }
        DesktopAction::EndSession => {
            *state = DesktopState::default();
            *manager = WindowManager::default();
            effects.push(RuntimeEffect::EndSession);
        }
    }
    effects
}

fn open_and_pin(state: &mut DesktopState, manager: &mut WindowManager, content_type: ContentType) {
    if let Some(window_id) = open_window(state, content_type) {
        manager.pin_default(window_id, state.windows.iter().map(|w| w.id));
    }
}
