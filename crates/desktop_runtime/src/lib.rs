//! Desktop runtime: window registry, window manager, launcher, taskbar, and shell components.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use window_manager::{WindowManager, WindowPlacement};
