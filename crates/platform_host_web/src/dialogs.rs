//! Blocking browser dialogs used by destructive form actions.

/// Shows `window.confirm(prompt)` and returns the user's answer.
///
/// A missing window or a dialog failure counts as a refusal. Non-wasm builds always confirm so
/// form workflows stay exercisable on the host toolchain.
pub fn confirm_action(prompt: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = prompt;
        true
    }
}
