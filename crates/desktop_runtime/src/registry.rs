//! Window registry: the ordered list of open window descriptors.
//!
//! Sequence order is stacking order, last element on top. Only [`focus_window`] and
//! [`restore_window`] reorder the sequence. Operations on ids that are not in the registry leave
//! it untouched and report `false`.

use crate::model::{ContentType, DesktopState, WindowDescriptor, WindowId};

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

/// Opens a window for `content_type` unless one is already open.
///
/// Returns the new descriptor's id, or `None` when the type was already present. An already-open
/// window is neither focused nor restored.
pub fn open_window(state: &mut DesktopState, content_type: ContentType) -> Option<WindowId> {
    if state.is_open(content_type) {
        return None;
    }
    let id = next_window_id(state);
    state.windows.push(WindowDescriptor {
        id,
        content_type,
        title: content_type.title().to_string(),
        minimized: false,
    });
    Some(id)
}

/// Removes `window_id` from the registry.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != window_id);
    state.windows.len() != before
}

/// Flips the minimized flag of `window_id` in place.
pub fn toggle_minimize(state: &mut DesktopState, window_id: WindowId) -> bool {
    match state.windows.iter_mut().find(|w| w.id == window_id) {
        Some(window) => {
            window.minimized = !window.minimized;
            true
        }
        None => false,
    }
}

/// Moves `window_id` to the top of the stack.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.window_index(window_id) else {
        return false;
    };
    if index + 1 != state.windows.len() {
        let window = state.windows.remove(index);
        state.windows.push(window);
    }
    true
}

/// Raises `window_id` and clears its minimized flag.
pub fn restore_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    if !focus_window(state, window_id) {
        return false;
    }
    if let Some(window) = state.windows.last_mut() {
        window.minimized = false;
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(state: &DesktopState) -> Vec<u64> {
        state.windows.iter().map(|w| w.id.0).collect()
    }

    #[test]
    fn open_appends_descriptor_with_title_and_fresh_id() {
        let mut state = DesktopState::default();
        let city = open_window(&mut state, ContentType::City).expect("city");
        let about = open_window(&mut state, ContentType::About).expect("about");

        assert_ne!(city, about);
        assert_eq!(state.windows[1].title, "Acerca de...");
        assert!(!state.windows[0].minimized);
        assert_eq!(ids(&state), vec![city.0, about.0]);
    }

    #[test]
    fn duplicate_open_is_a_no_op() {
        let mut state = DesktopState::default();
        let city = open_window(&mut state, ContentType::City).expect("city");
        open_window(&mut state, ContentType::User).expect("user");
        toggle_minimize(&mut state, city);
        let before = state.clone();

        assert_eq!(open_window(&mut state, ContentType::City), None);
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_ids_leave_registry_untouched() {
        let mut state = DesktopState::default();
        open_window(&mut state, ContentType::City);
        let before = state.clone();
        let ghost = WindowId(99);

        assert!(!close_window(&mut state, ghost));
        assert!(!toggle_minimize(&mut state, ghost));
        assert!(!focus_window(&mut state, ghost));
        assert!(!restore_window(&mut state, ghost));
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_toggles_without_reordering() {
        let mut state = DesktopState::default();
        let city = open_window(&mut state, ContentType::City).expect("city");
        open_window(&mut state, ContentType::Profession);

        assert!(toggle_minimize(&mut state, city));
        assert!(state.windows[0].minimized);
        assert!(toggle_minimize(&mut state, city));
        assert!(!state.windows[0].minimized);
        assert_eq!(state.windows[0].id, city);
    }

    #[test]
    fn restore_raises_and_unminimizes() {
        let mut state = DesktopState::default();
        let city = open_window(&mut state, ContentType::City).expect("city");
        let user = open_window(&mut state, ContentType::User).expect("user");
        toggle_minimize(&mut state, city);

        assert!(restore_window(&mut state, city));
        assert_eq!(ids(&state), vec![user.0, city.0]);
        assert!(!state.windows[1].minimized);
    }
}
