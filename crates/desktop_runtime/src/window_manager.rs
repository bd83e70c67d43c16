//! Window placement, drag tracking, and stacking helpers used by the desktop reducer.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{
    DesktopState, DragSession, PointerPosition, WindowDescriptor, WindowId, WindowPosition,
};

/// Offset of the first cascaded window from the desktop origin.
pub const CASCADE_ORIGIN: i32 = 20;
/// Per-index cascade step.
pub const CASCADE_STEP: i32 = 20;
/// CSS z-index of the bottom window.
pub const Z_INDEX_BASE: i32 = 100;

/// Default position of the window at stacking index `index`.
pub fn cascade_position(index: usize) -> WindowPosition {
    let step = CASCADE_STEP.saturating_mul(i32::try_from(index).unwrap_or(i32::MAX));
    let offset = CASCADE_ORIGIN.saturating_add(step);
    WindowPosition {
        x: offset,
        y: offset,
    }
}

/// CSS z-index of the window at stacking index `index`.
pub fn z_index(index: usize) -> i32 {
    Z_INDEX_BASE.saturating_add(i32::try_from(index).unwrap_or(i32::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Per-window positions and the single active drag gesture.
///
/// Positions are keyed by id and may outlive the registry entry they belong to.
pub struct WindowManager {
    pub positions: BTreeMap<WindowId, WindowPosition>,
    pub dragging: Option<DragSession>,
}

impl WindowManager {
    /// Stored position of `window_id`, falling back to the cascade default for `index`.
    pub fn position_for(&self, window_id: WindowId, index: usize) -> WindowPosition {
        self.positions
            .get(&window_id)
            .copied()
            .unwrap_or_else(|| cascade_position(index))
    }

    /// Records a cascade default for a freshly opened window.
    ///
    /// The first cascade slot not currently held by any of `open_ids` is used, so a new window
    /// never lands exactly on top of another open window. An already stored position is kept.
    pub fn pin_default(
        &mut self,
        window_id: WindowId,
        open_ids: impl IntoIterator<Item = WindowId>,
    ) -> WindowPosition {
        if let Some(position) = self.positions.get(&window_id) {
            return *position;
        }
        let taken: BTreeSet<WindowPosition> = open_ids
            .into_iter()
            .filter(|id| *id != window_id)
            .filter_map(|id| self.positions.get(&id).copied())
            .collect();
        let position = (0..=taken.len())
            .map(cascade_position)
            .find(|slot| !taken.contains(slot))
            .unwrap_or_else(|| cascade_position(taken.len()));
        self.positions.insert(window_id, position);
        position
    }

    /// Starts a drag gesture anchored at `pointer`.
    pub fn begin_drag(&mut self, window_id: WindowId, index: usize, pointer: PointerPosition) {
        self.dragging = Some(DragSession {
            window_id,
            anchor: pointer,
            base_offset: self.position_for(window_id, index),
        });
    }

    /// Moves the dragged window so it follows `pointer`.
    ///
    /// Returns `false` when no drag is active.
    pub fn update_drag(&mut self, pointer: PointerPosition) -> bool {
        let Some(session) = self.dragging else {
            return false;
        };
        let position = session
            .base_offset
            .offset(pointer.x - session.anchor.x, pointer.y - session.anchor.y);
        self.positions.insert(session.window_id, position);
        true
    }

    /// Clears the drag slot; the last position stays stored.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render-ready placement of one visible window.
pub struct WindowPlacement {
    pub descriptor: WindowDescriptor,
    pub position: WindowPosition,
    pub z_index: i32,
}

fn placement(manager: &WindowManager, index: usize, window: &WindowDescriptor) -> WindowPlacement {
    WindowPlacement {
        descriptor: window.clone(),
        position: manager.position_for(window.id, index),
        z_index: z_index(index),
    }
}

/// Placement of a registered window, minimized or not.
pub fn window_placement(
    state: &DesktopState,
    manager: &WindowManager,
    window_id: WindowId,
) -> Option<WindowPlacement> {
    let index = state.window_index(window_id)?;
    Some(placement(manager, index, &state.windows[index]))
}

/// Non-minimized windows in stacking order with their resolved position and z-index.
pub fn visible_windows(state: &DesktopState, manager: &WindowManager) -> Vec<WindowPlacement> {
    state
        .windows
        .iter()
        .enumerate()
        .filter(|(_, window)| !window.minimized)
        .map(|(index, window)| placement(manager, index, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ContentType;
    use crate::registry::{open_window, toggle_minimize};

    #[test]
    fn cascade_steps_diagonally_from_origin() {
        assert_eq!(cascade_position(0), WindowPosition { x: 20, y: 20 });
        assert_eq!(cascade_position(3), WindowPosition { x: 80, y: 80 });
        assert_eq!(z_index(0), 100);
        assert_eq!(z_index(4), 104);
    }

    #[test]
    fn drag_follows_pointer_delta_from_anchor() {
        let mut manager = WindowManager::default();
        let id = WindowId(1);
        manager.positions.insert(id, cascade_position(1));
        manager.begin_drag(id, 1, PointerPosition { x: 300, y: 200 });

        assert!(manager.update_drag(PointerPosition { x: 310, y: 190 }));
        assert!(manager.update_drag(PointerPosition { x: 350, y: 230 }));
        assert_eq!(manager.positions[&id], WindowPosition { x: 90, y: 70 });

        manager.end_drag();
        assert!(!manager.update_drag(PointerPosition { x: 0, y: 0 }));
        assert_eq!(manager.positions[&id], WindowPosition { x: 90, y: 70 });
    }

    #[test]
    fn pinning_never_overwrites_a_dragged_position() {
        let mut manager = WindowManager::default();
        let id = WindowId(4);
        manager
            .positions
            .insert(id, WindowPosition { x: 500, y: 10 });
        assert_eq!(
            manager.pin_default(id, [id]),
            WindowPosition { x: 500, y: 10 }
        );
        assert_eq!(manager.position_for(id, 0), WindowPosition { x: 500, y: 10 });
    }

    #[test]
    fn pinning_takes_the_first_free_cascade_slot() {
        let mut manager = WindowManager::default();
        let (a, b, c) = (WindowId(1), WindowId(2), WindowId(3));
        manager.positions.insert(a, cascade_position(1));
        manager.positions.insert(b, cascade_position(0).offset(5, 0));

        assert_eq!(manager.pin_default(c, [a, b, c]), cascade_position(0));
        assert_eq!(manager.pin_default(WindowId(4), [a, b, c]), cascade_position(2));
    }

    #[test]
    fn minimized_windows_are_not_placed_but_keep_their_z_slot() {
        let mut state = DesktopState::default();
        let mut manager = WindowManager::default();
        for ty in [ContentType::City, ContentType::About, ContentType::User] {
            let id = open_window(&mut state, ty).expect("open");
            manager.pin_default(id, state.windows.iter().map(|w| w.id));
        }
        let about = state.windows[1].id;
        toggle_minimize(&mut state, about);

        let placed = visible_windows(&state, &manager);
        let summary: Vec<_> = placed
            .iter()
            .map(|p| (p.descriptor.content_type, p.position.x, p.z_index))
            .collect();
        assert_eq!(
            summary,
            vec![(ContentType::City, 20, 100), (ContentType::User, 60, 102)]
        );
    }
}
