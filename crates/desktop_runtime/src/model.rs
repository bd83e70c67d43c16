use serde::{Deserialize, Serialize};

pub const WINDOW_WIDTH: i32 = 700;
pub const WINDOW_HEIGHT: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    City,
    Department,
    Profession,
    About,
    User,
}

impl ContentType {
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Department,
        Self::Profession,
        Self::About,
        Self::User,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::City => "Gestión de Ciudades",
            Self::Department => "Gestión de Departamentos",
            Self::Profession => "Gestión de Profesiones",
            Self::About => "Acerca de...",
            Self::User => "Gestión de Usuarios",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Department => "department",
            Self::Profession => "profession",
            Self::About => "about",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub content_type: ContentType,
    pub title: String,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub anchor: PointerPosition,
    pub base_offset: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowDescriptor>,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    pub fn window_index(&self, window_id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == window_id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn is_open(&self, content_type: ContentType) -> bool {
        self.windows.iter().any(|w| w.content_type == content_type)
    }

    /// Whether `window_id` is last in the stacking order, minimized or not.
    pub fn is_topmost(&self, window_id: WindowId) -> bool {
        self.windows.last().is_some_and(|w| w.id == window_id)
    }

    /// Topmost window that is currently shown on the desktop.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().rev().find(|w| !w.minimized).map(|w| w.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_types_serialize_as_lowercase_tags() {
        let tags: Vec<String> = ContentType::ALL
            .iter()
            .map(|ty| serde_json::to_string(ty).expect("serialize"))
            .collect();
        assert_eq!(
            tags,
            vec![
                "\"city\"",
                "\"department\"",
                "\"profession\"",
                "\"about\"",
                "\"user\""
            ]
        );
        assert!(ContentType::ALL.iter().all(|ty| serde_json::to_string(ty)
            .expect("serialize")
            .contains(ty.token())));
    }

    #[test]
    fn focused_window_skips_minimized_top() {
        let mut state = DesktopState::default();
        for (id, minimized) in [(1, false), (2, true)] {
            state.windows.push(WindowDescriptor {
                id: WindowId(id),
                content_type: ContentType::ALL[id as usize],
                title: String::new(),
                minimized,
            });
        }
        assert_eq!(state.focused_window_id(), Some(WindowId(1)));
        assert!(!state.is_topmost(WindowId(1)));
        assert!(state.is_topmost(WindowId(2)));
    }
}
