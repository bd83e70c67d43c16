use desktop_app_about::AboutApp;
use desktop_app_catalog::{CatalogApp, CatalogKind};
use desktop_app_users::UsersApp;
use leptos::*;
use platform_host::HostServices;

use crate::model::ContentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherEntry {
    pub content_type: ContentType,
    pub launcher_label: &'static str,
}

const LAUNCHER_ENTRIES: [LauncherEntry; 5] = [
    LauncherEntry {
        content_type: ContentType::City,
        launcher_label: "Ciudades",
    },
    LauncherEntry {
        content_type: ContentType::Department,
        launcher_label: "Departamentos",
    },
    LauncherEntry {
        content_type: ContentType::Profession,
        launcher_label: "Profesiones",
    },
    LauncherEntry {
        content_type: ContentType::About,
        launcher_label: "Acerca de...",
    },
    LauncherEntry {
        content_type: ContentType::User,
        launcher_label: "Usuarios",
    },
];

/// Launcher menu entries in display order.
pub fn launcher_entries() -> &'static [LauncherEntry] {
    &LAUNCHER_ENTRIES
}

pub fn render_window_contents(content_type: ContentType, host: HostServices) -> View {
    match content_type {
        ContentType::City => view! { <CatalogApp kind=CatalogKind::City host /> }.into_view(),
        ContentType::Department => {
            view! { <CatalogApp kind=CatalogKind::Department host /> }.into_view()
        }
        ContentType::Profession => {
            view! { <CatalogApp kind=CatalogKind::Profession host /> }.into_view()
        }
        ContentType::About => view! { <AboutApp /> }.into_view(),
        ContentType::User => view! { <UsersApp host /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launcher_lists_every_content_type_once_in_menu_order() {
        let labels: Vec<_> = launcher_entries().iter().map(|e| e.launcher_label).collect();
        assert_eq!(
            labels,
            vec![
                "Ciudades",
                "Departamentos",
                "Profesiones",
                "Acerca de...",
                "Usuarios"
            ]
        );
        let types: Vec<_> = launcher_entries().iter().map(|e| e.content_type).collect();
        assert_eq!(types, ContentType::ALL.to_vec());
    }
}
