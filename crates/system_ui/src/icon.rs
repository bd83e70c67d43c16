//! Glyph catalog shared by the desktop chrome and the record forms.
//!
//! Callers pick an [`IconName`]; [`Icon`] wraps its outline path in a 24x24 SVG.

use leptos::*;

/// Outline glyphs available to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Cities.
    Building,
    /// Departments.
    Map,
    /// Professions.
    Briefcase,
    /// About panel.
    Info,
    /// Users.
    People,
    /// Signed-in user chip.
    Person,
    /// Start button.
    Launcher,
    /// Session end.
    SignOut,
    /// New record.
    Add,
    /// Edit record.
    Edit,
    /// Delete record.
    Delete,
    /// Save.
    Checkmark,
    /// Technology list.
    Code,
    /// Credits.
    Heart,
    /// Minimize control.
    WindowMinimize,
    /// Close control and form cancel.
    Dismiss,
}

struct Glyph {
    token: &'static str,
    path: &'static str,
}

impl IconName {
    const fn glyph(self) -> Glyph {
        let (token, path) = match self {
            Self::Building => (
                "building",
                "M6.75 2A2.75 2.75 0 0 0 4 4.75v15.5c0 .41.34.75.75.75h14.5c.41 0 .75-.34.75-.75V10.75A2.75 2.75 0 0 0 17.25 8H15V4.75A2.75 2.75 0 0 0 12.25 2h-5.5ZM5.5 4.75c0-.69.56-1.25 1.25-1.25h5.5c.69 0 1.25.56 1.25 1.25V19.5h-8V4.75ZM15 19.5V9.5h2.25c.69 0 1.25.56 1.25 1.25v8.75H15ZM7 6.25c0-.41.34-.75.75-.75h1a.75.75 0 0 1 0 1.5h-1A.75.75 0 0 1 7 6.25Zm3.5 0c0-.41.34-.75.75-.75h.5a.75.75 0 0 1 0 1.5h-.5a.75.75 0 0 1-.75-.75ZM7 9.75c0-.41.34-.75.75-.75h1a.75.75 0 0 1 0 1.5h-1A.75.75 0 0 1 7 9.75Zm3.5 0c0-.41.34-.75.75-.75h.5a.75.75 0 0 1 0 1.5h-.5a.75.75 0 0 1-.75-.75ZM7 13.25c0-.41.34-.75.75-.75h1a.75.75 0 0 1 0 1.5h-1a.75.75 0 0 1-.75-.75Zm3.5 0c0-.41.34-.75.75-.75h.5a.75.75 0 0 1 0 1.5h-.5a.75.75 0 0 1-.75-.75Z",
            ),
            Self::Map => (
                "map",
                "M8.97 3.22a.75.75 0 0 1 .56-.03l5.47 1.9 5.47-1.9A.75.75 0 0 1 21.5 3.9v14.25c0 .32-.2.6-.5.71l-5.75 2a.75.75 0 0 1-.5 0L9.25 18.95l-5.25 1.83a.75.75 0 0 1-1-.71V5.85c0-.32.2-.6.5-.71l5.47-1.92ZM8.5 5.06 4.5 6.4v12.6l4-1.39V5.06Zm1.5 12.55 4 1.39V6.39l-4-1.39V17.6Zm5.5 1.39 4.5-1.57V4.95l-4.5 1.57V19Z",
            ),
            Self::Briefcase => (
                "briefcase",
                "M8 5.25V6H5.25A3.25 3.25 0 0 0 2 9.25v8.5C2 19.55 3.46 21 5.25 21h13.5c1.8 0 3.25-1.46 3.25-3.25v-8.5C22 7.45 20.54 6 18.75 6H16v-.75C16 4.01 15 3 13.75 3h-3.5C9.01 3 8 4 8 5.25Zm2.25-.75h3.5c.41 0 .75.34.75.75V6h-5v-.75c0-.41.34-.75.75-.75ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h13.5c.97 0 1.75.78 1.75 1.75v2.25h-17V9.25Zm0 3.75h17v4.75c0 .97-.78 1.75-1.75 1.75H5.25c-.97 0-1.75-.78-1.75-1.75V13Z",
            ),
            Self::Info => (
                "info",
                "M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 7a.75.75 0 0 1 .74.65l.01.1v5.5a.75.75 0 0 1-1.5.1v-5.6c0-.41.34-.75.75-.75Zm0-3.25a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z",
            ),
            Self::People => (
                "people",
                "M5.5 7a3.5 3.5 0 1 1 7 0 3.5 3.5 0 0 1-7 0ZM9 5a2 2 0 1 0 0 4 2 2 0 0 0 0-4Zm7.5 3a2.5 2.5 0 1 1 5 0 2.5 2.5 0 0 1-5 0Zm2.5-1a1 1 0 1 0 0 2 1 1 0 0 0 0-2ZM4.25 13C3.01 13 2 14 2 15.25v.3c0 .58.22 1.4 1.01 2.12C3.8 18.38 5.15 19 9 19s5.2-.62 5.99-1.33A2.77 2.77 0 0 0 16 15.55v-.3C16 14.01 15 13 13.75 13h-9.5ZM3.5 15.25c0-.41.34-.75.75-.75h9.5c.41 0 .75.34.75.75v.3c0 .17-.07.52-.51.92-.46.41-1.54.98-4.99.98s-4.53-.57-4.99-.98c-.44-.4-.51-.75-.51-.92v-.3Zm13.92 3.7c1.85-.13 2.87-.58 3.5-1.17.73-.7.84-1.47.84-1.74v-.29c0-1.24-1-2.25-2.25-2.25h-2.6c.4.43.7.95.87 1.5h1.73c.41 0 .75.34.75.75v.29c0 .1-.05.43-.38.73-.3.29-.98.64-2.46.74v.07c0 .5-.1.99-.3 1.44l.3-.07Z",
            ),
            Self::Person => (
                "person",
                "M17.75 14C19 14 20 15 20 16.25v.57c0 .9-.32 1.76-.9 2.44C17.53 21.1 15.15 22 12 22c-3.15 0-5.53-.9-7.1-2.74a3.75 3.75 0 0 1-.9-2.43v-.58C4 15.01 5.01 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .53.2 1.05.54 1.46C7.3 19.76 9.26 20.5 12 20.5c2.74 0 4.7-.74 5.96-2.21.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75ZM12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z",
            ),
            Self::Launcher => (
                "launcher",
                "M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z",
            ),
            Self::SignOut => (
                "sign-out",
                "M8.5 11.25a.75.75 0 0 1 .75-.75h9.19l-2.72-2.72a.75.75 0 1 1 1.06-1.06l4 4c.3.3.3.77 0 1.06l-4 4a.75.75 0 1 1-1.06-1.06L18.44 12H9.25a.75.75 0 0 1-.75-.75ZM3 5.25C3 4.01 4 3 5.25 3h6.5C12.99 3 14 4 14 5.25v1.5a.75.75 0 0 1-1.5 0v-1.5a.75.75 0 0 0-.75-.75h-6.5a.75.75 0 0 0-.75.75v13.5c0 .41.34.75.75.75h6.5c.41 0 .75-.34.75-.75v-1.5a.75.75 0 0 1 1.5 0v1.5c0 1.24-1 2.25-2.25 2.25h-6.5C4.01 21 3 20 3 18.75V5.25Z",
            ),
            Self::Add => (
                "add",
                "M11.75 3a.75.75 0 0 1 .74.65l.01.1v7.5h7.5a.75.75 0 0 1 .1 1.5h-7.6v7.5a.75.75 0 0 1-1.5.1v-7.6h-7.5a.75.75 0 0 1-.1-1.5H11V3.75c0-.41.34-.75.75-.75Z",
            ),
            Self::Edit => (
                "edit",
                "M20.95 3.05a3.58 3.58 0 0 0-5.06 0L3.94 15c-.4.4-.68.9-.82 1.45l-1.1 4.62a.75.75 0 0 0 .9.9l4.63-1.1c.55-.13 1.05-.41 1.44-.81L20.95 8.1a3.58 3.58 0 0 0 0-5.06Zm-4 1.06a2.08 2.08 0 1 1 2.94 2.94l-.89.9L16.06 5l.9-.9ZM15 6.06 17.94 9l-10 10c-.2.2-.45.34-.73.4l-3.45.83.82-3.45c.07-.28.2-.53.4-.73L15 6.06Z",
            ),
            Self::Delete => (
                "delete",
                "M10 5h4a2 2 0 1 0-4 0ZM8.5 5a3.5 3.5 0 1 1 7 0h5.75a.75.75 0 0 1 0 1.5h-1.32l-1.17 12.11A3.75 3.75 0 0 1 15.03 22H8.97a3.75 3.75 0 0 1-3.73-3.39L4.07 6.5H2.75a.75.75 0 0 1 0-1.5H8.5Zm2 4.75a.75.75 0 0 0-1.5 0v7.5a.75.75 0 0 0 1.5 0v-7.5ZM14.25 9c.41 0 .75.34.75.75v7.5a.75.75 0 0 1-1.5 0v-7.5c0-.41.34-.75.75-.75Zm-7.52 9.47c.07.83.78 1.48 1.62 1.48h6.06c.84 0 1.55-.65 1.63-1.48L17.2 6.5H6.8l1.13 11.97Z",
            ),
            Self::Checkmark => (
                "checkmark",
                "M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z",
            ),
            Self::Code => (
                "code",
                "M8.78 6.22a.75.75 0 0 1 0 1.06L4.06 12l4.72 4.72a.75.75 0 1 1-1.06 1.06l-5.25-5.25a.75.75 0 0 1 0-1.06l5.25-5.25a.75.75 0 0 1 1.06 0Zm6.44 0a.75.75 0 0 1 1.06 0l5.25 5.25c.3.3.3.77 0 1.06l-5.25 5.25a.75.75 0 1 1-1.06-1.06L19.94 12l-4.72-4.72a.75.75 0 0 1 0-1.06Z",
            ),
            Self::Heart => (
                "heart",
                "m12.82 5.58-.82.82-.83-.82a5.37 5.37 0 0 0-7.6 7.6l7.9 7.9c.3.29.77.29 1.06 0l7.9-7.9a5.38 5.38 0 1 0-7.61-7.6Zm6.55 6.54L12 19.5l-7.37-7.38a3.87 3.87 0 1 1 5.48-5.48l1.36 1.36c.3.3.79.29 1.08-.02l1.33-1.34a3.88 3.88 0 0 1 5.49 5.48Z",
            ),
            Self::WindowMinimize => (
                "window-minimize",
                "M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z",
            ),
            Self::Dismiss => (
                "dismiss",
                "m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z",
            ),
        };
        Glyph { token, path }
    }

    /// Name written to `data-icon`.
    pub const fn token(self) -> &'static str {
        self.glyph().token
    }
}

/// Rendered edge length of an icon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// 14px, table row actions and the user chip.
    Xs,
    /// 16px, buttons and taskbar entries.
    #[default]
    Sm,
    /// 20px, launcher entries.
    Md,
    /// 24px, panel headers.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Inline SVG for one catalog glyph, hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let Glyph { token, path } = icon.glyph();
    let edge = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=token
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=edge.clone()
            height=edge
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_step_up_from_table_actions_to_headers() {
        let edges: Vec<u16> = [IconSize::Xs, IconSize::Sm, IconSize::Md, IconSize::Lg]
            .into_iter()
            .map(IconSize::px)
            .collect();
        assert_eq!(edges, vec![14, 16, 20, 24]);
    }

    #[test]
    fn glyph_tokens_are_kebab_case() {
        assert_eq!(IconName::SignOut.token(), "sign-out");
        assert_eq!(IconName::WindowMinimize.token(), "window-minimize");
    }
}
