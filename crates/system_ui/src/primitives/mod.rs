//! Component primitives grouped by the surface they dress: desktop chrome, launcher overlays,
//! record tables, form controls, and layout.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

/// Declares a closed set of styling tokens rendered into `data-ui-*` attributes.
macro_rules! ui_tokens {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

/// Declares a primitive that only wraps its children in a tagged, classed element.
macro_rules! container_primitive {
    ($(#[$meta:meta])* $name:ident, $tag:ident, $class:tt, $kind:tt) => {
        $(#[$meta])*
        #[component]
        pub fn $name(children: Children) -> impl IntoView {
            view! {
                <$tag class=$class data-ui-primitive="true" data-ui-kind=$kind>
                    {children()}
                </$tag>
            }
        }
    };
}

mod controls;
mod data_display;
mod layout;
mod overlays;
mod shell;

pub use controls::{Button, FieldGroup, SelectField, Switch, TextField};
pub use data_display::{Badge, Card, DataTable, EmptyState, Heading, InlineNotice, Text};
pub use layout::{Cluster, Grid, Stack};
pub use overlays::{LauncherMenu, MenuBackdrop, MenuItem, MenuSeparator};
pub use shell::{
    ClockButton, DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Taskbar, TaskbarButton,
    TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

ui_tokens! {
    /// Shadow depth of a card surface.
    Elevation default Raised {
        /// Resting panel above the window body.
        Raised => "raised",
        /// Floating surface such as the login card.
        Overlay => "overlay",
    }
}

ui_tokens! {
    /// Visual emphasis of a button or menu entry.
    ButtonVariant default Standard {
        /// Neutral action.
        Standard => "standard",
        /// Form submission.
        Primary => "primary",
        /// Borderless chrome control.
        Quiet => "quiet",
        /// Destructive action such as delete or sign out.
        Danger => "danger",
    }
}

ui_tokens! {
    /// Button density.
    ButtonSize default Md {
        /// Row actions inside record tables.
        Sm => "sm",
        /// Regular form buttons.
        Md => "md",
    }
}

ui_tokens! {
    /// Typographic role of a text run.
    TextRole default Body {
        /// Paragraph copy.
        Body => "body",
        /// Section label.
        Label => "label",
        /// Small print.
        Caption => "caption",
        /// Panel title.
        Title => "title",
    }
}

ui_tokens! {
    /// Color tone for text, badges, and notices.
    TextTone default Primary {
        /// Default foreground.
        Primary => "primary",
        /// Muted foreground.
        Secondary => "secondary",
        /// Highlight.
        Accent => "accent",
        /// Completed operation or active record.
        Success => "success",
        /// Failed operation or inactive record.
        Danger => "danger",
    }
}

ui_tokens! {
    /// Spacing between children of a layout primitive.
    LayoutGap default Md {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
    }
}

ui_tokens! {
    /// Inner padding of a layout or card primitive.
    LayoutPadding default Md {
        /// Flush.
        None => "none",
        /// Regular.
        Md => "md",
        /// Roomy.
        Lg => "lg",
    }
}

ui_tokens! {
    /// Cross-axis alignment.
    LayoutAlign default Stretch {
        /// Fill the cross axis.
        Stretch => "stretch",
        /// Center on the cross axis.
        Center => "center",
    }
}

ui_tokens! {
    /// Main-axis distribution for clusters.
    LayoutJustify default Start {
        /// Pack at the start.
        Start => "start",
        /// Spread with space between.
        Between => "between",
        /// Pack at the end.
        End => "end",
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Adapts an optional callback prop into a DOM event handler.
pub(crate) fn forward<E: 'static>(callback: Option<Callback<E>>) -> impl Fn(E) + 'static {
    move |ev| {
        if let Some(callback) = callback {
            callback.call(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("catalog-form")),
            "ui-card catalog-form"
        );
    }

    #[test]
    fn tokens_feed_data_attributes() {
        assert_eq!(ButtonVariant::Danger.token(), "danger");
        assert_eq!(TextTone::Success.token(), "success");
        assert_eq!(LayoutJustify::Between.token(), "between");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn token_defaults_match_primitive_defaults() {
        assert_eq!(Elevation::default(), Elevation::Raised);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(LayoutAlign::default(), LayoutAlign::Stretch);
    }
}
