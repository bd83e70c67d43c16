//! Leptos primitives shared by the desktop chrome, the record forms, and the login screen.
//!
//! Every primitive stamps `data-ui-primitive`, `data-ui-kind`, and token attributes such as
//! `data-ui-tone` onto its root element; stylesheets target those attributes rather than ad hoc
//! classes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, ClockButton, Cluster, DataTable,
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Elevation, EmptyState, FieldGroup, Grid,
    Heading, InlineNotice, LauncherMenu, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    MenuBackdrop, MenuItem, MenuSeparator, SelectField, Stack, Switch, Taskbar, TaskbarButton,
    TaskbarSection, Text, TextField, TextRole, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Form, layout, and display primitives used inside window contents.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, DataTable, Elevation, EmptyState,
        FieldGroup, Grid, Heading, Icon, IconName, IconSize, InlineNotice, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, SelectField, Stack, Switch, Text, TextField, TextRole,
        TextTone,
    };
}
