use super::*;

#[component]
/// Panel surface for forms, record lists, and the login prompt.
pub fn Card(
    #[prop(optional)] elevation: Elevation,
    #[prop(optional)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section or panel heading.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-heading"
            role="heading"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Pill label, used for record status and technology tags.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-badge"
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

container_primitive! {
    /// Placeholder row content for a list with no records.
    EmptyState, div, "ui-empty-state", "empty-state"
}

#[component]
/// Record table; callers supply `thead` and `tbody` rows.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="data-table"
        >
            {children()}
        </table>
    }
}

#[component]
/// Polite live region reporting the outcome of the last form operation.
pub fn InlineNotice(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-inline-notice"
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="inline-notice"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}
