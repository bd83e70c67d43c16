use super::*;

#[component]
/// Transparent full-viewport layer behind an open menu; pressing it dismisses the menu.
pub fn MenuBackdrop(on_dismiss: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <div
            class="ui-menu-backdrop"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-backdrop"
            on:mousedown=move |ev| on_dismiss.call(ev)
        ></div>
    }
}

#[component]
/// Launcher popup anchored above the start button.
///
/// Mouse-down inside the popup is stopped so it never reaches the backdrop.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label="Menú principal"
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
            on:mousedown=|ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </nav>
    }
}

#[component]
/// Launcher entry with a leading icon.
pub fn MenuItem(
    icon: IconName,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            role="menuitem"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-variant=variant.token()
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon size=IconSize::Md />
            <span data-ui-slot="label">{children()}</span>
        </button>
    }
}

#[component]
/// Divider between launcher entries and the session action.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <hr
            class="ui-menu-separator"
            role="separator"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        />
    }
}
