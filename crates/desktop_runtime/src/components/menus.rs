use super::*;
use crate::{apps::launcher_entries, icons::content_icon};
use system_ui::{
    ButtonVariant, IconName, LauncherMenu, MenuBackdrop, MenuItem, MenuSeparator, Text, TextRole,
    TextTone,
};

pub(super) fn menu_greeting(username: &str) -> String {
    format!("Bienvenido, {username}")
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let greeting = store_value(menu_greeting(&runtime.username.get_value()));

    view! {
        <Show when=move || state.with(|d| d.start_menu_open) fallback=|| ()>
            <MenuBackdrop on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::CloseStartMenu)
            }) />
            <LauncherMenu layout_class="start-menu" id="desktop-launcher-menu">
                <div class="start-menu-header" data-ui-slot="menu-header">
                    <Text role=TextRole::Title>{greeting.get_value()}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "Sistema de Gestión"
                    </Text>
                </div>
                {launcher_entries()
                    .iter()
                    .map(|entry| {
                        let content_type = entry.content_type;
                        view! {
                            <MenuItem
                                icon=content_icon(content_type)
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::LaunchFromMenu {
                                        content_type,
                                    })
                                })
                            >
                                {entry.launcher_label}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
                <MenuSeparator />
                <MenuItem
                    icon=IconName::SignOut
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::EndSession)
                    })
                >
                    "Cerrar Sesión"
                </MenuItem>
            </LauncherMenu>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_user() {
        assert_eq!(menu_greeting("admin"), "Bienvenido, admin");
    }
}
