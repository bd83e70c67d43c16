use leptos::*;
use system_ui::prelude::*;

/// Returns whether a login attempt may open a session; any non-empty pair is accepted.
pub fn credentials_accepted(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

#[component]
/// Credential form shown while no session is active.
pub fn LoginScreen(
    /// Receives the username of an accepted login.
    on_login: Callback<String>,
) -> impl IntoView {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let rejected = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        if credentials_accepted(&user, &password.get_untracked()) {
            rejected.set(false);
            on_login.call(user);
        } else {
            rejected.set(true);
        }
    };

    view! {
        <div class="login-screen">
            <Card layout_class="login-card" elevation=Elevation::Overlay padding=LayoutPadding::Lg>
                <form on:submit=submit>
                    <Stack gap=LayoutGap::Md>
                        <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                            <Heading>"Sistema de Gestión"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Ingrese sus credenciales para acceder al sistema"
                            </Text>
                        </Stack>
                        <FieldGroup title="Usuario">
                            <TextField
                                id="username"
                                placeholder="Ingrese su nombre de usuario"
                                autocomplete="username"
                                required=true
                                value=Signal::derive(move || username.get())
                                on_input=Callback::new(move |ev| username.set(event_target_value(&ev)))
                            />
                        </FieldGroup>
                        <FieldGroup title="Contraseña">
                            <TextField
                                id="password"
                                input_type="password"
                                placeholder="Ingrese su contraseña"
                                autocomplete="current-password"
                                required=true
                                value=Signal::derive(move || password.get())
                                on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                            />
                        </FieldGroup>
                        <Show when=move || rejected.get() fallback=|| ()>
                            <InlineNotice tone=TextTone::Danger>
                                "Ingrese usuario y contraseña"
                            </InlineNotice>
                        </Show>
                        <Button button_type="submit" variant=ButtonVariant::Primary>
                            "Iniciar Sesión"
                        </Button>
                    </Stack>
                </form>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_pair_is_accepted() {
        assert!(credentials_accepted("admin", "secreto"));
        assert!(credentials_accepted(" ", "x"));
        assert!(!credentials_accepted("", "secreto"));
        assert!(!credentials_accepted("admin", ""));
    }
}
