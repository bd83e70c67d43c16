use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host::{seed_missing_collections, Collection, HostServices};
use platform_host_web::build_host_services;

use crate::login::LoginScreen;

/// Seeds every absent record collection, logging instead of failing the boot.
///
/// Returns the collections that were written.
pub fn seed_host_records(host: &HostServices) -> Vec<Collection> {
    match seed_missing_collections(host.records.as_ref()) {
        Ok(seeded) => seeded,
        Err(err) => {
            logging::warn!("seed initialization failed: {err}");
            Vec::new()
        }
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sistema de Gestión" />
        <Meta name="description" content="Escritorio web para gestionar ciudades, departamentos, profesiones y usuarios." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Switches between the login screen and a desktop session.
pub fn DesktopEntry() -> impl IntoView {
    let host = store_value(build_host_services());
    host.with_value(|host| {
        seed_host_records(host);
    });
    let session = create_rw_signal(None::<String>);

    let on_login = Callback::new(move |username: String| session.set(Some(username)));
    let on_session_end = Callback::new(move |()| session.set(None));

    move || match session.get() {
        Some(username) => view! {
            <DesktopProvider host_services=host.get_value() username on_session_end>
                <DesktopShell />
            </DesktopProvider>
        }
        .into_view(),
        None => view! { <LoginScreen on_login /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{get_records, CatalogEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boot_seeding_fills_only_absent_collections() {
        let host = HostServices::in_memory();
        assert_eq!(seed_host_records(&host), Collection::ALL.to_vec());
        assert!(seed_host_records(&host).is_empty());

        let cities: Vec<CatalogEntry> = get_records(host.records.as_ref(), "cities");
        assert_eq!(cities.len(), 3);
    }
}
