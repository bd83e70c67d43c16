mod login;
mod web_app;

pub use login::{credentials_accepted, LoginScreen};
pub use web_app::{seed_host_records, DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
