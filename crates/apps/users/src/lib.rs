//! Users entity form: user records referencing the city, department, and profession catalogs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::*;
use platform_host::{
    delete_record, find_record, submit_draft, try_get_records, CatalogEntry, Collection,
    FormError, FormNotice, HostServices, NoticeTone, RecordStore, RecordStoreError,
    SubmitOutcome, UserRecord,
};
use platform_host_web::confirm_action;
use serde::de::DeserializeOwned;
use system_ui::prelude::*;

/// Label shown for a foreign id that does not resolve to a catalog entry.
pub const UNASSIGNED_LABEL: &str = "No asignado";

/// Resolves a catalog id to its display name.
pub fn lookup_name(entries: &[CatalogEntry], id: &str) -> String {
    find_record(entries, id)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| UNASSIGNED_LABEL.to_string())
}

/// Success notice after an accepted draft.
pub fn saved_notice(name: &str, outcome: SubmitOutcome) -> String {
    let verb = match outcome {
        SubmitOutcome::Created => "agregado",
        SubmitOutcome::Updated => "actualizado",
    };
    format!("Usuario \"{name}\" {verb} correctamente")
}

fn blank_user() -> UserRecord {
    UserRecord {
        id: String::new(),
        name: String::new(),
        username: String::new(),
        email: String::new(),
        city_id: String::new(),
        department_id: String::new(),
        profession_id: String::new(),
        is_active: true,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Catalogs referenced by user records.
pub struct UserCatalogs {
    /// Cities catalog.
    pub cities: Vec<CatalogEntry>,
    /// Departments catalog.
    pub departments: Vec<CatalogEntry>,
    /// Professions catalog.
    pub professions: Vec<CatalogEntry>,
}

impl UserCatalogs {
    /// Loads every referenced catalog, recovering failures as empty lists.
    ///
    /// Returns the catalogs and whether any collection failed to load.
    pub fn load(store: &dyn RecordStore) -> (Self, bool) {
        let mut failed = false;
        let mut load = |collection: Collection| {
            read_or_warn::<CatalogEntry>(store, collection.key()).unwrap_or_else(|| {
                failed = true;
                Vec::new()
            })
        };
        let catalogs = Self {
            cities: load(Collection::Cities),
            departments: load(Collection::Departments),
            professions: load(Collection::Professions),
        };
        (catalogs, failed)
    }
}

fn read_or_warn<T: DeserializeOwned>(store: &dyn RecordStore, key: &str) -> Option<Vec<T>> {
    try_get_records(store, key)
        .map_err(|err: RecordStoreError| {
            logging::warn!("users form load failed for `{key}`: {err}");
        })
        .ok()
}

fn notice_tone(tone: NoticeTone) -> TextTone {
    match tone {
        NoticeTone::Success => TextTone::Success,
        NoticeTone::Error => TextTone::Danger,
    }
}

fn catalog_options(entries: &[CatalogEntry], placeholder: &'static str) -> View {
    let options = entries
        .iter()
        .map(|entry| view! { <option value=entry.id.clone()>{entry.name.clone()}</option> })
        .collect_view();
    view! {
        <option value="" disabled=true>{placeholder}</option>
        {options}
    }
    .into_view()
}

#[component]
/// Users form window contents: a create/edit draft above the user table.
pub fn UsersApp(
    /// Host services providing the record store.
    host: HostServices,
) -> impl IntoView {
    let key = Collection::Users.key();
    let store = store_value::<Rc<dyn RecordStore>>(host.records.clone());
    let (catalogs, catalogs_failed) = UserCatalogs::load(host.records.as_ref());
    let loaded_users = read_or_warn::<UserRecord>(host.records.as_ref(), key);
    let load_failed = catalogs_failed || loaded_users.is_none();

    let catalogs = store_value(catalogs);
    let users = create_rw_signal(loaded_users.unwrap_or_default());
    let draft = create_rw_signal(blank_user());
    let editing = create_rw_signal(false);
    let notice = create_rw_signal::<Option<FormNotice>>(load_failed.then(|| FormNotice {
        tone: NoticeTone::Error,
        message: "Error al cargar los datos".to_string(),
    }));

    let reset = move || {
        draft.set(blank_user());
        editing.set(false);
    };

    let report = move |err: FormError| {
        if let FormError::Store(store_err) = &err {
            logging::warn!("users form save failed: {store_err}");
        }
        notice.set(Some(FormNotice::error(&err)));
    };

    let submit = move || {
        let candidate = draft.get_untracked();
        let mut next = users.get_untracked();
        let result = store.with_value(|store| {
            submit_draft(
                store.as_ref(),
                key,
                &mut next,
                candidate.clone(),
                editing.get_untracked(),
                || uuid::Uuid::new_v4().to_string(),
            )
        });
        match result {
            Ok(outcome) => {
                users.set(next);
                notice.set(Some(FormNotice::success(saved_notice(
                    &candidate.name,
                    outcome,
                ))));
                reset();
            }
            Err(err) => report(err),
        }
    };

    let delete = move |id: String, name: String| {
        if !confirm_action(&format!("¿Está seguro de eliminar el usuario \"{name}\"?")) {
            return;
        }
        let mut next = users.get_untracked();
        match store.with_value(|store| delete_record(store.as_ref(), key, &mut next, &id)) {
            Ok(_) => {
                users.set(next);
                if draft.with_untracked(|d| d.id == id) {
                    reset();
                }
                notice.set(Some(FormNotice::success("Usuario eliminado correctamente")));
            }
            Err(err) => report(err),
        }
    };

    let text_input = move |label: &'static str,
                           placeholder: &'static str,
                           input_type: &'static str,
                           read: fn(&UserRecord) -> String,
                           write: fn(&mut UserRecord, String)| {
        view! {
            <FieldGroup title=label>
                <TextField
                    placeholder=placeholder
                    input_type=input_type
                    value=Signal::derive(move || draft.with(read))
                    on_input=Callback::new(move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| write(d, value));
                    })
                />
            </FieldGroup>
        }
    };

    let select_input = move |label: &'static str,
                             options: View,
                             read: fn(&UserRecord) -> String,
                             write: fn(&mut UserRecord, String)| {
        view! {
            <FieldGroup title=label>
                <SelectField
                    aria_label=label
                    value=Signal::derive(move || draft.with(read))
                    on_change=Callback::new(move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| write(d, value));
                    })
                >
                    {options}
                </SelectField>
            </FieldGroup>
        }
    };

    let (city_options, department_options, profession_options) = catalogs.with_value(|c| {
        (
            catalog_options(&c.cities, "Seleccione una ciudad"),
            catalog_options(&c.departments, "Seleccione un departamento"),
            catalog_options(&c.professions, "Seleccione una profesión"),
        )
    });

    view! {
        <Stack layout_class="users-app" padding=LayoutPadding::Md>
            <Card layout_class="entity-form">
                <form on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <Grid layout_class="entity-form-fields">
                        {text_input("Nombre Completo", "Nombre completo", "text", |u| u.name.clone(), |u, v| u.name = v)}
                        {text_input("Nombre de Usuario", "Nombre de usuario", "text", |u| u.username.clone(), |u, v| u.username = v)}
                        {text_input("Correo Electrónico", "Correo electrónico", "email", |u| u.email.clone(), |u, v| u.email = v)}
                        {select_input("Ciudad", city_options, |u| u.city_id.clone(), |u, v| u.city_id = v)}
                        {select_input("Departamento", department_options, |u| u.department_id.clone(), |u, v| u.department_id = v)}
                        {select_input("Profesión", profession_options, |u| u.profession_id.clone(), |u, v| u.profession_id = v)}
                        <FieldGroup title="Activo">
                            <Switch
                                aria_label="Activo"
                                checked=Signal::derive(move || draft.with(|d| d.is_active))
                                on_toggle=Callback::new(move |on| draft.update(|d| d.is_active = on))
                            />
                        </FieldGroup>
                    </Grid>
                    <Cluster justify=LayoutJustify::End>
                        <Button
                            leading_icon=IconName::Dismiss
                            on_click=Callback::new(move |_| reset())
                        >
                            "Cancelar"
                        </Button>
                        <Button button_type="submit" variant=ButtonVariant::Primary>
                            {move || {
                                let (icon, label) = if editing.get() {
                                    (IconName::Checkmark, "Actualizar")
                                } else {
                                    (IconName::Add, "Agregar")
                                };
                                view! { <Icon icon size=IconSize::Sm /> {label} }
                            }}
                        </Button>
                    </Cluster>
                </form>
            </Card>

            {move || {
                notice.get().map(|notice| {
                    view! {
                        <InlineNotice tone=notice_tone(notice.tone)>{notice.message}</InlineNotice>
                    }
                })
            }}

            <DataTable layout_class="entity-table" aria_label="Usuarios">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Usuario"</th>
                        <th>"Email"</th>
                        <th>"Ciudad"</th>
                        <th>"Departamento"</th>
                        <th>"Profesión"</th>
                        <th>"Estado"</th>
                        <th data-align="end">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || users.with(Vec::is_empty)>
                        <tr>
                            <td colspan="8">
                                <EmptyState>"No hay usuarios registrados"</EmptyState>
                            </td>
                        </tr>
                    </Show>
                    <For each=move || users.get() key=|user| user.clone() let:user>
                        {
                            let (city, department, profession) = catalogs.with_value(|c| {
                                (
                                    lookup_name(&c.cities, &user.city_id),
                                    lookup_name(&c.departments, &user.department_id),
                                    lookup_name(&c.professions, &user.profession_id),
                                )
                            });
                            let (status_tone, status_label) = if user.is_active {
                                (TextTone::Success, "Activo")
                            } else {
                                (TextTone::Danger, "Inactivo")
                            };
                            let edit_user = user.clone();
                            let delete_id = user.id.clone();
                            let delete_name = user.name.clone();
                            view! {
                                <tr>
                                    <td data-emphasis="true">{user.name.clone()}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{city}</td>
                                    <td>{department}</td>
                                    <td>{profession}</td>
                                    <td>
                                        <Badge tone=status_tone>{status_label}</Badge>
                                    </td>
                                    <td data-align="end">
                                        <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                                            <Button
                                                variant=ButtonVariant::Quiet
                                                size=ButtonSize::Sm
                                                aria_label="Editar"
                                                leading_icon=IconName::Edit
                                                on_click=Callback::new(move |_| {
                                                    draft.set(edit_user.clone());
                                                    editing.set(true);
                                                    notice.set(None);
                                                })
                                            >
                                                {()}
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                size=ButtonSize::Sm
                                                aria_label="Eliminar"
                                                leading_icon=IconName::Delete
                                                on_click=Callback::new(move |_| {
                                                    delete(delete_id.clone(), delete_name.clone())
                                                })
                                            >
                                                {()}
                                            </Button>
                                        </Cluster>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </DataTable>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{seed_missing_collections, MemoryRecordStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn foreign_ids_resolve_to_names_or_unassigned() {
        let store = MemoryRecordStore::default();
        seed_missing_collections(&store).expect("seed");
        let (catalogs, failed) = UserCatalogs::load(&store);
        assert!(!failed);

        assert_eq!(lookup_name(&catalogs.cities, "2"), "Medellín");
        assert_eq!(
            lookup_name(&catalogs.professions, "1"),
            "Ingeniero de Software"
        );
        assert_eq!(lookup_name(&catalogs.departments, "99"), UNASSIGNED_LABEL);
        assert_eq!(lookup_name(&[], ""), "No asignado");
    }

    #[test]
    fn corrupt_catalog_reports_a_load_failure() {
        let store = MemoryRecordStore::default();
        seed_missing_collections(&store).expect("seed");
        store.save_raw("departments", "not json").expect("save");

        let (catalogs, failed) = UserCatalogs::load(&store);
        assert!(failed);
        assert!(catalogs.departments.is_empty());
        assert_eq!(catalogs.cities.len(), 3);
    }

    #[test]
    fn saved_notices_name_the_user() {
        assert_eq!(
            saved_notice("Ana Ruiz", SubmitOutcome::Created),
            "Usuario \"Ana Ruiz\" agregado correctamente"
        );
        assert_eq!(
            saved_notice("Ana Ruiz", SubmitOutcome::Updated),
            "Usuario \"Ana Ruiz\" actualizado correctamente"
        );
    }
}
