//! Catalog entity form shared by the cities, departments, and professions windows.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod kind;

use std::rc::Rc;

use leptos::*;
use platform_host::{
    delete_record, submit_draft, try_get_records, CatalogEntry, FormError, FormNotice,
    HostServices, NoticeTone, RecordStore,
};
use platform_host_web::confirm_action;
use system_ui::prelude::*;

pub use kind::CatalogKind;

/// Generates a fresh record id.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn blank_entry() -> CatalogEntry {
    CatalogEntry {
        id: String::new(),
        name: String::new(),
        code: String::new(),
        is_active: true,
    }
}

fn load_entries(store: &dyn RecordStore, key: &str) -> Vec<CatalogEntry> {
    try_get_records(store, key).unwrap_or_else(|err| {
        logging::warn!("catalog load failed for `{key}`: {err}");
        Vec::new()
    })
}

fn report_failure(key: &str, err: &FormError) {
    if let FormError::Store(store_err) = err {
        logging::warn!("catalog save failed for `{key}`: {store_err}");
    }
}

fn notice_tone(tone: NoticeTone) -> TextTone {
    match tone {
        NoticeTone::Success => TextTone::Success,
        NoticeTone::Error => TextTone::Danger,
    }
}

#[component]
/// Catalog form window contents: a create/edit draft above the record table.
pub fn CatalogApp(
    /// Which catalog collection this window edits.
    kind: CatalogKind,
    /// Host services providing the record store.
    host: HostServices,
) -> impl IntoView {
    let key = kind.collection().key();
    let store = store_value::<Rc<dyn RecordStore>>(host.records.clone());
    let records = create_rw_signal(store.with_value(|store| load_entries(store.as_ref(), key)));
    let draft = create_rw_signal(blank_entry());
    let editing = create_rw_signal(false);
    let notice = create_rw_signal::<Option<FormNotice>>(None);

    let reset = move || {
        draft.set(blank_entry());
        editing.set(false);
    };

    let submit = move || {
        let candidate = draft.get_untracked();
        let mut next = records.get_untracked();
        let result = store.with_value(|store| {
            submit_draft(
                store.as_ref(),
                key,
                &mut next,
                candidate.clone(),
                editing.get_untracked(),
                new_record_id,
            )
        });
        match result {
            Ok(outcome) => {
                records.set(next);
                notice.set(Some(FormNotice::success(
                    kind.saved_notice(&candidate.name, outcome),
                )));
                reset();
            }
            Err(err) => {
                report_failure(key, &err);
                notice.set(Some(FormNotice::error(&err)));
            }
        }
    };

    let delete = move |id: String, name: String| {
        if !confirm_action(&kind.delete_prompt(&name)) {
            return;
        }
        let mut next = records.get_untracked();
        match store.with_value(|store| delete_record(store.as_ref(), key, &mut next, &id)) {
            Ok(_) => {
                records.set(next);
                if draft.with_untracked(|d| d.id == id) {
                    reset();
                }
                notice.set(Some(FormNotice::success(kind.deleted_notice())));
            }
            Err(err) => {
                report_failure(key, &err);
                notice.set(Some(FormNotice::error(&err)));
            }
        }
    };

    view! {
        <Stack layout_class="catalog-app" padding=LayoutPadding::Md>
            <Card layout_class="entity-form">
                <form on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <Grid layout_class="entity-form-fields">
                        <FieldGroup title="Nombre">
                            <TextField
                                placeholder=kind.name_placeholder()
                                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Código">
                            <TextField
                                placeholder="Código"
                                value=Signal::derive(move || draft.with(|d| d.code.clone()))
                                on_input=Callback::new(move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.code = value);
                                })
                            />
                        </FieldGroup>
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

            <DataTable layout_class="entity-table" aria_label=kind.noun()>
                <thead>
                    <tr>
                        <th>"Código"</th>
                        <th>"Nombre"</th>
                        <th>"Estado"</th>
                        <th data-align="end">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || records.with(Vec::is_empty)>
                        <tr>
                            <td colspan="4">
                                <EmptyState>{kind.empty_message()}</EmptyState>
                            </td>
                        </tr>
                    </Show>
                    <For each=move || records.get() key=|entry| entry.clone() let:entry>
                        {
                            let edit_entry = entry.clone();
                            let delete_id = entry.id.clone();
                            let delete_name = entry.name.clone();
                            let (status_tone, status_label) = if entry.is_active {
                                (TextTone::Success, "Activo")
                            } else {
                                (TextTone::Danger, "Inactivo")
                            };
                            view! {
                                <tr>
                                    <td data-emphasis="true">{entry.code.clone()}</td>
                                    <td>{entry.name.clone()}</td>
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
                                                    draft.set(edit_entry.clone());
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
    use super::*;

    #[test]
    fn record_ids_are_distinct_v4_uuids() {
        let first = new_record_id();
        let second = new_record_id();
        assert_ne!(first, second);
        let parsed = uuid::Uuid::parse_str(&first).expect("uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn blank_drafts_start_active() {
        let draft = blank_entry();
        assert!(draft.is_active);
        assert!(draft.id.is_empty());
    }
}
