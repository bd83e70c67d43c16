use super::*;

#[component]
/// Action button used by forms and record rows.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Defaults to `"button"` so nested buttons never submit their form by accident.
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Required for icon-only row actions.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class="ui-button"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=forward(on_click)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Captioned form row; the caption labels whatever control is nested inside.
pub fn FieldGroup(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="ui-field-group" data-ui-primitive="true" data-ui-kind="field-group">
            <span data-ui-slot="title">{title}</span>
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Single-line text input bound to a draft field.
pub fn TextField(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class="ui-field"
            id=id
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            autocomplete=autocomplete
            required=required
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=forward(on_input)
        />
    }
}

#[component]
/// Drop-down bound to a draft field; options are passed as children.
pub fn SelectField(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class="ui-field"
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            on:change=forward(on_change)
        >
            {children()}
        </select>
    }
}

#[component]
/// On/off toggle for the active flag of a record.
///
/// `on_toggle` receives the requested next state; the caller owns the value.
pub fn Switch(
    #[prop(into)] aria_label: String,
    #[prop(into)] checked: MaybeSignal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    let flip = move || on_toggle.call(!checked.get_untracked());

    view! {
        <button
            type="button"
            class="ui-switch"
            role="switch"
            aria-label=aria_label
            aria-checked=move || bool_token(checked.get())
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |_| flip()
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}
