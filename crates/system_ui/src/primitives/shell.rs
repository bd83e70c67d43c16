use super::*;

#[component]
/// Outermost desktop element.
///
/// Pointer callbacks cover the whole surface so a window drag keeps tracking after the pointer
/// leaves the title bar.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointercancel: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerleave: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=forward(on_pointermove)
            on:pointerup=forward(on_pointerup)
            on:pointercancel=forward(on_pointercancel)
            on:pointerleave=forward(on_pointerleave)
        >
            {children()}
        </div>
    }
}

container_primitive! {
    /// Work area above the taskbar.
    DesktopBackdrop, div, "desktop-backdrop", "desktop-backdrop"
}

container_primitive! {
    /// Positioning context for absolutely placed windows.
    DesktopWindowLayer, div, "ui-window-layer", "desktop-window-layer"
}

container_primitive! {
    /// Icon and caption on the left of a title bar.
    WindowTitle, div, "ui-window-title", "window-title"
}

container_primitive! {
    /// Control buttons on the right of a title bar.
    WindowControls, div, "ui-window-controls", "window-controls"
}

container_primitive! {
    /// Scrollable window content area.
    WindowBody, div, "ui-window-body", "window-body"
}

#[component]
/// Window chrome; geometry and stacking come in through `style`.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: String,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </section>
    }
}

#[component]
/// Title bar; pressing it starts a window drag.
pub fn WindowTitleBar(
    on_pointerdown: Callback<web_sys::PointerEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| on_pointerdown.call(ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon-only title bar button.
///
/// Pointer-down stops here so pressing a control never starts a drag.
pub fn WindowControlButton(
    icon: IconName,
    #[prop(into)] aria_label: String,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            aria-label=aria_label.clone()
            title=aria_label
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot="window-control"
            data-ui-variant=ButtonVariant::Quiet.token()
            data-ui-size=ButtonSize::Sm.token()
            on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Bottom bar holding the start button, running windows, and the tray.
pub fn Taskbar(#[prop(into)] aria_label: String, children: Children) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named region of the taskbar.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar toggle; `selected` marks the start menu as open or a window as shown.
pub fn TaskbarButton(
    #[prop(default = "taskbar-button")] ui_slot: &'static str,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] aria_haspopup: Option<&'static str>,
    #[prop(optional, into)] aria_expanded: Option<Signal<bool>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            aria-label=aria_label
            aria-haspopup=aria_haspopup
            aria-expanded=move || aria_expanded.map(|open| bool_token(open.get()))
            aria-pressed=move || bool_token(selected.get())
            title=title
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=ButtonVariant::Quiet.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=forward(on_click)
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Tray clock readout.
pub fn ClockButton(#[prop(into)] aria_label: String, children: Children) -> impl IntoView {
    view! {
        <TaskbarButton ui_slot="clock-button" aria_label>
            {children()}
        </TaskbarButton>
    }
}
