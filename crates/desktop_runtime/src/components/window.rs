use super::*;
use crate::{
    apps::render_window_contents,
    icons::content_icon,
    model::{WINDOW_HEIGHT, WINDOW_WIDTH},
    window_manager::{window_placement, WindowPlacement},
};
use system_ui::{
    Icon, IconName, IconSize, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn frame_style(placement: &WindowPlacement) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        placement.position.x,
        placement.position.y,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        placement.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let placement = create_memo(move |_| {
        state.with(|desktop| {
            runtime
                .interaction
                .with(|manager| window_placement(desktop, manager, window_id))
        })
    });
    let Some(initial) = placement.get_untracked() else {
        return ().into_view();
    };
    let content_type = initial.descriptor.content_type;
    let title = initial.descriptor.title;

    let focused =
        Signal::derive(move || state.with(|d| d.focused_window_id() == Some(window_id)));
    let style = Signal::derive(move || {
        placement
            .with(|p| p.as_ref().map(frame_style))
            .unwrap_or_default()
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !state.with_untracked(|d| d.is_topmost(window_id)) {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMinimize { window_id })
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id })
    });

    let contents = render_window_contents(content_type, runtime.host.get_value());

    view! {
        <WindowFrame
            layout_class="desktop-window"
            style
            aria_label=title.clone()
            focused
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>
                    <Icon icon=content_icon(content_type) size=IconSize::Sm />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimizar"
                        on_click=minimize
                    />
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Cerrar"
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
