use std::time::Duration;

use super::*;
use crate::icons::content_icon;
use system_ui::{ClockButton, Icon, IconName, IconSize, Taskbar, TaskbarButton, TaskbarSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let start_menu_open = Signal::derive(move || state.with(|d| d.start_menu_open));
    let window_ids =
        move || state.with(|d| d.windows.iter().map(|w| w.id).collect::<Vec<WindowId>>());

    view! {
        <Taskbar aria_label="Barra de tareas">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    icon=IconName::Launcher
                    aria_label="Inicio"
                    aria_haspopup="menu"
                    aria_expanded=start_menu_open
                    selected=start_menu_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                    })
                >
                    <span>"Inicio"</span>
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Ventanas abiertas">
                <For each=window_ids key=|id| id.0 let:window_id>
                    {
                        let window = state.with_untracked(|d| d.window(window_id).cloned());
                        window.map(|window| {
                            let shown = Signal::derive(move || {
                                state.with(|d| d.window(window_id).is_some_and(|w| !w.minimized))
                            });
                            view! {
                                <TaskbarButton
                                    icon=content_icon(window.content_type)
                                    title=window.title.clone()
                                    selected=shown
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry {
                                            window_id,
                                        })
                                    })
                                >
                                    <span>{window.title}</span>
                                </TaskbarButton>
                            }
                        })
                    }
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <ClockButton aria_label="Hora actual">
                    {move || format_taskbar_clock(clock_now.get())}
                </ClockButton>
                <span class="taskbar-user-chip" data-ui-slot="user-chip">
                    <Icon icon=IconName::Person size=IconSize::Xs />
                    {runtime.username.get_value()}
                </span>
            </TaskbarSection>
        </Taskbar>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_renders_zero_padded_hours_and_minutes() {
        assert_eq!(
            format_taskbar_clock(TaskbarClockSnapshot { hour: 7, minute: 5 }),
            "07:05"
        );
        assert_eq!(
            format_taskbar_clock(TaskbarClockSnapshot {
                hour: 23,
                minute: 59
            }),
            "23:59"
        );
    }
}
