use dioxus::prelude::*;
use services::GameCommand;

use crate::vm::MenuVm;

#[component]
pub fn MenuPanel(
    menu: MenuVm,
    on_command: EventHandler<GameCommand>,
    on_records: EventHandler<()>,
) -> Element {
    let mut confirm_reset = use_signal(|| false);

    rsx! {
        div { class: "menu",
            h1 { "Memory Match" }
            p { class: menu.status_class, "{menu.status_text}" }
            p { class: "progress", "{menu.level_label} · {menu.attempts_label}" }
            if let Some(best) = menu.best_label.clone() {
                p { class: "record", "{best}" }
            }

            button {
                class: "primary",
                onclick: move |_| on_command.call(GameCommand::Continue),
                "{menu.continue_label}"
            }
            button { onclick: move |_| on_command.call(GameCommand::NewGame), "New game" }
            button { onclick: move |_| on_records.call(()), "Records" }

            if confirm_reset() {
                div { class: "confirm",
                    p { "Reset level, attempts and all records?" }
                    button {
                        class: "danger",
                        onclick: move |_| {
                            confirm_reset.set(false);
                            on_command.call(GameCommand::ResetProgress);
                        },
                        "Reset"
                    }
                    button { onclick: move |_| confirm_reset.set(false), "Cancel" }
                }
            } else {
                button { class: "danger", onclick: move |_| confirm_reset.set(true), "Reset progress" }
            }
        }
    }
}
