use dioxus::prelude::*;
use services::GameCommand;

use crate::vm::OutcomeVm;

#[component]
pub fn OutcomeDialog(outcome: OutcomeVm, on_command: EventHandler<GameCommand>) -> Element {
    let primary = outcome.primary;
    let secondary = outcome.secondary;
    let class = if outcome.celebrate { "dialog celebrate" } else { "dialog" };

    rsx! {
        div { class: "overlay",
            div { class,
                h2 { "{outcome.title}" }
                p { "{outcome.body}" }
                div { class: "dialog-actions",
                    button {
                        class: "primary",
                        onclick: move |_| on_command.call(primary),
                        "{outcome.primary_label}"
                    }
                    button { onclick: move |_| on_command.call(secondary), "{outcome.secondary_label}" }
                }
            }
        }
    }
}
