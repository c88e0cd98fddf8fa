use dioxus::prelude::*;

use crate::vm::{BoardVm, CardSlotVm};

#[component]
pub fn Board(board: BoardVm, on_flip: EventHandler<usize>, on_menu: EventHandler<()>) -> Element {
    let BoardVm {
        level_label,
        timer_label,
        timer_urgent,
        attempts_label,
        pairs_label,
        record_label,
        status_text,
        status_class,
        columns,
        cards,
    } = board;
    let timer_class = if timer_urgent { "timer urgent" } else { "timer" };

    rsx! {
        div { class: "board-page",
            header { class: "board-header",
                span { class: "level", "{level_label}" }
                span { class: timer_class, "{timer_label}" }
                span { class: "attempts", "{attempts_label}" }
            }

            p { class: status_class, "{status_text}" }
            div { class: "board-meta",
                span { class: "pairs", "{pairs_label}" }
                if let Some(record) = record_label {
                    span { class: "record", "{record}" }
                }
            }

            div {
                class: "board",
                style: "grid-template-columns: repeat({columns}, 1fr);",
                for (index, slot) in cards.into_iter().enumerate() {
                    CardButton { key: "{index}", slot, on_flip }
                }
            }

            button { class: "secondary", onclick: move |_| on_menu.call(()), "Menu" }
        }
    }
}

#[component]
fn CardButton(slot: CardSlotVm, on_flip: EventHandler<usize>) -> Element {
    let index = slot.index;
    rsx! {
        button {
            class: slot.class,
            disabled: slot.disabled,
            onclick: move |_| on_flip.call(index),
            "{slot.label}"
        }
    }
}
