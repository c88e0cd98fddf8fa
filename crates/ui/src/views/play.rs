use dioxus::prelude::*;
use services::GameCommand;

use crate::context::AppContext;
use crate::views::{Board, MenuPanel, OutcomeDialog, RecordsPanel};
use crate::vm::{BoardVm, MenuVm, OutcomeVm, map_records};

/// Top-level screen: menu, records, or the board with its end-of-level dialog.
#[component]
pub fn PlayView() -> Element {
    let ctx = use_context::<AppContext>();
    let game = ctx.game();
    let mut view = use_signal(|| game.current());
    let mut show_records = use_signal(|| false);

    // Mirror every published view into the signal.
    let watcher = game.clone();
    use_future(move || {
        let mut updates = watcher.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                view.set(next);
            }
        }
    });

    let send = use_callback(move |command: GameCommand| {
        // The loop only stops when the app is shutting down.
        let _ = game.send(command);
    });

    let current = view.read().clone();

    rsx! {
        div { class: "page",
            if show_records() {
                RecordsPanel {
                    rows: map_records(&current.records),
                    on_close: move |_| show_records.set(false),
                }
            } else if current.menu_open {
                MenuPanel {
                    menu: MenuVm::from(&current),
                    on_command: send,
                    on_records: move |_| show_records.set(true),
                }
            } else {
                Board {
                    board: BoardVm::from(&current),
                    on_flip: move |index| send.call(GameCommand::Flip(index)),
                    on_menu: move |_| send.call(GameCommand::OpenMenu),
                }
                if let Some(outcome) = current.outcome {
                    OutcomeDialog { outcome: OutcomeVm::from(outcome), on_command: send }
                }
            }
        }
    }
}
