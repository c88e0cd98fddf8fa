use dioxus::prelude::*;

use crate::vm::RecordRowVm;

#[component]
pub fn RecordsPanel(rows: Vec<RecordRowVm>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "records",
            h2 { "Records" }
            if rows.is_empty() {
                p { "No records yet. Finish a level to set one." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Level" }
                            th { "Best time" }
                            th { "Set on" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr { key: "{row.level_label}",
                                td { "{row.level_label}" }
                                td { "{row.time_label}" }
                                td { "{row.achieved_on}" }
                            }
                        }
                    }
                }
            }
            button { onclick: move |_| on_close.call(()), "Back" }
        }
    }
}
