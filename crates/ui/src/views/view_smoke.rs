use dioxus::prelude::*;
use memory_core::model::{Level, Record};
use memory_core::time::fixed_now;
use services::GameCommand;

use super::test_harness::{drive_dom, mount, start_game, wait_until};
use crate::views::RecordsPanel;
use crate::vm::map_records;

#[tokio::test(flavor = "current_thread")]
async fn launch_renders_menu() {
    let game = start_game().await;
    let mut harness = mount(game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Memory Match"), "missing title in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(html.contains("Press Start to begin!"), "missing status in {html}");
    assert!(html.contains("Reset progress"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn running_level_renders_face_down_board() {
    let game = start_game().await;
    game.send(GameCommand::Continue);
    wait_until(&game, |view| view.is_running).await;

    let mut harness = mount(game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Level 1: find 2 pairs!"), "missing status in {html}");
    assert!(html.contains("1:00"), "missing timer in {html}");
    assert_eq!(html.matches("card face-down").count(), 4, "unexpected board in {html}");
    assert!(!html.contains("Memory Match"), "menu still shown in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timeout_renders_retry_dialog() {
    let game = start_game().await;
    game.send(GameCommand::Continue);
    wait_until(&game, |view| view.outcome.is_some()).await;

    let mut harness = mount(game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Out of time"), "missing dialog title in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
    assert!(html.contains("0:00"), "timer not drained in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_menu_returns_to_menu() {
    let game = start_game().await;
    game.send(GameCommand::Continue);
    wait_until(&game, |view| view.is_running).await;
    game.send(GameCommand::OpenMenu);
    wait_until(&game, |view| view.menu_open).await;

    let mut harness = mount(game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Memory Match"), "missing menu in {html}");
    assert!(!html.contains("card face-down"), "board still shown in {html}");
}

fn records_fixture() -> Element {
    let records = vec![
        Record::new(Level::FIRST, 51, fixed_now()),
        Record::new(Level::new(2).unwrap(), 38, fixed_now()),
    ];
    rsx! {
        RecordsPanel { rows: map_records(&records), on_close: move |_| {} }
    }
}

fn empty_records_fixture() -> Element {
    rsx! {
        RecordsPanel { rows: Vec::new(), on_close: move |_| {} }
    }
}

#[test]
fn records_panel_lists_rows() {
    let mut dom = VirtualDom::new(records_fixture);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Level 2"), "missing row in {html}");
    assert!(html.contains("51s left"), "missing time in {html}");
    assert!(html.contains("2023-11-14"), "missing date in {html}");
}

#[test]
fn records_panel_handles_empty_list() {
    let mut dom = VirtualDom::new(empty_records_fixture);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("No records yet"), "missing empty state in {html}");
}
