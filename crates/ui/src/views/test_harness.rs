use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use memory_core::time::fixed_clock;
use services::{AppServices, GameConfig, GameHandle, GameView};

use crate::context::{UiApp, build_app_context};
use crate::views::PlayView;

pub const SEED: u64 = 3;

struct TestApp {
    game: GameHandle,
}

impl UiApp for TestApp {
    fn game(&self) -> GameHandle {
        self.game.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PlayHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { PlayView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A seeded in-memory game loop, still showing the launch menu.
pub async fn start_game() -> GameHandle {
    AppServices::in_memory(fixed_clock(), GameConfig::default().with_seed(Some(SEED)))
        .await
        .game()
}

pub async fn wait_until(game: &GameHandle, done: impl FnMut(&GameView) -> bool) -> GameView {
    game.subscribe()
        .wait_for(done)
        .await
        .expect("game loop alive")
        .clone()
}

/// Mount `PlayView` over `game` as it is right now.
pub fn mount(game: GameHandle) -> ViewHarness {
    let app = Arc::new(TestApp { game });
    let dom = VirtualDom::new_with_props(PlayHarness, ViewHarnessProps { app });
    ViewHarness { dom }
}
