//! Brick Attack entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use brick_attack::renderer::{CanvasSurface, DrawList};
    use brick_attack::sim::GameEvent;
    use brick_attack::ui::{HudView, display_value};
    use brick_attack::{App, FrameOutcome, Tuning};

    /// Everything the DOM callbacks share
    struct Game {
        app: App,
        surface: CanvasSurface,
        draw_list: DrawList,
        document: Document,
        /// An animation frame is scheduled
        loop_active: bool,
        last_hud: Option<HudView>,
    }

    type Shared = Rc<RefCell<Game>>;

    impl Game {
        /// Draw the current frame and sync the HUD
        fn present(&mut self) -> Result<(), JsValue> {
            self.app.draw(&mut self.draw_list);
            self.surface.present(&self.draw_list)?;

            for event in self.app.take_events() {
                match event {
                    GameEvent::GameOver => log::info!("Game over"),
                    GameEvent::Won => log::info!("Game won"),
                    _ => {}
                }
            }

            let hud = self.app.hud();
            if self.last_hud.as_ref() != Some(&hud) {
                apply_hud(&self.document, &hud)?;
                self.last_hud = Some(hud);
            }
            Ok(())
        }

        /// Canvas-relative x for a viewport x
        fn relative_x(&self, client_x: i32) -> f32 {
            (client_x - self.surface.canvas().offset_left()) as f32
        }
    }

    fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)
    }

    fn apply_hud(document: &Document, hud: &HudView) -> Result<(), JsValue> {
        element(document, "score")?.set_text_content(Some(&hud.score));
        element(document, "lives")?.set_text_content(Some(&hud.lives));

        let start = element(document, "startButton")?;
        start
            .style()
            .set_property("display", display_value(hud.start_visible))?;

        let pause = element(document, "pauseButton")?;
        pause
            .style()
            .set_property("display", display_value(hud.pause_visible))?;
        pause.set_text_content(Some(hud.pause_label));

        let restart = element(document, "restartButton")?;
        restart
            .style()
            .set_property("display", display_value(hud.restart_visible))?;
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Brick Attack starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;

        let tuning = canvas
            .get_attribute("data-tuning")
            .map(|json| Tuning::from_json_or_default(&json))
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(canvas)?;
        let game = Rc::new(RefCell::new(Game {
            app: App::new(seed, tuning),
            surface,
            draw_list: DrawList::new(),
            document: document.clone(),
            loop_active: false,
            last_hud: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&document, game.clone())?;
        setup_buttons(&document, game.clone())?;

        // Welcome screen
        game.borrow_mut().present()?;

        log::info!("Brick Attack ready");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Shared) -> Result<(), JsValue> {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().app.key_down(&event.key());
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().app.key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - absolute position of the paddle center
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let x = g.relative_x(event.client_x());
                g.app.pointer_moved(x);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - first touch only, no page scroll
        {
            let canvas = game.borrow().surface.canvas().clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let x = g.relative_x(touch.client_x());
                    g.app.pointer_moved(x);
                }
            });
            canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, game: Shared) -> Result<(), JsValue> {
        let buttons: [(&str, fn(&mut App)); 3] = [
            ("startButton", App::start),
            ("pauseButton", App::toggle_pause),
            ("restartButton", App::restart),
        ];

        for (id, action) in buttons {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                log::info!("{} clicked", id);
                action(&mut game.borrow_mut().app);
                if let Err(e) = game.borrow_mut().present() {
                    log::error!("Render error: {:?}", e);
                }
                ensure_loop(game.clone());
            });
            element(document, id)?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Schedule the frame loop unless it is already running
    fn ensure_loop(game: Shared) {
        let should_start = {
            let mut g = game.borrow_mut();
            let start = !g.loop_active && g.app.state.phase.is_live();
            if start {
                g.loop_active = true;
            }
            start
        };
        if should_start {
            request_animation_frame(game);
        }
    }

    fn request_animation_frame(game: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Shared, time: f64) {
        let outcome = {
            let mut g = game.borrow_mut();
            let outcome = g.app.frame(time);
            if let Err(e) = g.present() {
                log::error!("Render error: {:?}", e);
            }
            if outcome == FrameOutcome::Stop {
                g.loop_active = false;
            }
            outcome
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless runner plays before giving up (10 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_LIMIT: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_attack::sim::GamePhase;
    use brick_attack::{App, FrameOutcome, Tuning};

    env_logger::init();
    log::info!("Brick Attack (native) starting...");
    log::info!("The playable build runs in the browser; playing a headless autopilot game");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(1);

    let mut app = App::new(seed, Tuning::default());
    app.input.autopilot = true;
    app.start();

    let frame_ms = 1000.0 / 60.0;
    let mut frames = 0;
    while frames < HEADLESS_FRAME_LIMIT {
        let outcome = app.frame(frames as f64 * frame_ms);
        frames += 1;
        if outcome == FrameOutcome::Stop {
            break;
        }
    }

    if app.state.phase == GamePhase::Running {
        log::warn!("Stopped after {frames} frames without a result");
    }

    let summary = serde_json::json!({
        "seed": seed,
        "phase": app.state.phase,
        "score": app.state.score,
        "lives": app.state.lives,
        "bricks_destroyed": app.state.bricks_destroyed,
        "frames": frames,
    });
    println!("{summary}");
}
