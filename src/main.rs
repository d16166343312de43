//! Circle Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! browser build draws to a canvas; the native build runs a headless demo
//! session under the autopilot.

use circle_runner::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Started => log::debug!("Run started"),
        GameEvent::Spawned { id } => log::trace!("Obstacle {} spawned", id),
        GameEvent::Died {
            score,
            high_score,
            new_high,
        } => {
            if *new_high {
                log::info!("Game over - new best {:.0}!", high_score);
            } else {
                log::info!("Game over - score {:.0} (best {:.0})", score, high_score);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use circle_runner::renderer::CanvasRenderer;
    use circle_runner::sim::Session;
    use circle_runner::{Autopilot, FrameDriver, InputSource, Keyboard};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        renderer: CanvasRenderer,
        keyboard: Keyboard,
        autopilot: Autopilot,
        /// Attract mode: the autopilot plays instead of the keyboard
        demo: bool,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let input: &mut dyn InputSource = if self.demo {
                &mut self.autopilot
            } else {
                &mut self.keyboard
            };
            for event in self.driver.frame(input, time) {
                super::log_event(&event);
            }

            if let Err(e) = self.renderer.render(&self.driver.snapshot()) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn toggle_demo(&mut self) {
            self.demo = !self.demo;
            self.keyboard.release_all();
            log::info!("Demo mode: {}", self.demo);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Circle Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(seed);
        canvas.set_width(session.config.arena_width as u32);
        canvas.set_height(session.config.arena_height as u32);

        let renderer = match CanvasRenderer::new(&canvas) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to create canvas renderer: {:?}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(session),
            renderer,
            keyboard: Keyboard::new(),
            autopilot: Autopilot::new(),
            demo: false,
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Circle Runner running (seed {})", seed);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == "KeyI" {
                    g.toggle_demo();
                    return;
                }
                // Keep arrows/space from scrolling the page
                if g.keyboard.key_down(&code) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keyboard.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-ups are lost while unfocused, and the next frame may come much later
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.keyboard.release_all();
                g.driver.reset_clock();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::str::FromStr;
    use std::time::{SystemTime, UNIX_EPOCH};

    use circle_runner::consts::NOMINAL_FRAME_MS;
    use circle_runner::{Autopilot, Config, FrameDriver};

    /// Path to a JSON config overriding the defaults
    const CONFIG_ENV: &str = "CIRCLE_RUNNER_CONFIG";
    const SEED_ENV: &str = "CIRCLE_RUNNER_SEED";
    const FRAMES_ENV: &str = "CIRCLE_RUNNER_FRAMES";
    /// One minute at the nominal frame rate
    const DEFAULT_FRAMES: u32 = 3600;

    fn env_or<T: FromStr>(key: &str, default: T) -> T {
        match std::env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unparsable {}={:?}", key, raw);
                default
            }),
            Err(_) => default,
        }
    }

    fn load_config() -> Result<Config, Box<dyn Error>> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)?;
                let config = Config::from_json(&json)?;
                log::info!("Loaded config from {}", path);
                Ok(config)
            }
            Err(_) => Ok(Config::default()),
        }
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let config = load_config()?;
        let clock_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seed = env_or(SEED_ENV, clock_seed);
        let frames = env_or(FRAMES_ENV, DEFAULT_FRAMES);

        log::info!("Headless demo: seed {}, {} frames", seed, frames);

        let mut driver = FrameDriver::with_config(config, seed)?;
        let mut pilot = Autopilot::new();
        for frame in 0..frames {
            let now = frame as f64 * NOMINAL_FRAME_MS;
            for event in driver.frame(&mut pilot, now) {
                super::log_event(&event);
            }
        }

        println!("{}", serde_json::to_string_pretty(&driver.snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Circle Runner (native) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
