//! Nova Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use nova_jump::Settings;
    use nova_jump::platform::{KeyState, captures_scroll};
    use nova_jump::renderer::{RenderState, build_frame};
    use nova_jump::sim::{GameEvent, GameState, TickReport, tick};

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{} element", id)))
    }

    /// DOM nodes the game writes to, resolved once at startup
    struct Hud {
        score: Element,
        level: Element,
        health_fill: HtmlElement,
        overlay: Element,
        overlay_title: Element,
        overlay_message: Element,
        final_score: Element,
    }

    impl Hud {
        fn resolve(document: &Document) -> Result<Self, JsValue> {
            Ok(Self {
                score: element(document, "scoreDisplay")?,
                level: element(document, "levelDisplay")?,
                health_fill: element(document, "healthFill")?.dyn_into()?,
                overlay: element(document, "gameOverlay")?,
                overlay_title: element(document, "overlayTitle")?,
                overlay_message: element(document, "overlayMessage")?,
                final_score: element(document, "finalScore")?,
            })
        }

        fn update(&self, report: &TickReport) -> Result<(), JsValue> {
            self.score.set_text_content(Some(&report.score.to_string()));
            self.level.set_text_content(Some(&report.level.to_string()));
            self.health_fill.style().set_property(
                "width",
                &format!("{}%", report.health_fraction * 100.0),
            )?;

            if report.events.contains(&GameEvent::Restarted) {
                self.overlay.class_list().remove_1("active")?;
            }

            if let Some(terminal) = &report.terminal {
                self.overlay_title.set_text_content(Some(terminal.title));
                self.overlay_message
                    .set_text_content(Some(&terminal.message));
                self.final_score
                    .set_text_content(Some(&terminal.final_score.to_string()));
                self.overlay.class_list().add_1("active")?;
            }

            Ok(())
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        keys: KeyState,
        settings: Settings,
        hud: Hud,
    }

    impl Game {
        /// One displayed frame: tick once, draw, refresh the HUD
        fn frame(&mut self) {
            let input = self.keys.snapshot();
            let report = tick(&mut self.state, &input);

            for event in &report.events {
                log::debug!("{:?}", event);
            }

            self.render();

            if let Err(e) = self.hud.update(&report) {
                log::warn!("HUD update failed: {:?}", e);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_frame(&self.state, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Nova Jump starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?.dyn_into()?;
        let hud = Hud::resolve(&document)?;
        let restart_btn = element(&document, "restartBtn")?;

        // Backbuffer follows the displayed size at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {}", e)))?;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            render_state: Some(render_state),
            keys: KeyState::new(),
            settings,
            hud,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone())?;
        setup_restart_button(&restart_btn, game.clone())?;

        request_animation_frame(game);

        log::info!("Nova Jump running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Key down: record held key, latch restart, keep the page from scrolling
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if captures_scroll(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().keys.key_down(&key);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
                log::debug!("Released held keys (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(button: &Element, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().state.restart();
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Nova Jump (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1200);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    headless::run(ticks, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session that exercises the simulation without a browser
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use nova_jump::sim::{GameEvent, GameState, TickInput, tick};

    /// Hold right and hop on a fixed rhythm
    fn scripted_input(t: u64) -> TickInput {
        TickInput {
            right: true,
            jump: t % 45 < 3,
            ..Default::default()
        }
    }

    pub fn run(ticks: u64, seed: u64) {
        let mut state = GameState::new(seed);
        log::info!("Running {} ticks with seed {}", ticks, seed);

        for t in 0..ticks {
            let report = tick(&mut state, &scripted_input(t));

            for event in &report.events {
                match event {
                    GameEvent::Jumped => log::trace!("[{}] jump", t),
                    GameEvent::CoinCollected { score } => {
                        log::info!("[{}] coin, score {}", t, score)
                    }
                    other => log::info!("[{}] {:?}", t, other),
                }
            }

            if let Some(terminal) = report.terminal {
                log::info!("{} {}", terminal.title, terminal.message);
                break;
            }
        }

        println!(
            "level {} | score {} | health {} | x {:.1} | phase {:?}",
            state.level.number(),
            state.score,
            state.health,
            state.player.pos.x,
            state.phase
        );
    }
}
