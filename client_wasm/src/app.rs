//! Game startup and the animation frame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use game_core::{Config, Events, FrameLoop, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::input;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running game
#[wasm_bindgen]
pub struct GameHandle {
    stopped: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Stop scheduling frames; the last frame stays on the canvas
    pub fn stop(&self) {
        if !self.stopped.replace(true) {
            console_log!("Game stopped");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Start the game on `canvas` and run it until stopped
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<GameHandle, JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let surface = CanvasSurface::from_canvas(&canvas).map_err(|e| JsValue::from_str(&e))?;

    let config = Config::with_surface(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    console_log!(
        "Starting game on {}x{} canvas (seed {})",
        config.width,
        config.height,
        seed
    );

    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(Game::new(config, seed))));
    let stopped = Rc::new(Cell::new(false));

    input::listen_pointer(&canvas, frame_loop.clone()).map_err(|e| JsValue::from_str(&e))?;
    schedule_frames(window, surface, frame_loop, stopped.clone())?;

    Ok(GameHandle { stopped })
}

/// Update, render and reschedule on every display refresh
fn schedule_frames(
    window: Window,
    mut surface: CanvasSurface,
    frame_loop: Rc<RefCell<FrameLoop>>,
    stopped: Rc<Cell<bool>>,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if stopped.get() {
            // Break the callback's reference to itself
            let _ = next.borrow_mut().take();
            return;
        }

        {
            let mut frame_loop = frame_loop.borrow_mut();
            let events = frame_loop.frame(&mut surface);
            log_events(events);
        }

        if let Err(e) = request_frame(&frame_window, &next) {
            console_log!("Failed to schedule frame: {:?}", e);
        }
    }));

    request_frame(&window, &callback)
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<(), JsValue> {
    let callback = callback.borrow();
    let closure = callback
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}

fn log_events(events: &Events) {
    if events.ball_exited_left {
        console_log!("Ball got past the player, serving again");
    } else if events.ball_exited_right {
        console_log!("Ball got past the opponent, serving again");
    }
}
