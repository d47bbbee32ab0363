//! Mouse input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Command, FrameLoop};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Queue a pointer command for every mouse move over the canvas
pub fn listen_pointer(
    canvas: &HtmlCanvasElement,
    frame_loop: Rc<RefCell<FrameLoop>>,
) -> Result<(), String> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let command = pointer_command(&target, &event);
        frame_loop.borrow_mut().push_command(command);
    });

    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to add mousemove listener: {:?}", e))?;

    // Listener stays registered for the lifetime of the page
    on_move.forget();
    Ok(())
}

/// Pointer position relative to the canvas top edge
pub fn pointer_command(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Command {
    let rect = canvas.get_bounding_client_rect();
    Command::pointer_moved(event.client_y() as f32, rect.top() as f32)
}
