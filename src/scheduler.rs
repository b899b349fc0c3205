// Display-refresh driven run loop.
//
// The frame callback owns an `AnimationFrameLoop` that points back at the
// closure itself, so each frame can ask for the next one. The cycle keeps the
// closure alive until the page goes away.

use crate::error::FieldError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub trait FrameScheduler {
    /// Asks the host to call the frame callback again before the next repaint.
    fn request_frame(&mut self) -> Result<(), FieldError>;
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone)]
pub struct AnimationFrameLoop {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrameLoop {
    fn request_frame(&mut self) -> Result<(), FieldError> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| FieldError::Host("frame callback not installed".to_owned()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// Runs `frame` once right away, then once per display refresh, forever.
///
/// `frame` receives the loop so it can request its own next invocation. If it
/// returns an error, or doesn't request a frame, the loop stops.
pub fn run<F>(window: Window, frame: F) -> Result<(), FieldError>
where
    F: FnMut(&mut AnimationFrameLoop) -> Result<(), FieldError> + 'static,
{
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let mut frames = AnimationFrameLoop {
        window,
        callback: Rc::clone(&callback),
    };
    let mut first = frames.clone();
    let frame = Rc::new(RefCell::new(frame));

    let next = Rc::clone(&frame);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = (*next.borrow_mut())(&mut frames) {
            log!("particle background stopped: {}", err);
        }
    }) as Box<dyn FnMut()>));

    // First frame is painted during startup, later ones on animation frames
    let mut first_frame = frame.borrow_mut();
    (*first_frame)(&mut first)
}
