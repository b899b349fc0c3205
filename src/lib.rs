#[macro_use]
mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod scheduler;
pub mod surface;
pub mod viewport;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

pub use crate::config::FieldConfig;
pub use crate::error::FieldError;
pub use crate::field::ParticleField;
pub use crate::surface::{CanvasSurface, DrawSurface};
pub use crate::viewport::Viewport;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Id of the canvas element the page reserves for the background.
pub const CANVAS_ID: &str = "bg-particles";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Starts the background on `#bg-particles` once the document is parsed.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    launch(CANVAS_ID.to_owned(), None).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn start_on(canvas_id: &str) -> Result<(), JsValue> {
    launch(canvas_id.to_owned(), None).map_err(JsValue::from)
}

/// Like `start`, but with a reproducible particle layout.
#[wasm_bindgen]
pub fn start_with_seed(seed: u32) -> Result<(), JsValue> {
    launch(CANVAS_ID.to_owned(), Some(seed as u64)).map_err(JsValue::from)
}

fn launch(canvas_id: String, seed: Option<u64>) -> Result<(), FieldError> {
    utils::set_panic_hook();
    let window = web_sys::window().ok_or(FieldError::NoWindow)?;
    let document = window.document().ok_or(FieldError::NoDocument)?;
    when_parsed(&document, move || {
        match ParticleBackground::mount(window, &canvas_id, seed)? {
            Some(background) => background.run(),
            None => Ok(()),
        }
    })
}

/// `document.readyState` values past "loading" mean the DOM is parsed.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

// Runs `init` right away if the DOM is already parsed, otherwise on
// DOMContentLoaded.
fn when_parsed<F>(document: &Document, init: F) -> Result<(), FieldError>
where
    F: FnOnce() -> Result<(), FieldError> + 'static,
{
    if is_parsed(&document.ready_state()) {
        return init();
    }
    defer_until_parsed(document, init)
}

/// Runs `init` when `document` fires DOMContentLoaded.
pub fn defer_until_parsed<F>(document: &Document, init: F) -> Result<(), FieldError>
where
    F: FnOnce() -> Result<(), FieldError> + 'static,
{
    let on_parsed = Closure::once(move || {
        if let Err(err) = init() {
            log!("particle background failed to start: {}", err);
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_parsed.as_ref().unchecked_ref(),
    )?;
    on_parsed.forget();
    Ok(())
}

/// Owns the field and its canvas for the lifetime of the page.
///
/// The frame loop and the resize listener each hold a shared handle; neither
/// borrow outlives its callback.
pub struct ParticleBackground {
    window: Window,
    field: Rc<RefCell<ParticleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
}

impl ParticleBackground {
    /// Builds the field for the canvas with `canvas_id` and sizes the canvas.
    ///
    /// Returns `Ok(None)` without touching anything when the canvas or its 2d
    /// context is missing.
    pub fn mount(
        window: Window,
        canvas_id: &str,
        seed: Option<u64>,
    ) -> Result<Option<ParticleBackground>, FieldError> {
        let document = window.document().ok_or(FieldError::NoDocument)?;
        let mut surface = match CanvasSurface::from_document(&document, canvas_id) {
            Some(surface) => surface,
            None => return Ok(None),
        };

        let viewport = Viewport::from_window(&window)?;
        let config = FieldConfig::default();
        let field = match seed {
            Some(seed) => ParticleField::with_seed(viewport, config, seed),
            None => ParticleField::from_entropy(viewport, config),
        };
        field.attach(&mut surface)?;

        Ok(Some(ParticleBackground {
            window,
            field: Rc::new(RefCell::new(field)),
            surface: Rc::new(RefCell::new(surface)),
        }))
    }

    /// Hooks up the resize listener and starts the frame loop. Neither is
    /// ever removed.
    pub fn run(self) -> Result<(), FieldError> {
        let ParticleBackground {
            window,
            field,
            surface,
        } = self;

        {
            let field = Rc::clone(&field);
            let surface = Rc::clone(&surface);
            let host = window.clone();
            let on_resize = Closure::wrap(Box::new(move || {
                let resized = Viewport::from_window(&host).and_then(|viewport| {
                    field.borrow_mut().resize(
                        viewport.width,
                        viewport.height,
                        &mut *surface.borrow_mut(),
                    )
                });
                if let Err(err) = resized {
                    log!("particle background resize failed: {}", err);
                }
            }) as Box<dyn FnMut()>);
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
            on_resize.forget();
        }

        scheduler::run(window, move |frames| {
            field
                .borrow_mut()
                .run_frame(&mut *surface.borrow_mut(), frames)
        })
    }
}
