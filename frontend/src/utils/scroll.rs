//! Window bindings for the header's scroll behaviour.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::Callback;

use crate::error::DomError;
use crate::motion::header;
use crate::motion::progress::ScrollProgressState;
use crate::utils::dom::{self, ScrollListener};

type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameSlot = RefCell<Option<FrameCallback>>;

struct FrameLoop {
    state: ScrollProgressState,
    pending: Option<i32>,
}

/// Drives [`ScrollProgressState`] from scroll events and animation frames.
///
/// Dropping the binding removes the listener, cancels any pending frame and
/// tears the engine down so a frame already queued by the browser is a no-op.
pub struct ScrollProgressBinding {
    window: Window,
    frame_loop: Rc<RefCell<FrameLoop>>,
    frame: Rc<FrameSlot>,
    _listener: ScrollListener,
}

impl ScrollProgressBinding {
    pub fn attach(on_progress: Callback<f64>) -> Result<Self, DomError> {
        let window = dom::window()?;
        let frame_loop = Rc::new(RefCell::new(FrameLoop {
            state: ScrollProgressState::new(),
            pending: None,
        }));
        let frame: Rc<FrameSlot> = Rc::new(RefCell::new(None));

        let on_frame = {
            let window = window.clone();
            let frame_loop = Rc::downgrade(&frame_loop);
            let slot = Rc::downgrade(&frame);
            FrameCallback::new(move |_timestamp: f64| {
                let (Some(frame_loop), Some(slot)) = (frame_loop.upgrade(), slot.upgrade()) else {
                    return;
                };
                let step = {
                    let mut frame_loop = frame_loop.borrow_mut();
                    frame_loop.pending = None;
                    frame_loop.state.advance()
                };
                if let Some(progress) = step.render {
                    on_progress.emit(progress);
                }
                if step.reschedule {
                    request_frame(&window, &frame_loop, &slot);
                }
            })
        };
        *frame.borrow_mut() = Some(on_frame);

        let listener = {
            let window_for_handler = window.clone();
            let frame_loop = Rc::downgrade(&frame_loop);
            let slot = Rc::downgrade(&frame);
            ScrollListener::attach(&window, move || {
                sample(&window_for_handler, &frame_loop, &slot);
            })?
        };

        sample(&window, &Rc::downgrade(&frame_loop), &Rc::downgrade(&frame));

        Ok(Self {
            window,
            frame_loop,
            frame,
            _listener: listener,
        })
    }
}

impl Drop for ScrollProgressBinding {
    fn drop(&mut self) {
        let mut frame_loop = self.frame_loop.borrow_mut();
        if let Some(id) = frame_loop.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel animation frame: {:?}", err);
            }
        }
        frame_loop.state.teardown();
        drop(frame_loop);
        self.frame.borrow_mut().take();
    }
}

fn sample(window: &Window, frame_loop: &Weak<RefCell<FrameLoop>>, slot: &Weak<FrameSlot>) {
    let (Some(frame_loop), Some(slot)) = (frame_loop.upgrade(), slot.upgrade()) else {
        return;
    };
    let needs_frame = frame_loop
        .borrow_mut()
        .state
        .on_scroll(dom::scroll_y(window));
    if needs_frame {
        request_frame(window, &frame_loop, &slot);
    }
}

fn request_frame(window: &Window, frame_loop: &RefCell<FrameLoop>, slot: &FrameSlot) {
    let requested = match slot.borrow().as_ref() {
        Some(callback) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(DomError::js("requesting animation frame")),
        None => return,
    };
    let mut frame_loop = frame_loop.borrow_mut();
    match requested {
        Ok(id) => frame_loop.pending = Some(id),
        Err(err) => {
            log::warn!("{}", err);
            frame_loop.state.abandon_frame();
        }
    }
}

/// Reports whether the page is scrolled past the classic header threshold.
/// Only changes are emitted.
pub struct ScrollThresholdBinding {
    _listener: ScrollListener,
}

impl ScrollThresholdBinding {
    pub fn attach(on_change: Callback<bool>) -> Result<Self, DomError> {
        let window = dom::window()?;
        let last = Rc::new(Cell::new(None::<bool>));

        let check = {
            let window = window.clone();
            move || {
                let scrolled = header::passes_threshold(dom::scroll_y(&window));
                if last.replace(Some(scrolled)) != Some(scrolled) {
                    on_change.emit(scrolled);
                }
            }
        };
        let check_now = check.clone();
        let listener = ScrollListener::attach(&window, check)?;
        check_now();

        Ok(Self {
            _listener: listener,
        })
    }
}
