use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Storage, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// `<html>`, where the theme class lives.
pub fn root_element() -> Result<Element, DomError> {
    document()?.document_element().ok_or(DomError::NoRootElement)
}

pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()
        .map_err(DomError::js("opening local storage"))?
        .ok_or(DomError::NoStorage)
}

/// Current vertical scroll offset. Reads as the top of the page if the
/// browser refuses to answer.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// A passive `scroll` listener on the window, removed on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(window: &Window, handler: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(DomError::js("adding scroll listener"))?;
        Ok(Self {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {:?}", err);
        }
    }
}
