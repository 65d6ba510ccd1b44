use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::error::DomError;
use crate::motion::reveal::{ObservationHandle, Region, RevealWatch, VisibilityEntry};

const ROOT_MARGIN: &str = "0px";

pub struct ViewportObserver {
    observer: IntersectionObserver,
}

impl ObservationHandle for ViewportObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

type WatchSlot = Rc<RefCell<Option<RevealWatch<ViewportObserver>>>>;

/// Watches one region until it first becomes visible enough.
///
/// The observer disconnects itself when the region fires; dropping the
/// binding disconnects it if that never happened.
pub struct RevealBinding {
    watch: WatchSlot,
    _callback: Closure<dyn FnMut(Array)>,
}

impl RevealBinding {
    pub fn attach(element: &Element, region: Region, on_fire: Callback<()>) -> Result<Self, DomError> {
        let watch: WatchSlot = Rc::new(RefCell::new(None));

        let callback = {
            let watch = Rc::downgrade(&watch);
            Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                let Some(watch) = watch.upgrade() else {
                    return;
                };
                let fired = match watch.borrow_mut().as_mut() {
                    Some(watch) => watch.on_entries(
                        entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .map(|entry| visibility_of(&entry)),
                    ),
                    None => false,
                };
                if fired {
                    log::debug!("revealing {}", region.name());
                    on_fire.emit(());
                }
            })
        };

        let options = IntersectionObserverInit::new();
        let thresholds: Array = region
            .observer_thresholds()
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        options.set_threshold(&thresholds);
        options.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(DomError::js("creating intersection observer"))?;
        observer.observe(element);
        *watch.borrow_mut() = Some(RevealWatch::new(region, ViewportObserver { observer }));

        Ok(Self {
            watch,
            _callback: callback,
        })
    }
}

fn visibility_of(entry: &IntersectionObserverEntry) -> VisibilityEntry {
    let root_coverage = match entry.root_bounds() {
        Some(root) if root.height() > 0.0 => entry.intersection_rect().height() / root.height(),
        _ => 0.0,
    };
    VisibilityEntry {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
        root_coverage,
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        let watch = self.watch.borrow_mut().take();
        if let Some(mut watch) = watch {
            watch.dispose();
        }
    }
}
