use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::motion::counter::{CounterState, CounterView};

/// Counts up once `active` turns true. Runs at most once per mount.
///
/// Teardown cancels the count and aborts the interval, so no tick writes
/// state after unmount.
#[hook]
pub fn use_counter(active: bool) -> CounterView {
    let view = use_state_eq(CounterView::default);
    {
        let view = view.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let counter = Rc::new(RefCell::new(CounterState::default()));
                let (abort, registration) = AbortHandle::new_pair();
                if *active && *view == CounterView::default() {
                    let counter = counter.clone();
                    let tick_ms = counter.borrow().tick_ms();
                    spawn_local(async move {
                        let mut ticks = Abortable::new(IntervalStream::new(tick_ms), registration);
                        while ticks.next().await.is_some() {
                            if counter.borrow_mut().tick().is_none() {
                                break;
                            }
                            let next = CounterView::of(&counter.borrow());
                            view.set(next);
                            if next.done {
                                log::debug!("counter reached {}", next.value);
                                break;
                            }
                        }
                    });
                }
                move || {
                    counter.borrow_mut().cancel();
                    abort.abort();
                }
            },
            active,
        );
    }
    {
        let done = view.done;
        let view = view.clone();
        use_effect_with_deps(
            move |done: &bool| {
                if *done {
                    if let Some(next) = view.with_suffix() {
                        view.set(next);
                    }
                }
                || ()
            },
            done,
        );
    }
    *view
}
