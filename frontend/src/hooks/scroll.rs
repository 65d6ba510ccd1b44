use yew::prelude::*;

use crate::utils::scroll::{ScrollProgressBinding, ScrollThresholdBinding};

/// Damped header progress in `[0, 1]`, updated from scroll position.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let on_progress = Callback::from(move |value: f64| progress.set(value));
                let binding = match ScrollProgressBinding::attach(on_progress) {
                    Ok(binding) => Some(binding),
                    Err(err) => {
                        log::warn!("header stays in its top position: {}", err);
                        None
                    }
                };
                move || drop(binding)
            },
            (),
        );
    }
    *progress
}

/// Whether the page is scrolled past the classic header threshold.
#[hook]
pub fn use_scroll_threshold() -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let on_change = Callback::from(move |value: bool| scrolled.set(value));
                let binding = ScrollThresholdBinding::attach(on_change)
                    .map_err(|err| log::warn!("scroll threshold unavailable: {}", err))
                    .ok();
                move || drop(binding)
            },
            (),
        );
    }
    *scrolled
}
