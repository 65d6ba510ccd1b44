use web_sys::Element;
use yew::prelude::*;

use crate::motion::reveal::Region;
use crate::utils::observer::RevealBinding;

/// Latches to `true` the first time `node` is visible past the region's
/// threshold. Never goes back to `false`.
#[hook]
pub fn use_reveal(node: NodeRef, region: Region) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let binding = if *revealed {
                    None
                } else if let Some(element) = node.cast::<Element>() {
                    let on_fire = {
                        let revealed = revealed.clone();
                        Callback::from(move |_: ()| revealed.set(true))
                    };
                    match RevealBinding::attach(&element, region, on_fire) {
                        Ok(binding) => Some(binding),
                        Err(err) => {
                            // Never leave a section stuck invisible.
                            log::warn!("revealing {} without observer: {}", region.name(), err);
                            revealed.set(true);
                            None
                        }
                    }
                } else {
                    log::warn!("{} is not mounted, nothing to observe", region.name());
                    None
                };
                move || drop(binding)
            },
            node,
        );
    }
    *revealed
}
