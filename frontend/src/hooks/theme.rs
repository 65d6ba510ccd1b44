use yew::prelude::*;

use crate::theme::{self, LocalThemeStore, Theme};

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

/// Reads the stored preference once on mount; every toggle is written back
/// and mirrored on the document root.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let current = use_state_eq(|| theme::load(&LocalThemeStore));

    {
        let mounted = *current;
        use_effect_with_deps(
            move |_| {
                log::info!("theme: {}", mounted);
                if let Err(err) = theme::apply_to_document(mounted) {
                    log::warn!("{}", err);
                }
                || ()
            },
            (),
        );
    }

    let toggle = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current.toggled();
            current.set(next);
            theme::persist(&LocalThemeStore, next);
            if let Err(err) = theme::apply_to_document(next) {
                log::warn!("{}", err);
            }
            log::info!("theme changed to {}", next);
        })
    };

    ThemeHandle {
        theme: *current,
        toggle,
    }
}
