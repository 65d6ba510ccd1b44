use yew::prelude::*;

use crate::config::{self, PageContent};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ClassicHeaderProps {
    pub content: &'static PageContent,
    pub theme: Theme,
    /// Past the scroll threshold.
    pub scrolled: bool,
    pub on_toggle_theme: Callback<MouseEvent>,
}

/// Full-width bar; transparent at the top, frosted once scrolled. The look
/// change is a CSS transition, not scroll-driven.
#[function_component(ClassicHeader)]
pub fn classic_header(props: &ClassicHeaderProps) -> Html {
    let theme = props.theme;
    let surface = if props.scrolled {
        "border-b border-white/10 bg-background/80 backdrop-blur-md"
    } else {
        "bg-transparent"
    };
    let link_class = "text-sm font-medium text-muted-foreground hover:text-foreground transition";

    html! {
        <header class={format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}", surface)}>
            <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4 sm:px-6 lg:px-8">
                <a href="/" class="flex items-center gap-2">
                    <img
                        src={theme.pick(props.content.logo_on_light, props.content.logo_on_dark)}
                        alt={props.content.brand}
                        width="120"
                        height="32"
                        class="h-8 w-auto"
                    />
                </a>
                <nav class="flex items-center gap-4">
                    { for config::CLASSIC_NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class={link_class}>{*label}</a>
                    }) }
                    <button
                        onclick={props.on_toggle_theme.clone()}
                        class="rounded-md p-2 text-muted-foreground hover:text-foreground hover:bg-white/10 transition"
                        aria-label="Toggle theme"
                    >
                        <i class={theme.pick("fa-solid fa-moon h-4 w-4", "fa-solid fa-sun h-4 w-4")}></i>
                    </button>
                </nav>
            </div>
        </header>
    }
}
