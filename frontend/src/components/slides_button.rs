use yew::prelude::*;

use crate::config::{self, PageContent};

#[derive(Properties, PartialEq)]
pub struct SlidesButtonProps {
    pub content: &'static PageContent,
}

/// Round badge pinned to the bottom-right corner, linking to the pitch deck.
#[function_component(SlidesButton)]
pub fn slides_button(props: &SlidesButtonProps) -> Html {
    html! {
        <a
            href={config::SLIDES_URL}
            aria-label={format!("Open {} pitch slides", props.content.brand)}
            class="fixed bottom-4 right-4 z-50 flex h-14 w-14 items-center justify-center rounded-full bg-[#f5b731] shadow-lg transition-transform hover:scale-105 focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-[#f5b731]"
        >
            <span class="rounded-lg bg-[#1a2238] p-1">
                <img
                    src={props.content.logo}
                    alt={format!("{} logo", props.content.brand)}
                    width="28"
                    height="28"
                    class="h-7 w-7 object-contain"
                />
            </span>
        </a>
    }
}
