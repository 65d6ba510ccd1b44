use yew::prelude::*;

use crate::config::{self, PageContent};
use crate::motion::header::{cta_label, HeaderGeometry};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct FloatingHeaderProps {
    pub content: &'static PageContent,
    pub theme: Theme,
    /// Damped scroll progress in `[0, 1]`.
    pub progress: f64,
    pub on_toggle_theme: Callback<MouseEvent>,
}

/// Glass header that shrinks into a centred pill as the page scrolls.
#[function_component(FloatingHeader)]
pub fn floating_header(props: &FloatingHeaderProps) -> Html {
    let theme = props.theme;
    let geometry = HeaderGeometry::at(props.progress);
    let link_class = format!(
        "text-sm font-medium transition {}",
        theme.pick(
            "text-[hsl(214,35%,26%)] hover:text-[hsl(214,35%,40%)]",
            "text-white hover:text-white/80",
        )
    );

    html! {
        <header class="fixed left-0 right-0 z-50" style={geometry.header_style()}>
            <div class="mx-auto w-full" style={geometry.outer_style()}>
                <div
                    class="border border-white/30 bg-gradient-to-br from-white/40 via-white/30 to-[rgba(245,180,0,0.18)] shadow-[0_10px_40px_-15px_rgba(0,0,0,0.3)] ring-1 ring-white/20 backdrop-blur-xl"
                    style={geometry.shell_style()}
                >
                    <div class="flex items-center justify-between" style={geometry.bar_style()}>
                        <div class="mx-auto flex w-full items-center justify-between" style={geometry.inner_style()}>
                            <div class="flex items-center gap-3">
                                <a href="/" class="cursor-pointer">
                                    <div class="relative" style={geometry.logo_style()}>
                                        <img
                                            src={props.content.logo}
                                            alt={format!("{} logo", props.content.brand)}
                                            class="absolute inset-0 h-full w-full object-contain"
                                        />
                                    </div>
                                </a>
                            </div>
                            <nav class="hidden items-center md:flex" style={geometry.nav_style()}>
                                { for config::NAV_SECTIONS.iter().map(|(id, label)| html! {
                                    <a href={format!("/#{}", id)} class={link_class.clone()}>{*label}</a>
                                }) }
                            </nav>
                            <div class="flex items-center gap-3">
                                <button
                                    onclick={props.on_toggle_theme.clone()}
                                    class={format!("rounded-md p-2 transition {}", theme.pick("text-[hsl(214,35%,26%)] hover:bg-black/10", "text-white hover:bg-white/10"))}
                                    aria-label="Toggle theme"
                                >
                                    <i class={theme.pick("fa-solid fa-moon h-5 w-5", "fa-solid fa-sun h-5 w-5")}></i>
                                </button>
                                <a
                                    href={config::get_contact_url()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class={format!(
                                        "min-w-[118px] rounded-full border-2 px-4 py-2 text-center text-sm font-semibold transition whitespace-nowrap {}",
                                        theme.pick(
                                            "border-white text-[hsl(214,35%,26%)] hover:bg-white/10",
                                            "border-[hsl(214,35%,26%)] text-white hover:bg-[hsl(214,35%,26%)]/10",
                                        )
                                    )}
                                >
                                    {cta_label(props.progress)}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
