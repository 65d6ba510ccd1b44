use chrono::Datelike;
use yew::prelude::*;

use crate::config::{self, PageContent};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: &'static PageContent,
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let theme = props.theme;
    let content = props.content;
    let heading = format!("text-sm font-semibold {}", theme.pick("text-[hsl(214,35%,26%)]", "text-white"));
    let muted = format!("text-sm {}", theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70"));
    let nav_link = format!(
        "text-sm transition {}",
        theme.pick(
            "text-[hsl(214,35%,26%)]/70 hover:text-[hsl(214,35%,26%)]",
            "text-white/70 hover:text-white",
        )
    );
    let year = chrono::Local::now().year();

    html! {
        <footer class={format!("border-t backdrop-blur-xl {}", theme.pick(
            "border-[hsl(214,35%,26%)]/20 bg-gradient-to-br from-[hsl(210,15%,94%)] via-[hsl(210,15%,96%)] to-[rgba(245,180,0,0.1)]",
            "border-white/20 bg-gradient-to-br from-slate-900/60 via-slate-800/50 to-[rgba(245,180,0,0.2)]",
        ))}>
            <div class="mx-auto max-w-6xl px-6 py-12">
                <div class="grid gap-8 md:grid-cols-3">
                    <div class="space-y-4">
                        <a href="/" class="cursor-pointer">
                            <div class="relative h-16 w-16">
                                <img src={content.logo} alt={format!("{} logo", content.brand)} class="h-full w-full object-contain" />
                            </div>
                        </a>
                        <p class={muted.clone()}>{content.tagline}</p>
                    </div>

                    <div class="space-y-4">
                        <h3 class={heading.clone()}>{"Quick Links"}</h3>
                        <nav class="flex flex-col gap-2">
                            { for config::NAV_SECTIONS.iter().map(|(id, label)| html! {
                                <a href={format!("#{}", id)} class={nav_link.clone()}>{*label}</a>
                            }) }
                        </nav>
                    </div>

                    <div class="space-y-4">
                        <h3 class={heading}>{"Get Started"}</h3>
                        <p class={muted.clone()}>{content.pilot_note}</p>
                        <a
                            href={config::get_contact_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={format!("inline-block rounded-md px-4 py-2 text-sm font-semibold shadow-lg transition text-center {}", theme.pick(
                                "bg-[hsl(214,35%,26%)] text-white shadow-[hsl(214,35%,26%)]/20 hover:bg-[hsl(214,35%,30%)]",
                                "bg-primary text-primary-foreground shadow-primary/20 hover:bg-primary/90",
                            ))}
                        >
                            {"Get in Touch"}
                        </a>
                    </div>
                </div>

                <div class={format!("mt-8 border-t pt-8 flex flex-col md:flex-row justify-between items-center gap-4 {}", theme.pick("border-[hsl(214,35%,26%)]/20", "border-white/20"))}>
                    <p class={muted}>{format!("© {} {}. All rights reserved.", year, content.brand)}</p>
                    <div class="flex items-center gap-6">
                        <button
                            onclick={props.on_toggle_theme.clone()}
                            class={format!("rounded-md p-2 transition {}", theme.pick(
                                "text-[hsl(214,35%,26%)]/70 hover:text-[hsl(214,35%,26%)] hover:bg-[hsl(214,35%,26%)]/10",
                                "text-white/70 hover:text-white hover:bg-white/10",
                            ))}
                            aria-label="Toggle theme"
                        >
                            <i class={theme.pick("fa-solid fa-moon h-4 w-4", "fa-solid fa-sun h-4 w-4")}></i>
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
