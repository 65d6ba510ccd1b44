use yew::prelude::*;

use crate::components::classic_header::ClassicHeader;
use crate::components::footer::Footer;
use crate::components::header::FloatingHeader;
use crate::components::slides_button::SlidesButton;
use crate::config::{self, HeaderMode, PageContent};
use crate::hooks::counter::use_counter;
use crate::hooks::reveal::use_reveal;
use crate::hooks::scroll::{use_scroll_progress, use_scroll_threshold};
use crate::hooks::theme::use_theme;
use crate::motion::reveal::Region;
use crate::theme::Theme;

const FADE_IN: &str = "animate-[fadeInUp_0.8s_ease-out_forwards]";
const FADE_IN_SHORT_DELAY: &str = "animate-[fadeInUp_0.8s_ease-out_0.1s_forwards]";
const FADE_IN_DELAYED: &str = "animate-[fadeInUp_0.8s_ease-out_0.3s_forwards]";

const PRIMARY_TEXT: (&str, &str) = ("text-[hsl(214,35%,26%)]", "text-white");
const GLASS_CARD: (&str, &str) = (
    "border-[hsl(214,35%,26%)]/20 bg-gradient-to-br from-white/80 via-white/70 to-[rgba(245,180,0,0.15)] ring-[hsl(214,35%,26%)]/10",
    "border-slate-600/50 bg-gradient-to-br from-slate-800/90 via-slate-700/80 to-[rgba(245,180,0,0.3)] ring-slate-600/30",
);

const KEYFRAMES_CSS: &str = r#"
    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(24px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
"#;

/// Class for a block that animates in once its region has been revealed.
fn reveal(shown: bool, animation: &'static str) -> &'static str {
    if shown {
        animation
    } else {
        "opacity-0"
    }
}

fn tone(theme: Theme, pair: (&'static str, &'static str)) -> &'static str {
    theme.pick(pair.0, pair.1)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = config::PageVariant::active().content();
    let theme = use_theme();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let header = match content.header_mode {
        HeaderMode::Continuous => html! {
            <ContinuousHeader content={content} theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />
        },
        HeaderMode::Threshold => html! {
            <ThresholdHeader content={content} theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-background text-foreground">
            <style>{KEYFRAMES_CSS}</style>
            {header}
            <main class="pt-16 md:pt-20">
                <Hero content={content} theme={theme.theme} />
                <ProblemSection content={content} theme={theme.theme} />
                <FeaturesSection content={content} theme={theme.theme} />
                <TeamSection content={content} theme={theme.theme} />
            </main>
            <Footer content={content} theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />
            <SlidesButton content={content} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    content: &'static PageContent,
    theme: Theme,
    on_toggle_theme: Callback<MouseEvent>,
}

// Each header owns its scroll subscription so only the active mode listens.
#[function_component(ContinuousHeader)]
fn continuous_header(props: &HeaderProps) -> Html {
    let progress = use_scroll_progress();
    html! {
        <FloatingHeader
            content={props.content}
            theme={props.theme}
            progress={progress}
            on_toggle_theme={props.on_toggle_theme.clone()}
        />
    }
}

#[function_component(ThresholdHeader)]
fn threshold_header(props: &HeaderProps) -> Html {
    let scrolled = use_scroll_threshold();
    html! {
        <ClassicHeader
            content={props.content}
            theme={props.theme}
            scrolled={scrolled}
            on_toggle_theme={props.on_toggle_theme.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: &'static PageContent,
    theme: Theme,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let content = props.content;
    let theme = props.theme;

    html! {
        <section class="relative min-h-[700px] sm:min-h-[650px] md:min-h-0 md:h-[85vh] overflow-hidden">
            <div class="absolute inset-0 z-0 overflow-hidden">
                <iframe
                    class="absolute top-1/2 left-1/2 h-[200vh] w-[355vh] -translate-x-1/2 -translate-y-1/2 pointer-events-none max-w-none"
                    src={content.hero_video_embed}
                    title={format!("{} hero background", content.brand)}
                    allow="autoplay; muted; loop"
                />
            </div>
            <div
                class="pointer-events-none absolute inset-0 z-[1] bg-gradient-to-br from-black/65 via-black/45 to-black/55"
                aria-hidden="true"
            />
            <div class="relative z-10 flex items-center justify-center px-4 sm:px-6 py-8 sm:py-12 md:py-16 min-h-[700px] sm:min-h-[650px] md:min-h-0 md:h-full">
                <div class="w-full max-w-6xl animate-[fadeInUp_0.8s_ease-out_forwards]">
                    <div class={format!(
                        "relative z-10 flex flex-col gap-6 sm:gap-8 rounded-xl sm:rounded-2xl border p-5 sm:p-6 md:p-7 shadow-[0_20px_70px_-35px_rgba(0,0,0,0.4)] backdrop-blur-xl ring-1 lg:flex-row lg:items-center lg:gap-12 {}",
                        theme.pick(
                            "border-[hsl(214,35%,26%)]/20 bg-gradient-to-br from-[hsl(214,35%,26%)]/95 via-[hsl(214,35%,26%)]/90 to-[rgba(245,180,0,0.32)] ring-[hsl(214,35%,26%)]/30",
                            "border-white/20 bg-gradient-to-br from-[rgba(11,23,45,0.88)] via-[rgba(15,31,60,0.82)] to-[rgba(245,180,0,0.24)] ring-white/15",
                        )
                    )}>
                        <div class="flex-1 space-y-4 sm:space-y-6">
                            <div class={format!(
                                "inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold animate-[fadeInUp_0.8s_ease-out_0.2s_forwards] opacity-0 {}",
                                theme.pick("bg-white/20 text-white", "bg-[hsl(45,95%,55%)]/35 text-[hsl(220,30%,15%)]")
                            )}>
                                {content.hero_badge}
                            </div>
                            <h1 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold leading-tight text-white drop-shadow-[0_2px_10px_rgba(0,0,0,0.55)] animate-[fadeInUp_0.8s_ease-out_0.4s_forwards] opacity-0">
                                {content.hero_title}
                            </h1>
                            <p class="text-sm sm:text-base md:text-lg text-white drop-shadow-[0_1px_6px_rgba(0,0,0,0.45)] animate-[fadeInUp_0.8s_ease-out_0.6s_forwards] opacity-0">
                                {content.hero_body}
                            </p>
                            <div class="flex flex-col sm:flex-row flex-wrap gap-3 animate-[fadeInUp_0.8s_ease-out_0.8s_forwards] opacity-0">
                                <a
                                    href={config::get_contact_url()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class={format!(
                                        "rounded-md px-5 py-3 text-sm font-semibold shadow-lg transition hover:-translate-y-0.5 text-center {}",
                                        theme.pick(
                                            "bg-[hsl(45,95%,55%)] text-[hsl(214,35%,26%)] shadow-[hsl(45,95%,55%)]/30 hover:bg-[hsl(45,95%,60%)]",
                                            "bg-primary text-primary-foreground shadow-primary/20 hover:bg-primary/90",
                                        )
                                    )}
                                >
                                    {"Get in Touch"}
                                </a>
                                <a
                                    href="#features"
                                    class={format!(
                                        "rounded-md border px-5 py-3 text-sm font-semibold transition text-center {}",
                                        theme.pick(
                                            "border-white/40 text-white hover:border-white hover:bg-white/10",
                                            "border-white/50 text-white hover:border-white hover:bg-white/10",
                                        )
                                    )}
                                >
                                    {"See Features"}
                                </a>
                            </div>
                        </div>
                        <div class="flex-shrink-0 w-full sm:w-auto lg:w-[500px] xl:w-[600px] animate-[fadeInUp_0.8s_ease-out_0.5s_forwards] opacity-0">
                            <img
                                src={content.hero_image}
                                alt="Blueprint clashes visualization"
                                width="600"
                                height="600"
                                class="rounded-lg w-full h-auto"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section(props: &SectionProps) -> Html {
    let content = props.content;
    let theme = props.theme;
    let stats_ref = use_node_ref();
    let boxes_ref = use_node_ref();
    let stats_shown = use_reveal(stats_ref.clone(), Region::ProblemStats);
    let boxes_shown = use_reveal(boxes_ref.clone(), Region::ProblemBoxes);
    let counter = use_counter(stats_shown);

    let primary = tone(theme, PRIMARY_TEXT);
    let suffix = match content.counter_suffix {
        Some(suffix) if counter.show_suffix => suffix,
        _ => "",
    };

    html! {
        <section
            id="problem"
            ref={stats_ref}
            class="relative py-12 sm:py-16 md:py-20 px-4 sm:px-6 bg-background"
        >
            <div class="mx-auto max-w-6xl">
                <div class="flex flex-col items-center gap-12">
                    <div class={format!("text-center {}", reveal(stats_shown, FADE_IN))}>
                        <h2 class={format!("mb-4 text-3xl font-bold md:text-5xl {}", primary)}>
                            {content.problem_title}
                        </h2>
                        <p class={format!("mx-auto max-w-4xl text-base md:text-lg {}", theme.pick("text-[hsl(214,35%,26%)]/75", "text-white/75"))}>
                            {content.problem_body}
                        </p>
                    </div>

                    <div class={format!("text-center {}", reveal(stats_shown, FADE_IN))}>
                        <div class="mb-4 flex items-baseline justify-center">
                            if !content.counter_prefix.is_empty() {
                                <span class={format!("mr-1 text-7xl font-bold md:text-8xl {}", primary)}>
                                    {content.counter_prefix}
                                </span>
                            }
                            <span class={format!("text-8xl font-bold md:text-9xl {}", primary)}>
                                {format!("{}{}", counter.value, suffix)}
                            </span>
                        </div>
                        <p class={format!("text-xl font-semibold {}", theme.pick("text-[hsl(214,35%,26%)]", "text-white/90"))}>
                            {content.counter_label}
                        </p>
                    </div>

                    <div class={format!(
                        "grid w-full max-w-2xl grid-cols-1 gap-6 text-center sm:grid-cols-2 {}",
                        reveal(stats_shown, FADE_IN_SHORT_DELAY)
                    )}>
                        { for content.stats.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <p class={format!("text-3xl font-bold {}", primary)}>{stat.value}</p>
                                <p class={format!("text-sm {}", theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70"))}>{stat.label}</p>
                            </div>
                        }) }
                    </div>

                    <div ref={boxes_ref} class="grid w-full gap-6 md:grid-cols-3">
                        { for content.problems.iter().map(|card| html! {
                            <div key={card.title} class={format!(
                                "flex flex-col items-center gap-4 rounded-2xl border p-6 shadow-[0_10px_40px_-20px_rgba(0,0,0,0.3)] backdrop-blur-xl ring-1 text-center transition-all duration-300 ease-out hover:scale-110 hover:shadow-[0_20px_60px_-15px_rgba(0,0,0,0.4)] hover:-translate-y-1 cursor-pointer {} {}",
                                theme.pick(
                                    "border-[hsl(214,35%,26%)]/20 bg-gradient-to-br from-white/80 via-white/70 to-[rgba(245,180,0,0.15)] ring-[hsl(214,35%,26%)]/10 hover:border-[hsl(214,35%,26%)]/40",
                                    "border-white/30 bg-gradient-to-br from-white/40 via-white/25 to-[rgba(245,180,0,0.18)] ring-white/20 hover:border-white/50",
                                ),
                                reveal(boxes_shown, FADE_IN),
                            )}>
                                <div class={format!("flex-shrink-0 rounded-full p-4 {}", theme.pick("bg-[hsl(214,35%,26%)]/10", "bg-primary/20"))}>
                                    <i class={format!("{} text-3xl {}", card.icon, primary)}></i>
                                </div>
                                <div>
                                    <h3 class={format!("mb-2 text-xl font-bold {}", primary)}>{card.title}</h3>
                                    <p class={format!("text-sm {}", theme.pick("text-[hsl(214,35%,26%)]/80", "text-white/80"))}>{card.body}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section(props: &SectionProps) -> Html {
    let content = props.content;
    let theme = props.theme;
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone(), Region::Features);
    let primary = tone(theme, PRIMARY_TEXT);
    let muted = theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70");

    html! {
        <section
            id="features"
            ref={section_ref}
            class={format!("relative py-20 px-6 backdrop-blur-xl {}", theme.pick(
                "bg-gradient-to-br from-[hsl(210,15%,94%)] via-[hsl(210,15%,96%)] to-[rgba(245,180,0,0.1)]",
                "bg-gradient-to-br from-slate-900/60 via-slate-800/50 to-[rgba(245,180,0,0.2)]",
            ))}
        >
            <div class="mx-auto max-w-6xl">
                <div class={format!("mb-16 text-center {}", reveal(shown, FADE_IN))}>
                    <h2 class={format!("mb-4 text-4xl font-bold md:text-5xl {}", primary)}>{content.features_title}</h2>
                    <p class={format!("text-lg {}", muted)}>{content.features_body}</p>
                </div>

                <div class={format!("grid gap-12 md:grid-cols-2 max-w-5xl mx-auto {}", reveal(shown, FADE_IN_DELAYED))}>
                    { for content.features.iter().map(|feature| html! {
                        <div key={feature.title} class="flex flex-col gap-6 transition-transform duration-300 hover:scale-105">
                            <h3 class={format!("text-center text-2xl font-bold {}", primary)}>{feature.title}</h3>
                            <div class={format!(
                                "relative aspect-video w-full overflow-hidden rounded-xl border shadow-lg backdrop-blur-xl ring-1 {}",
                                tone(theme, GLASS_CARD)
                            )}>
                                <video autoplay=true loop=true muted=true playsinline=true class="h-full w-full object-cover">
                                    <source src={feature.video} type="video/mp4" />
                                    {"Your browser does not support the video tag."}
                                </video>
                            </div>
                            <p class={format!("text-center text-sm {}", muted)}>{feature.caption}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TeamSection)]
fn team_section(props: &SectionProps) -> Html {
    let content = props.content;
    let theme = props.theme;
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone(), Region::Team);
    let primary = tone(theme, PRIMARY_TEXT);

    html! {
        <section id="team" ref={section_ref} class="py-20 px-6 bg-background">
            <div class="mx-auto max-w-6xl">
                <div class={format!("mb-16 text-center {}", reveal(shown, FADE_IN))}>
                    <h2 class={format!("mb-4 text-4xl font-bold md:text-5xl {}", primary)}>{content.team_title}</h2>
                    <p class={format!("text-lg {}", theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70"))}>{content.team_body}</p>
                </div>

                <div class={format!("grid gap-8 md:grid-cols-2 max-w-2xl mx-auto {}", reveal(shown, FADE_IN_DELAYED))}>
                    { for content.team.iter().map(|member| html! {
                        <div key={member.name} class={format!(
                            "flex flex-col overflow-hidden rounded-2xl border shadow-lg backdrop-blur-xl ring-1 transition-transform duration-300 hover:scale-105 {}",
                            theme.pick(
                                "border-[hsl(214,35%,26%)]/20 bg-gradient-to-br from-white/90 via-white/80 to-[rgba(245,180,0,0.12)] ring-[hsl(214,35%,26%)]/10",
                                "border-slate-600/50 bg-gradient-to-br from-slate-800/90 via-slate-700/80 to-[rgba(245,180,0,0.3)] ring-slate-600/30",
                            )
                        )}>
                            <div class="relative aspect-square w-full overflow-hidden">
                                <img
                                    src={member.photo}
                                    alt={member.name}
                                    class={format!("absolute inset-0 h-full w-full {}", member.photo_class)}
                                    style={format!("object-position: {};", member.photo_position)}
                                />
                                <a
                                    href={member.linkedin}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="absolute top-4 right-4 rounded-full border border-white/40 bg-white/30 backdrop-blur-md p-2 shadow-lg ring-1 ring-white/20 transition hover:bg-white/40"
                                >
                                    <i class="fa-brands fa-linkedin h-5 w-5 text-[hsl(214,35%,26%)]"></i>
                                </a>
                            </div>
                            <div class="p-6 text-center">
                                <h3 class={format!("mb-1 text-xl font-bold {}", primary)}>{member.name}</h3>
                                <p class={format!("mb-3 text-sm font-semibold {}", theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70"))}>{member.role}</p>
                                <p class={format!("text-sm {}", theme.pick("text-[hsl(214,35%,26%)]/60", "text-white/60"))}>{member.bio}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_revealed() {
        assert_eq!(reveal(false, FADE_IN), "opacity-0");
        assert_eq!(reveal(true, FADE_IN_DELAYED), FADE_IN_DELAYED);
    }

    #[test]
    fn tone_follows_theme() {
        assert_eq!(tone(Theme::Light, PRIMARY_TEXT), "text-[hsl(214,35%,26%)]");
        assert_eq!(tone(Theme::Dark, PRIMARY_TEXT), "text-white");
    }
}
