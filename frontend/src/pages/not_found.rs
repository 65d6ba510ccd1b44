use yew::prelude::*;
use yew_router::components::Link;

use crate::hooks::theme::use_theme;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let theme = use_theme().theme;
    html! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-6 bg-background px-6 text-center">
            <h1 class={format!("text-5xl font-bold {}", theme.pick("text-[hsl(214,35%,26%)]", "text-white"))}>{"404"}</h1>
            <p class={format!("text-lg {}", theme.pick("text-[hsl(214,35%,26%)]/70", "text-white/70"))}>
                {"This page doesn't exist."}
            </p>
            <Link<Route> to={Route::Home} classes="rounded-md bg-primary px-5 py-3 text-sm font-semibold text-primary-foreground">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
