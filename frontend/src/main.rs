use gloo_timers::callback::Timeout;
use time::OffsetDateTime;
use yew::prelude::*;
use yew_router::prelude::*;

mod browser_store;
mod config;
mod content;
mod home;
mod news;
mod open_in_app;
mod styles;
mod voting;

use crate::config::CONFIG;
use crate::home::Home;
use crate::open_in_app::OpenInAppPrompt;
use crate::styles::*;
use crate::voting::VotingPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/voting")] Voting,
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let link = |route: Route, label: &str| {
        let active = current_route == Some(route.clone());
        html! {
            <Link<Route> to={route} classes={classes!(
                NAV_LINK,
                if active { NAV_LINK_ACTIVE } else { "" }
            )}>
                <span onclick={close_menu.clone()}>{label}</span>
            </Link<Route>>
        }
    };

    html! {
        <nav class={NAV}>
            <div class="container mx-auto px-6 py-3 flex justify-between items-center">
                <span class="font-bold text-slate-800">{CONFIG.team_name}</span>
                <div class="hidden md:flex space-x-4">
                    {link(Route::Home, "Главная")}
                    {link(Route::Voting, "Голосование")}
                </div>
                <button onclick={toggle_menu} class="md:hidden text-slate-700 text-2xl" aria-label="Меню">
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            {if *menu_open {
                html! {
                    <div class="md:hidden flex flex-col px-6 pb-4 space-y-2 bg-white border-t border-slate-100">
                        {link(Route::Home, "Главная")}
                        {link(Route::Voting, "Голосование")}
                    </div>
                }
            } else { html! {} }}
        </nav>
    }
}

#[function_component(Splash)]
fn splash() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(CONFIG.splash_ms, move || visible.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-[60] bg-gradient-to-br from-blue-600 to-indigo-700 flex flex-col items-center justify-center text-white transition-opacity duration-500">
            <h1 class="text-4xl font-extrabold mb-2 animate-pulse">{"Движение Первых"}</h1>
            <p class="text-blue-200">{CONFIG.school_name}</p>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let year = OffsetDateTime::now_utc().year();

    html! {
        <BrowserRouter>
            <div class={PAGE}>
                <Splash />
                <Navigation />
                <div class="pt-14">
                    <Switch<Route> render={switch} />
                </div>
                <OpenInAppPrompt />
                <footer class="bg-white border-t border-slate-200 py-6 mt-12">
                    <p class={combine_classes(TEXT_MUTED, "text-center")}>
                        {format!("© {} {} · {}", year, CONFIG.team_name, CONFIG.school_name)}
                    </p>
                </footer>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Voting => html! { <VotingPage /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
