use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::content;
use crate::news::NewsFeed;
use crate::styles::*;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let values = content::values();
    let projects = content::projects();
    let photos = content::photos();

    html! {
        <>
            <header class="bg-gradient-to-br from-blue-600 to-indigo-700 text-white py-20">
                <div class="container mx-auto px-6 text-center">
                    <p class="text-blue-200 font-semibold mb-2">{CONFIG.school_name}</p>
                    <h1 class="text-4xl md:text-5xl font-extrabold mb-4">{"Движение Первых"}</h1>
                    <p class="text-xl text-blue-100 mb-8">{format!("Первичное отделение «{}»", CONFIG.team_name)}</p>
                    <Link<Route> to={Route::Voting}
                        classes={classes!(combine_classes(BUTTON_BASE, combine_classes(BUTTON_SUCCESS, "text-lg px-8 py-3").as_str()))}>
                        {"Выборы Председателя"}
                    </Link<Route>>
                </div>
            </header>

            <section class={SECTION}>
                <h2 class={combine_classes(HEADING_MD, "text-center")}>{"Наши ценности"}</h2>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {for values.iter().map(|value| html! {
                        <div class={CARD}>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
                                class="w-10 h-10 text-blue-600 mb-4" fill="none"
                                stroke="currentColor" stroke-width="2">
                                <path stroke-linecap="round" stroke-linejoin="round" d={value.icon.clone()} />
                            </svg>
                            <h3 class={HEADING_SM}>{&value.title}</h3>
                            <p class={TEXT_MUTED}>{&value.description}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class={SECTION_ALT}>
                <div class={SECTION}>
                    <h2 class={HEADING_MD}>{"Проекты"}</h2>
                    <div class="grid gap-6 md:grid-cols-2">
                        {for projects.iter().map(|project| html! {
                            <div class={CARD}>
                                <img src={project.image_url.clone()} alt={project.title.clone()}
                                    class="rounded-lg mb-4 w-full object-cover max-h-56" />
                                <h3 class={HEADING_SM}>{&project.title}</h3>
                                <p class={TEXT_MUTED}>{&project.description}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            {if !photos.is_empty() {
                html! {
                    <section class={SECTION}>
                        <h2 class={HEADING_MD}>{"Фотографии"}</h2>
                        <div class="grid gap-4 sm:grid-cols-2 md:grid-cols-3">
                            {for photos.iter().map(|photo| html! {
                                <img src={photo.image_url.clone()} alt={photo.alt.clone()}
                                    class="rounded-lg object-cover w-full h-48" />
                            })}
                        </div>
                    </section>
                }
            } else { html! {} }}

            <NewsFeed />
        </>
    }
}
