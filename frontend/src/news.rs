use yew::prelude::*;
use yew_router::prelude::*;

use shared::models::NewsItem;

use crate::content::{self, ELECTION_NEWS_ID};
use crate::styles::*;
use crate::Route;

/// News feed with a modal detail view. Article bodies are trusted HTML from
/// our own content data, rendered unescaped.
#[function_component(NewsFeed)]
pub fn news_feed() -> Html {
    let items = use_memo(|_| content::news(), ());
    let selected = use_state(|| None::<NewsItem>);
    let navigator = use_navigator();

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <section class={SECTION}>
            <h2 class={HEADING_MD}>{"Новости"}</h2>
            <div class="grid gap-6 md:grid-cols-2">
                {for items.iter().map(|item| {
                    let selected = selected.clone();
                    let this = item.clone();
                    let onclick = Callback::from(move |_| selected.set(Some(this.clone())));
                    html! {
                        <div class={CARD_HOVER} {onclick}>
                            {if let Some(url) = &item.image_url {
                                html! { <img src={url.clone()} alt={item.title.clone()} class="rounded-lg mb-4 w-full object-cover max-h-48" /> }
                            } else { html! {} }}
                            <span class="inline-block bg-blue-100 text-blue-700 text-xs font-semibold px-2 py-1 rounded mb-2">
                                {&item.date}
                            </span>
                            <h3 class={HEADING_SM}>{&item.title}</h3>
                            <p class={TEXT_MUTED}>{&item.content}</p>
                        </div>
                    }
                })}
            </div>

            {if let Some(item) = &*selected {
                news_modal(item, close, navigator.clone())
            } else { html! {} }}
        </section>
    }
}

fn news_modal(item: &NewsItem, close: Callback<MouseEvent>, navigator: Option<Navigator>) -> Html {
    let body = Html::from_html_unchecked(AttrValue::from(item.full_content.clone()));
    let links_to_voting = item.id.as_deref() == Some(ELECTION_NEWS_ID);

    let go_vote = navigator.map(|navigator| {
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Voting))
    });

    // Clicks inside the panel must not bubble up to the closing backdrop.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={MODAL_BACKDROP} onclick={close.clone()}>
            <div class={MODAL_PANEL} onclick={swallow}>
                <div class="flex justify-between items-start mb-4">
                    <h3 class={HEADING_SM}>{&item.title}</h3>
                    <button onclick={close} class="text-slate-400 hover:text-slate-700 text-2xl leading-none" aria-label="Закрыть">
                        {"×"}
                    </button>
                </div>
                <div class="prose max-w-none">{body}</div>
                {match (links_to_voting, go_vote) {
                    (true, Some(go_vote)) => html! {
                        <div class="mt-6 text-center">
                            <button onclick={go_vote} class={combine_classes(BUTTON_BASE, BUTTON_PRIMARY)}>
                                {"Перейти к голосованию"}
                            </button>
                        </div>
                    },
                    _ => html! {},
                }}
            </div>
        </div>
    }
}
