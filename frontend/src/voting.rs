use yew::prelude::*;

use shared::election::{CastOutcome, Election};

use crate::browser_store::BrowserStore;
use crate::content;
use crate::styles::*;

pub enum Msg {
    CastVote(u32),
}

/// The election page. The widget is created and initialized once per mount,
/// so the persisted flag and tally survive navigation and reloads.
pub struct VotingPage {
    election: Election<BrowserStore>,
    storage_missing: bool,
}

impl Component for VotingPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut election = Election::new(content::candidates(), BrowserStore::new());
        election.initialize();
        Self { election, storage_missing: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CastVote(id) => match self.election.cast_vote(id) {
                CastOutcome::Recorded | CastOutcome::UnknownCandidate => true,
                CastOutcome::AlreadyVoted => false,
                CastOutcome::StorageUnavailable => {
                    self.storage_missing = true;
                    true
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let has_voted = self.election.has_voted();
        let total = self.election.total_votes();

        html! {
            <div class={SECTION}>
                <h1 class={HEADING_LG}>{"Выборы Председателя Совета Первых"}</h1>
                <p class={combine_classes(TEXT_MUTED, "text-center mb-8")}>
                    {"Каждый может проголосовать один раз. Выбор сохраняется в этом браузере."}
                </p>

                {if self.storage_missing {
                    html! {
                        <div class={ALERT_WARNING}>
                            {"Голосование недоступно: браузер не разрешает сохранение данных."}
                        </div>
                    }
                } else { html! {} }}

                {if has_voted {
                    html! {
                        <div class={ALERT_SUCCESS}>
                            {"Спасибо за участие! Ваш голос учтён."}
                        </div>
                    }
                } else { html! {} }}

                <div class="grid gap-6 md:grid-cols-2 max-w-3xl mx-auto">
                    {for self.election.candidates().iter().map(|candidate| {
                        let onclick = ctx.link().callback({
                            let id = candidate.id;
                            move |_| Msg::CastVote(id)
                        });
                        let percent = if total > 0 { candidate.votes * 100 / total } else { 0 };
                        html! {
                            <div class={CARD}>
                                {if !candidate.photo_url.is_empty() {
                                    html! {
                                        <img src={candidate.photo_url.clone()} alt={candidate.name.clone()}
                                            class="rounded-full w-24 h-24 object-cover mx-auto mb-4" />
                                    }
                                } else {
                                    html! {
                                        <div class="rounded-full w-24 h-24 bg-blue-100 text-blue-600 flex items-center justify-center text-3xl font-bold mx-auto mb-4">
                                            {candidate.name.chars().next().unwrap_or('?').to_string()}
                                        </div>
                                    }
                                }}
                                <h2 class={combine_classes(HEADING_SM, "text-center")}>{&candidate.name}</h2>
                                <p class={combine_classes(TEXT_MUTED, "text-center italic mb-4")}>
                                    {format!("«{}»", candidate.slogan)}
                                </p>
                                <div class="mb-4">
                                    <div class="flex justify-between text-sm text-slate-600 mb-1">
                                        <span>{format!("{} голосов", candidate.votes)}</span>
                                        <span>{format!("{}%", percent)}</span>
                                    </div>
                                    <div class={TALLY_BAR_TRACK}>
                                        <div class={TALLY_BAR_FILL} style={format!("width: {}%", percent)}></div>
                                    </div>
                                </div>
                                <button {onclick} disabled={has_voted}
                                    class={combine_classes(BUTTON_BASE, combine_classes(BUTTON_PRIMARY, "w-full").as_str())}>
                                    {if has_voted { "Голос учтён" } else { "Голосовать" }}
                                </button>
                            </div>
                        }
                    })}
                </div>

                <p class={combine_classes(TEXT_MUTED, "text-center mt-8")}>
                    {format!("Всего голосов: {}", total)}
                </p>
            </div>
        }
    }
}
