use gloo_timers::callback::Timeout;
use yew::prelude::*;

use shared::storage::{VoteStore, DISMISS_OPEN_APP_KEY};

use crate::browser_store::BrowserStore;
use crate::config::CONFIG;
use crate::styles::*;

/// Offers the companion app to mobile visitors browsing outside the
/// installed app: shown after a delay, never in standalone display mode, and
/// never again once dismissed with "don't show again".
#[function_component(OpenInAppPrompt)]
pub fn open_in_app_prompt() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = should_offer().then(|| {
                    Timeout::new(CONFIG.open_in_app_delay_ms, move || visible.set(true))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    let open = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(CONFIG.app_deep_link);
        }
    });

    let dismiss = {
        let visible = visible.clone();
        move |remember: bool| {
            let visible = visible.clone();
            Callback::from(move |_: MouseEvent| {
                if remember {
                    let _ = BrowserStore::new().set(DISMISS_OPEN_APP_KEY, "true");
                }
                visible.set(false);
            })
        }
    };

    html! {
        <div class={MODAL_BACKDROP}>
            <div class={combine_classes(MODAL_PANEL, "max-w-md text-center")}>
                <h3 class={HEADING_SM}>{"Открыть в приложении?"}</h3>
                <p class={combine_classes(TEXT_MUTED, "mb-6")}>
                    {"Сайт удобнее смотреть в нашем приложении."}
                </p>
                <div class="flex flex-col gap-3">
                    <button onclick={open} class={combine_classes(BUTTON_BASE, BUTTON_PRIMARY)}>
                        {"Открыть в приложении"}
                    </button>
                    <button onclick={dismiss(false)} class={combine_classes(BUTTON_BASE, BUTTON_MUTED)}>
                        {"Позже"}
                    </button>
                    <button onclick={dismiss(true)} class="text-sm text-slate-500 hover:underline">
                        {"Больше не показывать"}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Mobile browser, not already running standalone, not previously dismissed.
fn should_offer() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let standalone = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if standalone {
        return false;
    }

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let mobile = user_agent.contains("Mobi") || user_agent.contains("Android");
    if !mobile {
        return false;
    }

    let dismissed = matches!(
        BrowserStore::new().get(DISMISS_OPEN_APP_KEY),
        Ok(Some(v)) if v == "true"
    );
    !dismissed
}
