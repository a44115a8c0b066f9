use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WaitingPageProps {
    pub room_code: AttrValue,
    pub team_name: AttrValue,
}

#[function_component(WaitingPage)]
pub fn waiting_page(props: &WaitingPageProps) -> Html {
    let mut room = BTreeMap::new();
    room.insert("code", props.room_code.as_str());
    let mut you = BTreeMap::new();
    you.insert("team", props.team_name.as_str());

    html! {
        <main id="main" class="screen screen--center" data-testid="waiting-screen">
            <div class="text-center">
                <p class="accent">{ tr("waiting.room", Some(&room)) }</p>
                <h1 class="title">{ t("app.title") }</h1>
                <h2>{ t("waiting.line1") }</h2>
                <h2>{ t("waiting.line2") }</h2>
                <p class="accent">{ tr("waiting.you", Some(&you)) }</p>
            </div>
        </main>
    }
}
