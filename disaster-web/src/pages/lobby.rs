use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LobbyPageProps {
    pub room_code: Option<AttrValue>,
    pub team_name: AttrValue,
    /// Other teams in the room; the player's own team is already removed.
    pub teams: Vec<String>,
}

#[function_component(LobbyPage)]
pub fn lobby_page(props: &LobbyPageProps) -> Html {
    let mut you = BTreeMap::new();
    you.insert("team", props.team_name.as_str());

    html! {
        <main id="main" class="screen screen--center" data-testid="lobby-screen">
            <div class="panel lobby">
                <h1 class="title">{ t("app.title") }</h1>
                <div class="lobby__code">{ props.room_code.clone().unwrap_or_default() }</div>
                <div class="subtitle">{ t("lobby.waiting") }</div>
                <div class="lobby__you">{ tr("lobby.you", Some(&you)) }</div>
                if props.room_code.is_none() {
                    <div class="error" role="alert">{ t("lobby.no_room") }</div>
                } else {
                    <ul class="lobby__teams" aria-live="polite">
                        { for props.teams.iter().map(|team| html! {
                            <li class="lobby__team">{ team.clone() }</li>
                        }) }
                    </ul>
                }
                <button type="button" class="btn btn-primary">{ t("lobby.ready") }</button>
            </div>
        </main>
    }
}
