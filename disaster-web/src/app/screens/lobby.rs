//! Lobby and waiting room. Both poll the backend until the host moves the
//! room to its next phase.
use crate::app::{use_locale, use_services};
use crate::pages::lobby::LobbyPage;
use crate::pages::waiting::WaitingPage;
use crate::polling::{Alive, use_alive, use_interval};
use crate::router::Route;
use disaster_core::constants::UNKNOWN_ROOM;
use disaster_core::{GameApi, PackingTicket, PhaseGate, PollOutcome, TeamTicket, refresh_teams};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn fetch_teams(
    api: Rc<dyn GameApi>,
    ticket: TeamTicket,
    alive: Alive,
    teams: UseStateHandle<Vec<String>>,
) {
    spawn_local(async move {
        let fresh = refresh_teams(&*api, &ticket.room_code, Some(&ticket.team_name)).await;
        // A failed refresh keeps the last list on screen.
        if let Some(fresh) = fresh
            && alive.is_alive()
        {
            teams.set(fresh);
        }
    });
}

#[function_component(LobbyScreen)]
pub fn lobby_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let location = use_location();
    let alive = use_alive();
    let teams = use_state(Vec::<String>::new);

    let ticket = location
        .and_then(|loc| loc.state::<TeamTicket>())
        .map(|ticket| (*ticket).clone());
    let period = if ticket.is_some() {
        services.config.poll_interval_ms
    } else {
        0
    };

    {
        let api = services.api.clone();
        let ticket = ticket.clone();
        let alive = alive.clone();
        let teams = teams.clone();
        use_effect_with((), move |_| {
            match ticket {
                Some(ticket) => fetch_teams(api, ticket, alive, teams),
                None => log::warn!("Lobby entered without a room code"),
            }
        });
    }

    {
        let api = services.api.clone();
        let ticket = ticket.clone();
        let alive = alive.clone();
        let teams = teams.clone();
        use_interval(period, move || {
            if let Some(ticket) = ticket.clone() {
                fetch_teams(api.clone(), ticket, alive.clone(), teams.clone());
            }
        });
    }

    {
        let api = services.api.clone();
        let ticket = ticket.clone();
        let alive = alive.clone();
        use_interval(period, move || {
            let Some(ticket) = ticket.clone() else {
                return;
            };
            let api = api.clone();
            let alive = alive.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let outcome = PhaseGate::JoinConfirmed
                    .poll(&*api, &ticket.room_code)
                    .await;
                if outcome == PollOutcome::Advance && alive.is_alive() {
                    // Stop further ticks from navigating a second time.
                    alive.kill();
                    if let Some(nav) = navigator {
                        nav.push_with_state(&Route::Waiting, ticket);
                    }
                }
            });
        });
    }

    let (room_code, team_name) = match &ticket {
        Some(t) => (
            Some(AttrValue::from(t.room_code.clone())),
            AttrValue::from(t.team_name.clone()),
        ),
        None => (None, AttrValue::default()),
    };
    html! { <LobbyPage {room_code} {team_name} teams={(*teams).clone()} /> }
}

#[function_component(WaitingScreen)]
pub fn waiting_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let location = use_location();
    let alive = use_alive();

    let ticket = location
        .and_then(|loc| loc.state::<TeamTicket>())
        .map(|ticket| (*ticket).clone());
    let period = if ticket.is_some() {
        services.config.poll_interval_ms
    } else {
        0
    };

    {
        let api = services.api.clone();
        let ticket = ticket.clone();
        use_interval(period, move || {
            let Some(ticket) = ticket.clone() else {
                return;
            };
            let api = api.clone();
            let alive = alive.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let outcome = PhaseGate::GameInfoConfirmed
                    .poll(&*api, &ticket.room_code)
                    .await;
                if outcome == PollOutcome::Advance && alive.is_alive() {
                    alive.kill();
                    if let Some(nav) = navigator {
                        nav.push_with_state(&Route::BagSelect, PackingTicket::from(ticket));
                    }
                }
            });
        });
    }

    let (room_code, team_name) = ticket.map_or_else(
        || (AttrValue::from(UNKNOWN_ROOM), AttrValue::default()),
        |t| (AttrValue::from(t.room_code), AttrValue::from(t.team_name)),
    );
    html! { <WaitingPage {room_code} {team_name} /> }
}
