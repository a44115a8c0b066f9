//! Player entry: room code, then team name.
use crate::app::{use_locale, use_services};
use crate::pages::room_join::RoomJoinPage;
use crate::pages::team_name::TeamNamePage;
use crate::paths::asset_path;
use crate::polling::use_alive;
use crate::router::Route;
use disaster_core::{RoomTicket, join_team, lookup_room};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RoomJoinScreen)]
pub fn room_join_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let alive = use_alive();
    let code = use_state(String::new);
    let error = use_state(|| None::<AttrValue>);

    let on_input = {
        let code = code.clone();
        Callback::from(move |value: String| code.set(value))
    };

    let on_submit = {
        let code = code.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let api = services.api.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            let error = error.clone();
            let raw = (*code).clone();
            spawn_local(async move {
                let result = lookup_room(&*api, &raw).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok((ticket, _host)) => {
                        error.set(None);
                        if let Some(nav) = navigator {
                            nav.push_with_state(&Route::TeamBuild, ticket);
                        }
                    }
                    Err(err) => error.set(Some(AttrValue::from(err.to_string()))),
                }
            });
        })
    };

    html! {
        <RoomJoinPage
            code={AttrValue::from((*code).clone())}
            error={(*error).clone()}
            logo_src={asset_path("resource/logo.png")}
            {on_input}
            {on_submit}
        />
    }
}

#[function_component(TeamNameScreen)]
pub fn team_name_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let location = use_location();
    let alive = use_alive();
    let team_name = use_state(String::new);
    let error = use_state(|| None::<AttrValue>);

    let room_code = location
        .and_then(|loc| loc.state::<RoomTicket>())
        .map(|ticket| ticket.room_code.clone());

    let on_input = {
        let team_name = team_name.clone();
        Callback::from(move |value: String| team_name.set(value))
    };

    let on_submit = {
        let team_name = team_name.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let api = services.api.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            let error = error.clone();
            let room_code = room_code.clone();
            let raw = (*team_name).clone();
            spawn_local(async move {
                let result = join_team(&*api, room_code.as_deref(), &raw).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(ticket) => {
                        error.set(None);
                        if let Some(nav) = navigator {
                            nav.push_with_state(&Route::Lobby, ticket);
                        }
                    }
                    Err(err) => error.set(Some(AttrValue::from(err.to_string()))),
                }
            });
        })
    };

    html! {
        <TeamNamePage
            team_name={AttrValue::from((*team_name).clone())}
            error={(*error).clone()}
            {on_input}
            {on_submit}
        />
    }
}
