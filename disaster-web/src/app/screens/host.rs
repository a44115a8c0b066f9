//! Host-side screens and the entry points shared by both roles.
use crate::app::{use_locale, use_services};
use crate::pages::host_notice::HostNoticePage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFound;
use crate::pages::room_build::RoomBuildPage;
use crate::paths::asset_path;
use crate::polling::use_alive;
use crate::router::Route;
use disaster_core::{HostTicket, RoomSetup, SetupGrid, create_room};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingScreen)]
pub fn landing_screen() -> Html {
    let _locale = use_locale();
    let navigator = use_navigator();
    let on_start = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::RoomBuild);
        }
    });
    html! { <LandingPage {on_start} /> }
}

#[function_component(RoomBuildScreen)]
pub fn room_build_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let alive = use_alive();
    let setup = use_state(RoomSetup::default);

    let on_title_input = {
        let setup = setup.clone();
        Callback::from(move |title: String| {
            let mut next = (*setup).clone();
            next.title = title;
            setup.set(next);
        })
    };

    let on_select = {
        let setup = setup.clone();
        Callback::from(move |(grid, index): (SetupGrid, u8)| {
            let mut next = (*setup).clone();
            next.select(grid, index);
            setup.set(next);
        })
    };

    let on_create = {
        let setup = setup.clone();
        Callback::from(move |()| {
            let api = services.api.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            let request = (*setup).clone();
            spawn_local(async move {
                // Failures are logged by create_room; the host stays here.
                let Ok(ticket) = create_room(&*api, &request).await else {
                    return;
                };
                if !alive.is_alive() {
                    return;
                }
                if let Some(nav) = navigator {
                    nav.replace_with_state(&Route::HostNotice, ticket);
                }
            });
        })
    };

    html! {
        <RoomBuildPage
            setup={(*setup).clone()}
            option_image={asset_path("resource/option.png")}
            {on_title_input}
            {on_select}
            {on_create}
        />
    }
}

#[function_component(HostNoticeScreen)]
pub fn host_notice_screen() -> Html {
    let _locale = use_locale();
    let location = use_location();
    let navigator = use_navigator();
    let ticket = location
        .and_then(|loc| loc.state::<HostTicket>())
        .map(|ticket| (*ticket).clone());
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Landing);
        }
    });
    html! { <HostNoticePage {ticket} {on_go_home} /> }
}

#[function_component(NotFoundScreen)]
pub fn not_found_screen() -> Html {
    let _locale = use_locale();
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Landing);
        }
    });
    html! { <NotFound {on_go_home} /> }
}
