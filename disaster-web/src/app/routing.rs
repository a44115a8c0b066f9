use super::screens::{host, join, lobby, packing};
use crate::router::Route;
use yew::prelude::*;

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to {route:?}");
    match route {
        Route::Landing => html! { <host::LandingScreen /> },
        Route::RoomBuild => html! { <host::RoomBuildScreen /> },
        Route::HostNotice => html! { <host::HostNoticeScreen /> },
        Route::Join => html! { <join::RoomJoinScreen /> },
        Route::TeamBuild => html! { <join::TeamNameScreen /> },
        Route::Lobby => html! { <lobby::LobbyScreen /> },
        Route::Waiting => html! { <lobby::WaitingScreen /> },
        Route::BagSelect => html! { <packing::BagPackScreen /> },
        Route::SceneInfo => html! { <packing::SceneInfoScreen /> },
        Route::NotFound => html! { <host::NotFoundScreen /> },
    }
}
