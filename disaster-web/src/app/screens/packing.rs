//! Timed bag packing and the post-submission summary.
use crate::app::{use_locale, use_services};
use crate::assets::fetch_catalog;
use crate::dom::alert;
use crate::pages::bag_pack::BagPackPage;
use crate::pages::scene_info::SceneInfoPage;
use crate::paths::catalog_url;
use crate::polling::{use_alive, use_interval};
use crate::router::Route;
use disaster_core::constants::{ALERT_TIMES_UP, COUNTDOWN_TICK_MS, MIN_QUANTITY};
use disaster_core::{
    BagQueue, Catalog, Countdown, Item, PackingTicket, SceneTicket, TeamTicket, Tick,
    clamp_quantity, submit_bag,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

/// Packing context from the navigation state. The waiting room hands over a
/// full [`PackingTicket`]; a bare [`TeamTicket`] gets the default bag.
fn packing_ticket(location: Option<&Location>) -> PackingTicket {
    let Some(location) = location else {
        return PackingTicket::resolve(None, None);
    };
    if let Some(ticket) = location.state::<PackingTicket>() {
        return (*ticket).clone();
    }
    let team = location.state::<TeamTicket>();
    PackingTicket::resolve(team.as_deref(), None)
}

#[function_component(BagPackScreen)]
pub fn bag_pack_screen() -> Html {
    let _locale = use_locale();
    let services = use_services();
    let navigator = use_navigator();
    let location = use_location();
    let alive = use_alive();

    let ticket = use_memo((), move |_| packing_ticket(location.as_ref()));
    let catalog = use_state(Catalog::default);
    let queue = {
        let spec = ticket.selected_bag.clone();
        use_state(move || BagQueue::new(spec))
    };
    let search = use_state(String::new);
    let selected = use_state(|| None::<Item>);
    let quantity = use_state(|| MIN_QUANTITY);

    let bag_timer_secs = services.config.bag_timer_secs;
    let countdown = use_mut_ref(move || Countdown::new(bag_timer_secs));
    let remaining = use_state(move || bag_timer_secs);
    let expired = use_state(|| false);

    {
        let url = catalog_url(&services.config);
        let catalog = catalog.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_catalog(&url).await {
                    Ok(loaded) if alive.is_alive() => {
                        log::info!("Loaded {} catalog items", loaded.len());
                        catalog.set(loaded);
                    }
                    Ok(_) => {}
                    Err(err) => log::error!("Failed to load item catalog from {url}: {err}"),
                }
            });
        });
    }

    {
        let remaining = remaining.clone();
        let expired = expired.clone();
        let period = if *expired { 0 } else { COUNTDOWN_TICK_MS };
        use_interval(period, move || {
            let tick = countdown.borrow_mut().tick();
            match tick {
                Tick::Running(left) => remaining.set(left),
                Tick::Expired => {
                    remaining.set(0);
                    expired.set(true);
                    alert(ALERT_TIMES_UP);
                }
                Tick::Finished => expired.set(true),
            }
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |term: String| search.set(term))
    };

    let on_pick = {
        let selected = selected.clone();
        let quantity = quantity.clone();
        Callback::from(move |item: Item| {
            quantity.set(MIN_QUANTITY);
            selected.set(Some(item));
        })
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |value: u32| quantity.set(clamp_quantity(value)))
    };

    let on_close_modal = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let on_add = {
        let queue = queue.clone();
        let selected = selected.clone();
        let quantity = quantity.clone();
        Callback::from(move |()| {
            let Some(item) = (*selected).clone() else {
                return;
            };
            let mut next = (*queue).clone();
            match next.add(&item, *quantity) {
                Ok(()) => {
                    queue.set(next);
                    selected.set(None);
                }
                // The modal stays open so the player can lower the quantity.
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    let on_remove = {
        let queue = queue.clone();
        Callback::from(move |index: usize| {
            let mut next = (*queue).clone();
            if next.remove(index).is_some() {
                queue.set(next);
            }
        })
    };

    let on_submit = {
        let queue = queue.clone();
        let ticket = ticket.clone();
        Callback::from(move |()| {
            let api = services.api.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            let ticket = ticket.clone();
            let snapshot = (*queue).clone();
            spawn_local(async move {
                match submit_bag(&*api, &ticket, &snapshot).await {
                    Ok(submitted) => {
                        alert(&submitted.message);
                        if !alive.is_alive() {
                            return;
                        }
                        if let Some(nav) = navigator {
                            nav.push_with_state(&Route::SceneInfo, submitted.scene);
                        }
                    }
                    Err(err) => alert(&err.to_string()),
                }
            });
        })
    };

    let items: Vec<Item> = catalog.search(&search).into_iter().cloned().collect();
    html! {
        <BagPackPage
            team_name={AttrValue::from(ticket.team_name.clone())}
            remaining_secs={*remaining}
            {items}
            search={AttrValue::from((*search).clone())}
            entries={queue.entries().to_vec()}
            total_weight={queue.total_weight()}
            total_volume={queue.total_volume()}
            max_weight={queue.spec().max_weight()}
            max_volume={queue.spec().max_volume()}
            selected={(*selected).clone()}
            quantity={*quantity}
            {on_search}
            {on_pick}
            {on_quantity}
            {on_add}
            {on_close_modal}
            {on_remove}
            {on_submit}
        />
    }
}

#[function_component(SceneInfoScreen)]
pub fn scene_info_screen() -> Html {
    let _locale = use_locale();
    let location = use_location();
    let navigator = use_navigator();
    let scene = location
        .and_then(|loc| loc.state::<SceneTicket>())
        .map(|scene| (*scene).clone());
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Landing);
        }
    });
    html! { <SceneInfoPage {scene} {on_go_home} /> }
}
