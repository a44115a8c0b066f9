use crate::components::button::Button;
use crate::components::option_grid::OptionGrid;
use crate::i18n::t;
use disaster_core::constants::{BAG_TIMER_SECS, MAX_TEAMS, SETUP_OPTION_COUNT};
use disaster_core::{RoomSetup, SetupGrid};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RoomBuildPageProps {
    pub setup: RoomSetup,
    pub option_image: AttrValue,
    pub on_title_input: Callback<String>,
    pub on_select: Callback<(SetupGrid, u8)>,
    pub on_create: Callback<()>,
}

fn grid_callback(on_select: &Callback<(SetupGrid, u8)>, grid: SetupGrid) -> Callback<u8> {
    on_select.reform(move |index| (grid, index))
}

#[function_component(RoomBuildPage)]
pub fn room_build_page(props: &RoomBuildPageProps) -> Html {
    let on_input = {
        let cb = props.on_title_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <main id="main" class="screen room-build" data-testid="room-build-screen">
            <aside class="panel room-build__settings">
                <h1 class="title title--banner">{ t("app.title") }</h1>
                <div class="panel__row">{ t("room_build.game_settings") }</div>
                <input
                    class="panel__input"
                    placeholder={t("room_build.title_placeholder")}
                    value={props.setup.title.clone()}
                    oninput={on_input}
                />
                <div class="panel__row panel__row--split">
                    <span>{ t("room_build.max_teams") }</span>
                    <span>{ MAX_TEAMS.to_string() }</span>
                </div>
                <div class="panel__row panel__row--split">
                    <span>{ t("room_build.bag_time") }</span>
                    <span>{ BAG_TIMER_SECS.to_string() }</span>
                </div>
                <Button label={t("room_build.create")} onclick={props.on_create.clone()} />
            </aside>
            <section class="panel room-build__options">
                <OptionGrid
                    heading={t("room_build.pre_info")}
                    image_src={props.option_image.clone()}
                    option_count={SETUP_OPTION_COUNT}
                    selected={props.setup.selected(SetupGrid::PreInfo)}
                    on_select={grid_callback(&props.on_select, SetupGrid::PreInfo)}
                />
                <OptionGrid
                    heading={t("room_build.disaster")}
                    image_src={props.option_image.clone()}
                    option_count={SETUP_OPTION_COUNT}
                    selected={props.setup.selected(SetupGrid::Disaster)}
                    on_select={grid_callback(&props.on_select, SetupGrid::Disaster)}
                />
            </section>
        </main>
    }
}
