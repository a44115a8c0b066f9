use crate::components::bag_panel::format_amount;
use crate::i18n::{t, tr};
use disaster_core::SceneTicket;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SceneInfoPageProps {
    pub scene: Option<SceneTicket>,
    pub on_go_home: Callback<()>,
}

fn summary(scene: &SceneTicket) -> Html {
    let mut team = BTreeMap::new();
    team.insert("team", scene.team_name.as_str());

    let id = scene.selected_bag.id.to_string();
    let mut bag = BTreeMap::new();
    bag.insert("id", id.as_str());
    bag.insert("description", scene.selected_bag.description.as_str());

    let weight = format_amount(scene.bag_contents.total_weight);
    let volume = format_amount(scene.bag_contents.total_volume);
    let mut totals = BTreeMap::new();
    totals.insert("weight", weight.as_str());
    totals.insert("volume", volume.as_str());

    html! {
        <>
            <p>{ tr("scene.team", Some(&team)) }</p>
            <p>{ tr("scene.bag", Some(&bag)) }</p>
            <ul class="scene__items">
                { for scene.bag_contents.items.iter().map(|(name, count)| {
                    let count = count.to_string();
                    let mut args = BTreeMap::new();
                    args.insert("name", name.as_str());
                    args.insert("count", count.as_str());
                    html! { <li>{ tr("scene.count", Some(&args)) }</li> }
                }) }
            </ul>
            <p>{ tr("scene.totals", Some(&totals)) }</p>
        </>
    }
}

#[function_component(SceneInfoPage)]
pub fn scene_info_page(props: &SceneInfoPageProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <main id="main" class="screen screen--center" data-testid="scene-info-screen">
            <div class="panel">
                <h1 class="title">{ t("scene.title") }</h1>
                { props.scene.as_ref().map_or_else(
                    || html! { <p>{ t("scene.missing") }</p> },
                    summary,
                ) }
                <button type="button" class="btn btn-ghost" onclick={go_home}>
                    { t("nav.home") }
                </button>
            </div>
        </main>
    }
}
