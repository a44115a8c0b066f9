use crate::i18n::{t, tr};
use crate::paths::asset_path;
use disaster_core::Item;
use std::collections::BTreeMap;
use yew::prelude::*;

/// Render a weight or volume with at most two decimals.
#[must_use]
pub fn format_amount(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<Item>,
    pub total_weight: f64,
    pub total_volume: f64,
    pub max_weight: f64,
    pub max_volume: f64,
    pub on_remove: Callback<usize>,
}

fn gauge(key: &str, current: f64, max: f64) -> Html {
    let current = format_amount(current);
    let max = format_amount(max);
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("max", max.as_str());
    html! { <div class="bag-panel__gauge">{ tr(key, Some(&args)) }</div> }
}

#[function_component(BagPanel)]
pub fn bag_panel(p: &Props) -> Html {
    let entry = |(index, item): (usize, &Item)| {
        let onclick = {
            let cb = p.on_remove.clone();
            Callback::from(move |_: MouseEvent| cb.emit(index))
        };
        let mut args = BTreeMap::new();
        args.insert("name", item.kor_name.as_str());
        html! {
            <li class="bag-panel__entry">
                <button type="button" class="bag-panel__remove" aria-label={tr("bag.remove", Some(&args))} {onclick}>
                    {"×"}
                </button>
                <img src={asset_path(&item.image_path)} alt={item.kor_name.clone()} />
                <span>{ item.kor_name.clone() }</span>
            </li>
        }
    };

    html! {
        <section class="bag-panel" aria-live="polite">
            { gauge("bag.weight", p.total_weight, p.max_weight) }
            { gauge("bag.volume", p.total_volume, p.max_volume) }
            if p.entries.is_empty() {
                <p class="bag-panel__empty">{ t("bag.empty") }</p>
            } else {
                <ul class="bag-panel__entries">
                    { for p.entries.iter().enumerate().map(entry) }
                </ul>
            }
        </section>
    }
}
