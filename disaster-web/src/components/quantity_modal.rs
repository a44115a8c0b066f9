use crate::components::bag_panel::format_amount;
use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use crate::paths::asset_path;
use disaster_core::Item;
use disaster_core::constants::{MAX_QUANTITY, MIN_QUANTITY};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Option<Item>,
    pub quantity: u32,
    pub on_quantity: Callback<u32>,
    pub on_add: Callback<()>,
    pub on_close: Callback<()>,
}

/// Parse the range input; anything unreadable maps to the minimum.
fn parse_quantity(raw: &str) -> u32 {
    disaster_core::clamp_quantity(raw.trim().parse().unwrap_or(MIN_QUANTITY))
}

fn stat(key: &str, value: f64) -> String {
    let value = format_amount(value);
    let mut args = BTreeMap::new();
    args.insert("value", value.as_str());
    tr(key, Some(&args))
}

#[function_component(QuantityModal)]
pub fn quantity_modal(p: &Props) -> Html {
    let Some(item) = p.item.as_ref() else {
        return Html::default();
    };
    let on_input = {
        let cb = p.on_quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(parse_quantity(&input.value()));
        })
    };
    let on_add = {
        let cb = p.on_add.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal
            open={true}
            title={item.kor_name.clone()}
            on_close={p.on_close.clone()}
            close_label={AttrValue::from(t("bag.close"))}
        >
            <div class="quantity-modal">
                <img src={asset_path(&item.image_path)} alt="" class="quantity-modal__image" />
                <div>{ stat("bag.item_weight", item.weight) }</div>
                <div>{ stat("bag.item_volume", item.volume) }</div>
                <label class="quantity-modal__range">
                    <span class="sr-only">{ t("bag.quantity") }</span>
                    <input
                        type="range"
                        min={MIN_QUANTITY.to_string()}
                        max={MAX_QUANTITY.to_string()}
                        value={p.quantity.to_string()}
                        oninput={on_input}
                    />
                    <output>{ p.quantity.to_string() }</output>
                </label>
                <button type="button" class="btn btn-primary" onclick={on_add}>
                    { t("bag.add") }
                </button>
            </div>
        </Modal>
    }
}
