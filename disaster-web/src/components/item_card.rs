use crate::paths::asset_path;
use disaster_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub on_pick: Callback<Item>,
}

#[function_component(ItemCard)]
pub fn item_card(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_pick.clone();
        let item = p.item.clone();
        Callback::from(move |_: MouseEvent| cb.emit(item.clone()))
    };
    html! {
        <button type="button" class="item-card" data-item-id={p.item.id.to_string()} {onclick}>
            <img src={asset_path(&p.item.image_path)} alt={p.item.kor_name.clone()} class="item-card__image" />
            <span>{ p.item.kor_name.clone() }</span>
        </button>
    }
}
