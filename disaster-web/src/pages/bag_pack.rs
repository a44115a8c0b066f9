use crate::components::bag_panel::BagPanel;
use crate::components::item_card::ItemCard;
use crate::components::quantity_modal::QuantityModal;
use crate::components::timer_badge::TimerBadge;
use crate::i18n::t;
use disaster_core::Item;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BagPackPageProps {
    pub team_name: AttrValue,
    pub remaining_secs: u32,
    /// Catalog items matching the current search.
    pub items: Vec<Item>,
    pub search: AttrValue,
    pub entries: Vec<Item>,
    pub total_weight: f64,
    pub total_volume: f64,
    pub max_weight: f64,
    pub max_volume: f64,
    pub selected: Option<Item>,
    pub quantity: u32,
    pub on_search: Callback<String>,
    pub on_pick: Callback<Item>,
    pub on_quantity: Callback<u32>,
    pub on_add: Callback<()>,
    pub on_close_modal: Callback<()>,
    pub on_remove: Callback<usize>,
    pub on_submit: Callback<()>,
}

#[function_component(BagPackPage)]
pub fn bag_pack_page(props: &BagPackPageProps) -> Html {
    let on_search = {
        let cb = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <main id="main" class="screen bag-pack" data-testid="bag-pack-screen">
            <header class="bag-pack__header">
                <h1>{ props.team_name.clone() }</h1>
                <button type="button" class="btn btn-primary" onclick={on_submit}>
                    { t("bag.submit") }
                </button>
                <TimerBadge remaining={props.remaining_secs} />
            </header>
            <div class="bag-pack__body">
                <section class="bag-pack__inventory">
                    <input
                        type="search"
                        class="bag-pack__search"
                        placeholder={t("bag.search")}
                        value={props.search.clone()}
                        oninput={on_search}
                    />
                    <div class="bag-pack__items">
                        { for props.items.iter().map(|item| html! {
                            <ItemCard key={item.id} item={item.clone()} on_pick={props.on_pick.clone()} />
                        }) }
                    </div>
                </section>
                <BagPanel
                    entries={props.entries.clone()}
                    total_weight={props.total_weight}
                    total_volume={props.total_volume}
                    max_weight={props.max_weight}
                    max_volume={props.max_volume}
                    on_remove={props.on_remove.clone()}
                />
            </div>
            <QuantityModal
                item={props.selected.clone()}
                quantity={props.quantity}
                on_quantity={props.on_quantity.clone()}
                on_add={props.on_add.clone()}
                on_close={props.on_close_modal.clone()}
            />
        </main>
    }
}
