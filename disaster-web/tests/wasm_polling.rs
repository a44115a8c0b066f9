#![cfg(target_arch = "wasm32")]
use disaster_web::dom;
use disaster_web::polling::{use_alive, use_interval};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static TICKS: Cell<u32> = const { Cell::new(0) };
}

fn ticks() -> u32 {
    TICKS.with(Cell::get)
}

#[derive(Properties, PartialEq)]
struct TickerProps {
    period: u32,
}

#[function_component(Ticker)]
fn ticker(props: &TickerProps) -> Html {
    let alive = use_alive();
    use_interval(props.period, move || {
        if alive.is_alive() {
            TICKS.with(|t| t.set(t.get() + 1));
        }
    });
    html! { <span>{ "ticking" }</span> }
}

fn fresh_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

#[wasm_bindgen_test]
async fn interval_stops_when_component_unmounts() {
    TICKS.with(|t| t.set(0));
    let handle =
        yew::Renderer::<Ticker>::with_root_and_props(fresh_root(), TickerProps { period: 50 })
            .render();
    TimeoutFuture::new(400).await;
    assert!(ticks() >= 2, "interval should have fired, got {}", ticks());

    handle.destroy();
    let after_unmount = ticks();
    TimeoutFuture::new(300).await;
    assert_eq!(ticks(), after_unmount);
}

#[wasm_bindgen_test]
async fn zero_period_never_fires() {
    TICKS.with(|t| t.set(0));
    let handle =
        yew::Renderer::<Ticker>::with_root_and_props(fresh_root(), TickerProps { period: 0 })
            .render();
    TimeoutFuture::new(200).await;
    assert_eq!(ticks(), 0);
    handle.destroy();
}

#[wasm_bindgen_test]
fn language_switch_updates_document_lang() {
    disaster_web::i18n::set_lang("en");
    let doc = dom::document().expect("document");
    let html = doc.document_element().expect("html element");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    assert_eq!(disaster_web::i18n::current_lang(), "en");

    disaster_web::i18n::set_lang("ko");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("ko"));
    assert_eq!(disaster_web::i18n::t("bag.submit"), "가방 제출하기");
}
