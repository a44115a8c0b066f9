#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod routing;
#[cfg(target_arch = "wasm32")]
pub mod screens;
pub mod services;

pub use services::{Locale, Services, use_locale, use_services};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| Services::browser());
    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <Shell />
        </ContextProvider<Services>>
    }
}

/// Router, header and the locale context the screens re-render on.
#[cfg(target_arch = "wasm32")]
#[function_component(Shell)]
pub fn shell() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let lang = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };
    let locale = Locale(AttrValue::from((*lang).clone()));

    html! {
        <BrowserRouter basename={router_base}>
            <ContextProvider<Locale> context={locale.clone()}>
                <Header {on_lang_change} current_lang={locale.0.clone()} />
                <Switch<Route> render={routing::switch} />
            </ContextProvider<Locale>>
        </BrowserRouter>
    }
}
