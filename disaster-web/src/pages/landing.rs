use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LandingPageProps {
    pub on_start: Callback<()>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <main id="main" class="screen screen--center" data-testid="landing-screen">
            <div class="text-center">
                <h1 class="title">{ t("app.title") }</h1>
                <div class="subtitle">{ t("app.subtitle") }</div>
                <button type="button" class="btn btn-primary" onclick={on_start}>
                    { t("landing.start") }
                </button>
            </div>
        </main>
    }
}
