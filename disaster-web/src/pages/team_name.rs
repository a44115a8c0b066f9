use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TeamNamePageProps {
    pub team_name: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(TeamNamePage)]
pub fn team_name_page(props: &TeamNamePageProps) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
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
        <main id="main" class="screen screen--center" data-testid="team-name-screen">
            <div class="text-center">
                <h1 class="title">{ t("app.title") }</h1>
                <div class="subtitle">{ t("app.subtitle") }</div>
                <div class="prompt">{ t("team.prompt") }</div>
                <input
                    class="team-name"
                    placeholder={t("team.placeholder")}
                    value={props.team_name.clone()}
                    oninput={on_input}
                />
                <button type="button" class="btn btn-primary" onclick={on_submit}>
                    { t("team.connect") }
                </button>
                if let Some(error) = props.error.clone() {
                    <div class="error" role="alert">{ error }</div>
                }
            </div>
        </main>
    }
}
