use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RoomJoinPageProps {
    pub code: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub logo_src: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(RoomJoinPage)]
pub fn room_join_page(props: &RoomJoinPageProps) -> Html {
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
    let on_keydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit(());
            }
        })
    };

    html! {
        <main id="main" class="screen screen--center" data-testid="room-join-screen">
            <div class="text-center">
                <img src={props.logo_src.clone()} alt={t("app.logo_alt")} class="logo" />
                <div class="subtitle">{ t("app.subtitle") }</div>
                <input
                    class="code-input"
                    placeholder={t("join.placeholder")}
                    value={props.code.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button type="button" class="btn btn-primary" onclick={on_submit}>
                    { t("join.next") }
                </button>
                if let Some(error) = props.error.clone() {
                    <div class="error" role="alert">{ error }</div>
                }
            </div>
        </main>
    }
}
