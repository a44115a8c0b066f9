use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub close_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog over a dimmed backdrop. Clicking the backdrop, the close button or
/// pressing Escape emits `on_close`.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_label = props
        .close_label
        .clone()
        .unwrap_or_else(|| AttrValue::from("Close"));

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                tabindex="-1"
                onkeydown={on_keydown}
                onclick={keep_open}
            >
                <div class="modal__header">
                    <h2>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={close_label} onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
