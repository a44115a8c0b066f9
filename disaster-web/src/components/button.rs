use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub kind: ButtonKind,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = {
        let cb = p.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <button
            type="button"
            class={p.kind.class()}
            disabled={p.disabled}
            aria-label={p.aria_label.clone()}
            {onclick}
        >
            { p.label.clone() }
        </button>
    }
}
