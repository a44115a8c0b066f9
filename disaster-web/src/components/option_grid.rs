use crate::i18n::tr;
use std::collections::BTreeMap;
use yew::prelude::*;

/// Options per sub-grid; the full grid is two 2×2 blocks.
const BLOCK: u8 = 4;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub heading: AttrValue,
    pub image_src: AttrValue,
    pub option_count: u8,
    pub selected: Option<u8>,
    pub on_select: Callback<u8>,
}

#[function_component(OptionGrid)]
pub fn option_grid(p: &Props) -> Html {
    let blocks = p.option_count.div_ceil(BLOCK);
    let option = |index: u8| {
        let selected = p.selected == Some(index);
        let class = classes!("option", selected.then_some("option--selected"));
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(index))
        };
        let number = (index + 1).to_string();
        let mut args = BTreeMap::new();
        args.insert("n", number.as_str());
        html! {
            <button type="button" {class} {onclick} aria-pressed={selected.to_string()}>
                <img src={p.image_src.clone()} alt={tr("room_build.option_alt", Some(&args))} />
            </button>
        }
    };

    html! {
        <section class="option-grid">
            <div class="option-grid__heading">{ p.heading.clone() }</div>
            <div class="option-grid__blocks">
                { for (0..blocks).map(|block| html! {
                    <div class="option-grid__block">
                        { for (block * BLOCK..((block + 1) * BLOCK).min(p.option_count)).map(&option) }
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn grid_renders_every_option_and_marks_selection() {
        crate::i18n::set_lang("ko");
        let props = Props {
            heading: AttrValue::from("재난 정보 설정"),
            image_src: AttrValue::from("/resource/water.png"),
            option_count: 8,
            selected: Some(5),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<OptionGrid>::with_props(props).render());
        assert_eq!(html.matches("<img").count(), 8);
        assert_eq!(html.matches("option--selected").count(), 1);
        assert!(html.contains("선택지 6"));
        assert_eq!(html.matches("option-grid__block\"").count(), 2);
    }
}
