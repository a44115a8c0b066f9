use crate::i18n::t;
use yew::prelude::*;

/// Seconds left before the badge turns urgent.
const URGENT_SECS: u32 = 30;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub remaining: u32,
}

#[function_component(TimerBadge)]
pub fn timer_badge(p: &Props) -> Html {
    let class = classes!(
        "timer",
        (p.remaining <= URGENT_SECS).then_some("timer--urgent"),
        (p.remaining == 0).then_some("timer--expired"),
    );
    html! {
        <div {class} role="timer" aria-label={t("bag.timer")}>
            { p.remaining.to_string() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn badge_marks_urgency() {
        let render = |remaining| {
            block_on(LocalServerRenderer::<TimerBadge>::with_props(Props { remaining }).render())
        };
        let html = render(150);
        assert!(html.contains("150"));
        assert!(!html.contains("timer--urgent"));

        let html = render(0);
        assert!(html.contains("timer--expired"));
    }
}
