use crate::i18n::{t, tr};
use disaster_core::HostTicket;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HostNoticePageProps {
    pub ticket: Option<HostTicket>,
    pub on_go_home: Callback<()>,
}

fn ticket_lines(ticket: &HostTicket) -> Html {
    let mut host = BTreeMap::new();
    host.insert("name", ticket.host_nickname.as_str());
    let code = ticket.room_code.as_deref().map_or_else(
        || t("notice.no_code"),
        |code| {
            let mut args = BTreeMap::new();
            args.insert("code", code);
            tr("notice.code", Some(&args))
        },
    );
    html! {
        <>
            <p class="notice__code">{ code }</p>
            <p>{ tr("notice.host", Some(&host)) }</p>
        </>
    }
}

#[function_component(HostNoticePage)]
pub fn host_notice_page(props: &HostNoticePageProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <main id="main" class="screen screen--center" data-testid="host-notice-screen">
            <div class="panel">
                <h1 class="title">{ t("notice.title") }</h1>
                { props.ticket.as_ref().map_or_else(
                    || html! { <p>{ t("notice.missing") }</p> },
                    ticket_lines,
                ) }
                <button type="button" class="btn btn-ghost" onclick={go_home}>
                    { t("nav.home") }
                </button>
            </div>
        </main>
    }
}
