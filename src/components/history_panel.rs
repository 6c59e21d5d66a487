//! List of quotes issued earlier in the session.

use leptos::prelude::*;

use crate::state::quote::HistoryRecord;
use crate::state::session::QuoteSession;
use crate::util::format::format_amount;

/// Previous quotes, newest first. Hidden until a second quote exists.
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<QuoteSession>>();
    let previous = Memo::new(move |_| session.with(|s| s.previous_quotes().to_vec()));

    view! {
        <Show when=move || !previous.with(Vec::is_empty)>
            <div class="history">
                <div class="history__title">"Cotizaciones anteriores"</div>
                {move || previous.get().into_iter().map(history_item).collect::<Vec<_>>()}
            </div>
        </Show>
    }
}

fn history_item(record: HistoryRecord) -> impl IntoView {
    let HistoryRecord { client_name, sector, currency, total, quote_number } = record;
    view! {
        <div class="history__item">
            <div class="history__left">
                <div class="history__name">{client_name}</div>
                <div class="history__sector">{format!("{sector} \u{2014} #{quote_number}")}</div>
            </div>
            <div class="history__amount">{format!("{currency} {}", format_amount(total))}</div>
        </div>
    }
}
