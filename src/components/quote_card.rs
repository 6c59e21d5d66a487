//! Printable card for an issued quote.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::quote::Quote;
use crate::state::quote_card::{QuoteCardState, QuoteCardView};
use crate::util::clock;

/// Read-only rendering of `quote`, dated today.
#[component]
pub fn QuoteCard(quote: Quote) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let QuoteCardView { quote_number, client, sector, date, currency, rows, total, notes, validity } =
        QuoteCardState::from_quote(&quote).render(clock::today(), config.quote_validity_days);
    let footer_right = validity.unwrap_or_else(|| date.clone());

    view! {
        <div class="quote-card">
            <div class="quote-card__top-bar">
                <span>"Sistema de Cotizaciones"</span>
                <span class="quote-card__num">"No. " {quote_number}</span>
            </div>

            <div class="quote-card__body">
                <div class="quote-card__client-row">
                    <div>
                        <div class="quote-card__client-name">{client}</div>
                        <div class="quote-card__client-sub">"Cliente \u{2014} " {date}</div>
                    </div>
                    <div class="quote-card__sector-badge">{sector}</div>
                </div>

                <table class="quote-card__table">
                    <thead>
                        <tr>
                            <th>"Descripci\u{f3}n"</th>
                            <th class="quote-card__center">"Cant."</th>
                            <th class="quote-card__center">"P. Unit."</th>
                            <th class="quote-card__right">"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.description}</td>
                                        <td class="quote-card__center">{row.quantity}</td>
                                        <td class="quote-card__center">{row.unit_price}</td>
                                        <td class="quote-card__right">{row.subtotal}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>

                <div class="quote-card__total-wrap">
                    <span class="quote-card__total-label">"Total Estimado"</span>
                    <span class="quote-card__total-amount">
                        <span class="quote-card__currency">{currency}</span>
                        {total}
                    </span>
                </div>

                {notes.map(|n| view! { <div class="quote-card__notes">{n}</div> })}
            </div>

            <div class="quote-card__footer">
                <span>{config.brand} " \u{2014} Cotizador de Servicios"</span>
                <span>{footer_right}</span>
            </div>
        </div>
    }
}
