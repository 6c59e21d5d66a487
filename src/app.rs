//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::history_panel::HistoryPanel;
use crate::components::quote_card::QuoteCard;
use crate::components::quote_form::QuoteForm;
use crate::config::AppConfig;
use crate::state::session::QuoteSession;

/// DOM id of the output panel scrolled into view on narrow screens.
pub const QUOTE_OUTPUT_ID: &str = "quoteOutput";

/// Root application component.
///
/// Loads the page configuration, creates the session state, and provides
/// both as context for the form and output panels.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let session = RwSignal::new(QuoteSession::new(&config));
    let title = format!("{} \u{2014} Cotizador de Servicios", config.brand);

    provide_context(config);
    provide_context(session);

    let current_quote = Memo::new(move |_| session.with(|s| s.current_quote().cloned()));

    view! {
        <Title text=title/>

        <main class="layout">
            <section class="layout__form">
                <QuoteForm/>
            </section>

            <section class="layout__output" id=QUOTE_OUTPUT_ID>
                {move || match current_quote.get() {
                    Some(quote) => view! { <QuoteCard quote=quote/> }.into_any(),
                    None => {
                        view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">"\u{1f4c4}"</div>
                                <p>"Completa el formulario para generar tu cotizaci\u{f3}n."</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
                <HistoryPanel/>
            </section>
        </main>
    }
}
