//! Quote entry form: client fields, service rows, and submission.

use leptos::prelude::*;

use crate::app::QUOTE_OUTPUT_ID;
use crate::components::service_row::ServiceRow;
use crate::config::AppConfig;
use crate::state::session::{QuoteSession, ValidationError};
use crate::util::{clock, viewport};

/// Form bound to the shared `QuoteSession`.
///
/// Submitting runs session validation; an accepted quote resets the form and,
/// on narrow screens, scrolls the output panel into view.
#[component]
pub fn QuoteForm() -> impl IntoView {
    let session = expect_context::<RwSignal<QuoteSession>>();
    let config = expect_context::<AppConfig>();

    let client_name = move || session.with(|s| s.form().client_name.clone());
    let sector = move || session.with(|s| s.form().sector.clone());
    let currency = move || session.with(|s| s.form().currency.clone());
    let notes = move || session.with(|s| s.form().notes.clone());
    let client_error = move || session.with(|s| s.form().client_error);
    let sector_error = move || session.with(|s| s.form().sector_error);
    let row_ids = move || session.with(QuoteSession::row_ids);

    let on_client = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_client_name(value));
    };
    let on_sector = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_sector(value));
    };
    let on_currency = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_currency(value));
    };
    let on_notes = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_notes(value));
    };
    let on_add = move |_| {
        session.update(|s| {
            s.add_service_row();
        });
    };

    let breakpoint = config.narrow_viewport_px;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let now = clock::now();
        let mut accepted = false;
        session.update(|s| accepted = s.submit(now).is_accepted());
        if accepted && viewport::is_narrow(breakpoint) {
            viewport::scroll_into_view(QUOTE_OUTPUT_ID);
        }
    };

    let sector_options = config
        .sectors
        .iter()
        .map(|name| {
            let value = name.clone();
            let selected = move || sector() == value;
            view! { <option value=name.clone() prop:selected=selected>{name.clone()}</option> }
        })
        .collect::<Vec<_>>();
    let currency_options = config
        .currencies
        .iter()
        .map(|code| {
            let value = code.clone();
            let selected = move || currency() == value;
            view! { <option value=code.clone() prop:selected=selected>{code.clone()}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="quote-form" novalidate=true on:submit=on_submit>
            <div class="quote-form__group">
                <label for="clientName">"Cliente"</label>
                <input
                    id="clientName"
                    type="text"
                    placeholder="Nombre del cliente o empresa"
                    class:error=client_error
                    prop:value=client_name
                    on:input=on_client
                />
                <span class="quote-form__error" class:show=client_error>
                    {ValidationError::MissingClientName.to_string()}
                </span>
            </div>

            <div class="quote-form__row">
                <div class="quote-form__group">
                    <label for="sector">"Sector"</label>
                    <select id="sector" class:error=sector_error on:change=on_sector>
                        <option value="" prop:selected=move || sector().is_empty()>
                            "Selecciona un sector"
                        </option>
                        {sector_options}
                    </select>
                    <span class="quote-form__error" class:show=sector_error>
                        {ValidationError::MissingSector.to_string()}
                    </span>
                </div>
                <div class="quote-form__group">
                    <label for="currency">"Moneda"</label>
                    <select id="currency" on:change=on_currency>
                        {currency_options}
                    </select>
                </div>
            </div>

            <div class="quote-form__services">
                <div class="quote-form__section-title">"Servicios"</div>
                <div id="servicesContainer">
                    <For each=row_ids key=|id| *id children=move |id| view! { <ServiceRow id=id/> }/>
                </div>
                <button type="button" class="btn quote-form__add" on:click=on_add>
                    "+ Agregar servicio"
                </button>
            </div>

            <div class="quote-form__group">
                <label for="notes">"Notas"</label>
                <textarea
                    id="notes"
                    rows="3"
                    placeholder="Condiciones, alcance, observaciones..."
                    prop:value=notes
                    on:input=on_notes
                ></textarea>
            </div>

            <button type="submit" class="btn btn--primary quote-form__submit">
                "Generar cotizaci\u{f3}n"
            </button>
        </form>
    }
}
