//! One editable service line: description, quantity, unit price, remove.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::service_row::ServiceRowState;
use crate::state::session::QuoteSession;

/// Inputs for the session row with `id`.
///
/// Every field reads from and writes to the shared `QuoteSession`; the row
/// itself holds no state. Remove detaches the row and renumbers the rest.
#[component]
pub fn ServiceRow(id: Uuid) -> impl IntoView {
    let session = expect_context::<RwSignal<QuoteSession>>();

    let read = move |pick: fn(&ServiceRowState) -> String| session.with(|s| s.row(id).map(pick).unwrap_or_default());
    let label = move || read(ServiceRowState::label);
    let description = move || read(|r| r.description().to_owned());
    let quantity = move || read(|r| r.quantity().to_owned());
    let unit_price = move || read(|r| r.unit_price().to_owned());
    let description_error = move || session.with(|s| s.row(id).is_some_and(ServiceRowState::description_error));
    let price_error = move || session.with(|s| s.row(id).is_some_and(ServiceRowState::price_error));

    let on_description = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.update_row(id, |r| r.set_description(value)));
    };
    let on_quantity = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.update_row(id, |r| r.set_quantity(value)));
    };
    let on_unit_price = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.update_row(id, |r| r.set_unit_price(value)));
    };
    let on_remove = move |_| session.update(|s| s.remove_row(id));

    view! {
        <div class="service-row">
            <div class="service-row__field">
                <div class="service-row__num">{label}</div>
                <label>"Descripci\u{f3}n"</label>
                <input
                    type="text"
                    class="service-row__input"
                    class:error=description_error
                    placeholder="Ej: Dise\u{f1}o web"
                    prop:value=description
                    on:input=on_description
                />
            </div>
            <div class="service-row__field">
                <label>"Cant."</label>
                <input
                    type="number"
                    class="service-row__input"
                    min="1"
                    placeholder="1"
                    prop:value=quantity
                    on:input=on_quantity
                />
            </div>
            <div class="service-row__field">
                <label>"Precio Unit."</label>
                <input
                    type="number"
                    class="service-row__input"
                    class:error=price_error
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=unit_price
                    on:input=on_unit_price
                />
            </div>
            <button type="button" class="service-row__remove" title="Eliminar fila" on:click=on_remove>
                "\u{d7}"
            </button>
        </div>
    }
}
