use super::*;

fn row_with(description: &str, quantity: &str, unit_price: &str) -> ServiceRowState {
    let mut row = ServiceRowState::new(1);
    row.set_description(description);
    row.set_quantity(quantity);
    row.set_unit_price(unit_price);
    row
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_row_is_empty_with_default_quantity() {
    let row = ServiceRowState::new(3);
    assert_eq!(row.position(), 3);
    assert_eq!(row.label(), "Servicio 3");
    assert_eq!(row.description(), "");
    assert_eq!(row.quantity(), "1");
    assert_eq!(row.unit_price(), "");
    assert!(!row.description_error());
    assert!(!row.price_error());
}

#[test]
fn new_rows_have_distinct_ids() {
    assert_ne!(ServiceRowState::new(1).id(), ServiceRowState::new(1).id());
}

// =============================================================
// data()
// =============================================================

#[test]
fn data_trims_description_and_computes_subtotal() {
    let line = row_with("  Design  ", "2", "50.00").data();
    assert_eq!(line.description, "Design");
    assert_eq!(line.quantity, 2.0);
    assert_eq!(line.unit_price, 50.0);
    assert_eq!(line.subtotal(), 100.0);
}

#[test]
fn data_defaults_quantity_to_one() {
    for raw in ["", "   ", "abc", "0", "NaN", "inf"] {
        assert_eq!(row_with("Design", raw, "10").data().quantity, 1.0, "quantity {raw:?}");
    }
}

#[test]
fn data_keeps_fractional_quantity() {
    assert_eq!(row_with("Consulting", "1.5", "80").data().quantity, 1.5);
}

#[test]
fn data_defaults_unit_price_to_zero() {
    for raw in ["", "abc", "-inf"] {
        assert_eq!(row_with("Design", "1", raw).data().unit_price, 0.0, "price {raw:?}");
    }
}

// =============================================================
// validate()
// =============================================================

#[test]
fn validate_accepts_description_and_non_negative_price() {
    for price in ["0", "0.00", "50", " 12.5 "] {
        let mut row = row_with("Design", "2", price);
        assert!(row.validate(), "price {price:?}");
        assert!(!row.description_error());
        assert!(!row.price_error());
    }
}

#[test]
fn validate_rejects_blank_description_regardless_of_price() {
    for description in ["", "   "] {
        let mut row = row_with(description, "1", "10");
        assert!(!row.validate());
        assert!(row.description_error());
        assert!(!row.price_error());
    }
}

#[test]
fn validate_rejects_bad_price_regardless_of_description() {
    for price in ["", "abc", "-1", "-0.01"] {
        let mut row = row_with("Design", "1", price);
        assert!(!row.validate(), "price {price:?}");
        assert!(!row.description_error());
        assert!(row.price_error());
    }
}

#[test]
fn validate_never_fails_on_quantity() {
    let mut row = row_with("Design", "not a number", "10");
    assert!(row.validate());
}

#[test]
fn validate_clears_markers_once_fixed() {
    let mut row = row_with("", "1", "");
    assert!(!row.validate());
    assert!(row.description_error() && row.price_error());

    row.description = "Design".to_owned();
    row.unit_price = "5".to_owned();
    assert!(row.validate());
    assert!(!row.description_error());
    assert!(!row.price_error());
}

// =============================================================
// Live clearing / position
// =============================================================

#[test]
fn editing_description_or_price_clears_error() {
    let mut row = row_with("", "1", "");
    row.validate();

    row.set_description("D");
    assert!(!row.description_error());
    assert!(row.price_error());

    row.set_unit_price("1");
    assert!(!row.price_error());
}

#[test]
fn editing_quantity_leaves_errors_alone() {
    let mut row = row_with("", "1", "");
    row.validate();
    row.set_quantity("3");
    assert!(row.description_error());
    assert!(row.price_error());
}

#[test]
fn set_position_keeps_field_contents() {
    let mut row = row_with("Design", "2", "50");
    row.set_position(5);
    assert_eq!(row.label(), "Servicio 5");
    assert_eq!(row.description(), "Design");
    assert_eq!(row.quantity(), "2");
    assert_eq!(row.unit_price(), "50");
}

// =============================================================
// parse_number
// =============================================================

#[test]
fn parse_number_rejects_blank_and_non_finite() {
    assert_eq!(parse_number(" 3.25 "), Some(3.25));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("1e400"), None);
    assert_eq!(parse_number("NaN"), None);
}
