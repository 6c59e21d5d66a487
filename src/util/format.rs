//! Fixed-locale (`es-GT`) number and date formatting.
//!
//! Amounts always carry exactly two fractional digits with `,` grouping and
//! `.` as the decimal separator. Dates use the long form `16 de octubre de 2026`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::{Date, Month};

/// Format a monetary amount as `1,234.50`.
///
/// Rounds the shortest decimal form of `value` half away from zero, so
/// `1.005` shows as `1.01` even though its binary value is slightly below.
/// Negative values keep their sign after rounding (`-0.001` is `-0.00`).
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_owned();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let (whole, frac) = round_to_cents(&value.abs().to_string());
    format!("{sign}{}.{frac}", group_thousands(&whole))
}

/// Round a plain decimal string to two fractional digits, half away from zero.
fn round_to_cents(repr: &str) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));
    let mut frac = frac_part.bytes().chain(std::iter::repeat(b'0'));
    let kept = [frac.next().unwrap_or(b'0'), frac.next().unwrap_or(b'0')];
    let round_up = frac.next().is_some_and(|d| d >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(kept).collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
    let cents = String::from_utf8_lossy(&digits[split..]).into_owned();
    (whole, cents)
}

/// Format a quantity the way it was typed: `2`, `1.5`.
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}

/// Format a date as `dd de <mes> de yyyy`.
pub fn format_long_date(date: Date) -> String {
    format!("{:02} de {} de {}", date.day(), month_name(date.month()), date.year())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "enero",
        Month::February => "febrero",
        Month::March => "marzo",
        Month::April => "abril",
        Month::May => "mayo",
        Month::June => "junio",
        Month::July => "julio",
        Month::August => "agosto",
        Month::September => "septiembre",
        Month::October => "octubre",
        Month::November => "noviembre",
        Month::December => "diciembre",
    }
}
