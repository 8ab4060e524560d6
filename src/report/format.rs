//! Number rendering for reports.
//!
//! Floats are rounded to a fixed number of decimals and then printed in
//! their shortest round-trip form with at least one fractional digit, so
//! `10.0` stays `10.0` and `742.1875` rounded to 3 places prints as
//! `742.188`.

/// Decimals kept for throughput and loss rate.
pub const RATE_DECIMALS: usize = 3;

/// Decimals kept for average delay.
pub const DELAY_DECIMALS: usize = 6;

/// Magnitudes below this (other than zero) print in exponent form.
const EXP_LOWER: f64 = 1e-4;

/// Magnitudes at or above this print in exponent form.
const EXP_UPPER: f64 = 1e16;

/// Round `value` to `decimals` places.
///
/// Returns the `f64` nearest to the correctly rounded decimal.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Render a float in shortest round-trip form.
///
/// ```
/// use flowstat::report::format::format_float;
///
/// assert_eq!(format_float(10.0), "10.0");
/// assert_eq!(format_float(742.188), "742.188");
/// assert_eq!(format_float(0.00005), "5e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        return format_exponent(value);
    }

    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Round then render.
pub fn format_rounded(value: f64, decimals: usize) -> String {
    format_float(round_to(value, decimals))
}

/// `1.5e16` -> `1.5e+16`, `5e-5` -> `5e-05`.
fn format_exponent(value: f64) -> String {
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}
