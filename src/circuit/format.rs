//! Display formatting for resistance values.

use crate::DISPLAY_SIG_FIGS;

/// Format a resistance value at [`DISPLAY_SIG_FIGS`] significant digits,
/// trimming trailing fractional zeros (so 2.1000 prints as "2.1" and
/// 10.00 prints as "10").
pub fn format_ohms(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (DISPLAY_SIG_FIGS as i32 - 1 - magnitude).max(0) as usize;
    let rendered = format!("{value:.decimals$}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}
