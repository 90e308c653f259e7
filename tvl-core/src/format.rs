// tvl-core/src/format.rs
// Rounding/text policy for report output. The engine hands out full
// precision; every threshold here is display-side only.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const ABBREV_AMOUNT_ABOVE: Decimal = dec!(100000);
const ABBREV_VALUE_ABOVE: Decimal = dec!(1000000);
const TWO_DECIMALS_ABOVE: Decimal = dec!(10000);

/// Token-amount column the number appears in; the low range differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStyle {
    /// Asset-level totals: 6 decimals below the 10k threshold.
    AssetTotal,
    /// Native / per-chain breakdown: 8 decimals below the 10k threshold.
    ChainBreakdown,
}

/// Currency-value column variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// Aggregate value columns: 2 decimals through the mid range.
    Aggregate,
    /// The value sub-line under a native/per-chain amount: whole
    /// dollars in the mid range.
    NativeSubline,
}

/// Token amount with display precision by magnitude: abbreviated above
/// 100k, 2 decimals above 10k, full low-range precision below.
pub fn format_amount(m: Decimal, style: AmountStyle) -> String {
    if m > ABBREV_AMOUNT_ABOVE {
        abbreviate(m)
    } else if m > TWO_DECIMALS_ABOVE {
        grouped(m, 2)
    } else {
        let dp = match style {
            AmountStyle::AssetTotal => 6,
            AmountStyle::ChainBreakdown => 8,
        };
        grouped(m, dp)
    }
}

/// Currency value: abbreviated above 1M, style-dependent decimals in
/// the mid range, cents below 10k. The currency symbol is the caller's.
pub fn format_value(m: Decimal, style: ValueStyle) -> String {
    if m > ABBREV_VALUE_ABOVE {
        abbreviate(m)
    } else if m > TWO_DECIMALS_ABOVE {
        match style {
            ValueStyle::Aggregate => grouped(m, 2),
            ValueStyle::NativeSubline => grouped(m, 0),
        }
    } else {
        grouped(m, 2)
    }
}

/// Exact 6-decimal form, used where the dashboard shows the full number
/// on hover.
pub fn format_exact(m: Decimal) -> String {
    grouped(m, 6)
}

/// Exact currency form (3 decimals, sub-cent readability).
pub fn format_value_exact(m: Decimal) -> String {
    grouped(m, 3)
}

/// K/M/B/T suffix form with 2 decimals.
pub fn abbreviate(m: Decimal) -> String {
    let abs = m.abs();
    let (divisor, suffix) = if abs >= dec!(1000000000000) {
        (dec!(1000000000000), "T")
    } else if abs >= dec!(1000000000) {
        (dec!(1000000000), "B")
    } else if abs >= dec!(1000000) {
        (dec!(1000000), "M")
    } else if abs >= dec!(1000) {
        (dec!(1000), "K")
    } else {
        (Decimal::ONE, "")
    };
    let scaled = (m / divisor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}{}", scaled, suffix)
}

/// Fixed-decimal form with thousands grouping.
fn grouped(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.*}", dp as usize, rounded);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
