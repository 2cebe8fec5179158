//! Ledger amount strings and their display form.
//!
//! Ledger amounts travel as `"<ASSET>/<decimals> <minor units>"`, e.g.
//! `"USD/2 10050"` for one hundred dollars and fifty cents.

use std::sync::LazyLock;

use regex::Regex;

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)/(\d+)\s+(\d+)").expect("amount pattern compiles"));

/// Fraction digits kept in the display form.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Currencies shown with a leading symbol.
const SYMBOLS: &[(&str, &str)] = &[("USD", "$"), ("AUD", "A$"), ("BRL", "R$"), ("PHP", "₱")];

/// A parsed ledger amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub currency: String,
    pub decimals: u32,
    pub minor_units: u128,
}

impl Amount {
    /// Parse the first `ASSET/decimals units` group found in `raw`.
    ///
    /// Returns `None` when nothing matches or a number does not fit.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = AMOUNT_RE.captures(raw)?;
        Some(Self {
            currency: caps[1].to_string(),
            decimals: caps[2].parse().ok()?,
            minor_units: caps[3].parse().ok()?,
        })
    }

    /// The value with `decimals` applied, grouped in thousands, at most
    /// three fraction digits (half-up), trailing zeros dropped.
    ///
    /// `None` if scaling overflows.
    pub fn display_number(&self) -> Option<String> {
        let (whole, fraction) = scale(self.minor_units, self.decimals)?;
        let mut out = group_thousands(whole);
        if fraction > 0 {
            let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
            out.push('.');
            out.push_str(digits.trim_end_matches('0'));
        }
        Some(out)
    }

    /// Full display form. Fiat in `SYMBOLS` gets a prefix; tickers
    /// (USDT, BTC, TSLA, ...) and any other code get a trailing code.
    pub fn display(&self) -> Option<String> {
        let number = self.display_number()?;
        match SYMBOLS.iter().find(|(code, _)| *code == self.currency) {
            Some((_, symbol)) => Some(format!("{symbol}{number}")),
            None => Some(format!("{number} {}", self.currency)),
        }
    }
}

/// Human-readable form of an encoded amount. Input that does not parse is
/// returned unchanged.
pub fn format_amount(raw: &str) -> String {
    match Amount::parse(raw).and_then(|amount| amount.display()) {
        Some(text) => text,
        None => {
            log::debug!("amount '{raw}' is not in ASSET/decimals form; showing as-is");
            raw.to_string()
        }
    }
}

/// Split `units / 10^decimals` into whole part and a fraction expressed in
/// thousandths, rounding half up.
fn scale(units: u128, decimals: u32) -> Option<(u128, u128)> {
    let thousand = 10u128.pow(MAX_FRACTION_DIGITS);
    let scaled = if decimals <= MAX_FRACTION_DIGITS {
        units.checked_mul(10u128.pow(MAX_FRACTION_DIGITS - decimals))?
    } else {
        match 10u128.checked_pow(decimals - MAX_FRACTION_DIGITS) {
            Some(divisor) => units.checked_add(divisor / 2)? / divisor,
            // Any u128 divided by more than 10^38 rounds to zero.
            None => 0,
        }
    };
    Some((scaled / thousand, scaled % thousand))
}

fn group_thousands(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.push(n.to_string());
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
#[path = "../../tests/rust/test_postings_amount.rs"]
mod tests;
