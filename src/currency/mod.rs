use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits shown for money amounts.
pub const CURRENCY_PRECISION: u32 = 2;

/// Display preferences for money amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Renders `amount` rounded half away from zero to two places, e.g. `$1,234.50`.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let text = format!("{:.prec$}", rounded.abs(), prec = CURRENCY_PRECISION as usize);
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_digits(integer, self.grouping_separator));
        out.push(self.decimal_separator);
        out.push_str(fraction);
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats with the default `$` display.
pub fn format_currency(amount: Decimal) -> String {
    CurrencyFormat::default().format(amount)
}
