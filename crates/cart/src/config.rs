//! Display configuration for monetary amounts.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::money::Money;

pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const ENV_THOUSANDS_SEPARATOR: &str = "STOREFRONT_THOUSANDS_SEPARATOR";
pub const ENV_DECIMAL_SEPARATOR: &str = "STOREFRONT_DECIMAL_SEPARATOR";

/// How totals are rendered for display. Defaults to US dollars (`$1,234.50`).
///
/// Only the rendering changes; amounts are always a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl PriceFormat {
    /// Load from `STOREFRONT_*` environment variables, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (unset keys keep their defaults).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut format = Self::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            format.currency_symbol = symbol;
        }
        if let Some(raw) = lookup(ENV_THOUSANDS_SEPARATOR) {
            format.thousands_separator = single_char(&raw)
                .with_context(|| format!("invalid {ENV_THOUSANDS_SEPARATOR}"))?;
        }
        if let Some(raw) = lookup(ENV_DECIMAL_SEPARATOR) {
            format.decimal_separator = single_char(&raw)
                .with_context(|| format!("invalid {ENV_DECIMAL_SEPARATOR}"))?;
        }

        if format.thousands_separator == format.decimal_separator {
            bail!(
                "thousands and decimal separators must differ (both {:?})",
                format.decimal_separator
            );
        }

        Ok(format)
    }

    /// Render `amount` with symbol, digit grouping and two decimals.
    pub fn format(&self, amount: Money) -> String {
        let digits = amount.units().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{}{}{}{:02}",
            self.currency_symbol,
            grouped,
            self.decimal_separator,
            amount.fraction()
        )
    }
}

fn single_char(raw: &str) -> anyhow::Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("expected exactly one character, got {raw:?}"),
    }
}
