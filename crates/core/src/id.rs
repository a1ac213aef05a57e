//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of trailing characters of a SKU that carry its catalog sequence number.
const SEQUENCE_WIDTH: usize = 4;

/// Stock keeping unit: the stable, unique identifier of a purchasable product.
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

/// Display ordering key derived from a SKU's trailing catalog sequence number.
///
/// SKUs without a trailing number sort after every numbered SKU.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkuSortKey {
    Numbered(u32),
    Unnumbered,
}

impl Sku {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("Sku: must not be blank"));
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ordering key: the numeric value of the digits ending the SKU, looking at
    /// no more than its last four characters (`"item0003"` → 3).
    pub fn sort_key(&self) -> SkuSortKey {
        let digits_start = self
            .0
            .char_indices()
            .rev()
            .take(SEQUENCE_WIDTH)
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);

        match digits_start.and_then(|i| self.0[i..].parse::<u32>().ok()) {
            Some(n) => SkuSortKey::Numbered(n),
            None => SkuSortKey::Unnumbered,
        }
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(s: &str) -> Sku {
        Sku::parse(s).unwrap()
    }

    #[test]
    fn blank_sku_is_rejected() {
        assert!(matches!(Sku::parse(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(Sku::parse("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(sku("  item0001 ").as_str(), "item0001");
    }

    #[test]
    fn sort_key_reads_trailing_sequence_number() {
        assert_eq!(sku("item0003").sort_key(), SkuSortKey::Numbered(3));
        assert_eq!(sku("item0010").sort_key(), SkuSortKey::Numbered(10));
        assert_eq!(sku("widget-12").sort_key(), SkuSortKey::Numbered(12));
    }

    #[test]
    fn sort_key_only_considers_last_four_characters() {
        assert_eq!(sku("A123456789").sort_key(), SkuSortKey::Numbered(6789));
        assert_eq!(sku("7").sort_key(), SkuSortKey::Numbered(7));
    }

    #[test]
    fn sort_key_counts_characters_not_bytes() {
        assert_eq!(sku("café12").sort_key(), SkuSortKey::Numbered(12));
        assert_eq!(sku("thé9").sort_key(), SkuSortKey::Numbered(9));
        assert_eq!(sku("ü0042").sort_key(), SkuSortKey::Numbered(42));
        // Only ASCII digits count as a sequence number.
        assert_eq!(sku("item٤٢").sort_key(), SkuSortKey::Unnumbered);
    }

    #[test]
    fn sku_without_trailing_digits_sorts_last() {
        let unnumbered = sku("0001gift").sort_key();
        assert_eq!(unnumbered, SkuSortKey::Unnumbered);
        assert!(SkuSortKey::Numbered(u32::MAX) < unnumbered);
    }

    #[test]
    fn serde_rejects_blank_sku() {
        let ok: Sku = serde_json::from_str("\"item0002\"").unwrap();
        assert_eq!(ok, sku("item0002"));
        assert!(serde_json::from_str::<Sku>("\"  \"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"item0002\"");
    }
}
