use core::fmt::Debug;
use std::fmt::Display;

use crate::{HpoError, HpoResult, HPO_PREFIX};

/// The unique identifier of an HPO term
///
/// The textual representation is `HP:` followed by a 7 digit, zero padded
/// integer. Internally only the integer is stored.
///
/// # Examples
///
/// ```
/// use hpo_generank::HpoTermId;
///
/// let id = HpoTermId::try_from("HP:0000118").unwrap();
/// assert_eq!(id.as_u32(), 118u32);
/// assert_eq!(id.to_string(), "HP:0000118");
///
/// assert!(HpoTermId::try_from("OMIM:600171").is_err());
/// ```
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Returns the integer part of the `HpoTermId`
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = HpoError;
    fn try_from(s: &str) -> HpoResult<Self> {
        let Some(digits) = s.strip_prefix(HPO_PREFIX) else {
            return Err(HpoError::InvalidInput(format!("not an HPO term id: {s}")));
        };
        if digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HpoError::InvalidInput(format!(
                "HPO term id must have 7 digits: {s}"
            )));
        }
        Ok(HpoTermId {
            inner: digits.parse::<u32>()?,
        })
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({self})")
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

impl PartialEq<str> for HpoTermId {
    fn eq(&self, other: &str) -> bool {
        HpoTermId::try_from(other).map_or(false, |other| *self == other)
    }
}

impl PartialEq<&str> for HpoTermId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid_id() {
        let id = HpoTermId::try_from("HP:0000007").unwrap();
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id, HpoTermId::from(7u32));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(HpoTermId::from(118u32).to_string(), "HP:0000118");
        assert_eq!(format!("{:?}", HpoTermId::from(1u32)), "HpoTermId(HP:0000001)");
    }

    #[test]
    fn missing_prefix() {
        assert!(HpoTermId::try_from("0000118").is_err());
        assert!(HpoTermId::try_from("OMIM:0000118").is_err());
        assert!(HpoTermId::try_from("").is_err());
    }

    #[test]
    fn invalid_digits() {
        assert!(matches!(
            HpoTermId::try_from("HP:000011A"),
            Err(HpoError::InvalidInput(_))
        ));
        assert!(HpoTermId::try_from("HP:").is_err());
    }

    #[test]
    fn requires_seven_digits() {
        assert!(HpoTermId::try_from("HP:1").is_err());
        assert!(HpoTermId::try_from("HP:+000001").is_err());
        assert!(HpoTermId::try_from("HP:+0000001").is_err());
        assert!(HpoTermId::try_from("HP:00000001").is_err());
        assert!(HpoTermId::try_from("HP: 000001").is_err());
        assert!(HpoTermId::try_from("HP:000001٣").is_err());
        assert_eq!(HpoTermId::try_from("HP:9999999").unwrap().as_u32(), 9_999_999);
    }

    #[test]
    fn compare_with_str() {
        let id = HpoTermId::from(55u32);
        assert_eq!(id, "HP:0000055");
        assert!(id != "HP:0000056");
        assert!(id != "foobar");
    }
}
