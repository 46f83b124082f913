use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::constants::hash::CONTENT_ID_HEX_WIDTH;
use crate::utils::identity_key;

/// Deterministic 64-bit identifier derived from normalized text.
///
/// Ordering follows the numeric value, which matches the lexicographic
/// order of the zero-padded hex form written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentId(u64);

impl ContentId {
    /// Wrap a raw hash value.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Raw hash value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Zero-padded lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        format!("{:0width$x}", self.0, width = CONTENT_ID_HEX_WIDTH)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = CONTENT_ID_HEX_WIDTH)
    }
}

impl FromStr for ContentId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let canonical = raw.len() == CONTENT_ID_HEX_WIDTH
            && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !canonical {
            return Err(format!(
                "content id '{raw}' must be {CONTENT_ID_HEX_WIDTH} lowercase hex digits"
            ));
        }
        u64::from_str_radix(raw, 16)
            .map(Self)
            .map_err(|_| format!("content id '{raw}' is not valid hex"))
    }
}

impl Serialize for ContentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Seeded xxh3-64 over the UTF-8 bytes of `value`.
pub fn stable_hash_str(seed: u64, value: &str) -> u64 {
    xxh3_64_with_seed(value.as_bytes(), seed)
}

/// Content id of `text`: case, surrounding whitespace, and internal
/// whitespace do not affect the result.
pub fn content_id(seed: u64, text: &str) -> ContentId {
    ContentId(stable_hash_str(seed, &identity_key(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_ignores_case_and_whitespace() {
        let a = content_id(0, "  We should   ban plastic\n");
        let b = content_id(0, "weshouldbanplastic");
        let c = content_id(0, "WE SHOULD BAN PLASTIC");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn content_id_separates_different_letters() {
        assert_ne!(
            content_id(0, "We should ban plastic"),
            content_id(0, "We should ban plastics")
        );
    }

    #[test]
    fn content_id_depends_on_seed() {
        assert_ne!(content_id(0, "cats"), content_id(7, "cats"));
    }

    #[test]
    fn hex_form_is_zero_padded_and_parses_back() {
        let id = ContentId::from_raw(0xab);
        assert_eq!(id.to_hex(), "00000000000000ab");
        assert_eq!(id.to_string(), id.to_hex());
        assert_eq!("00000000000000ab".parse::<ContentId>(), Ok(id));
        assert!("ab".parse::<ContentId>().is_err());
        assert!("zz000000000000ab".parse::<ContentId>().is_err());
    }

    #[test]
    fn only_the_written_hex_form_parses() {
        assert!("+00000000000000a".parse::<ContentId>().is_err());
        assert!("00000000000000AB".parse::<ContentId>().is_err());
        assert!(" 0000000000000ab".parse::<ContentId>().is_err());
        assert!(serde_json::from_str::<ContentId>("\"+00000000000000a\"").is_err());
    }

    #[test]
    fn ordering_matches_hex_ordering() {
        let low = ContentId::from_raw(0x0f);
        let high = ContentId::from_raw(0xf0);
        assert!(low < high);
        assert!(low.to_hex() < high.to_hex());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let id = ContentId::from_raw(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0000000000000001\"");
        let back: ContentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
