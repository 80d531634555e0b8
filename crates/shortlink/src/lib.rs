//! # Dex Short Links
//!
//! Write-only encoder for the instance ids embedded in summary deep links.
//! The collaborator site resolves the slug, so there is no decoder.
//!
//! ```
//! assert_eq!(dex_shortlink::encode(12345).unwrap(), "Y65");
//! assert_eq!(
//!     dex_shortlink::summary_url(12345).unwrap(),
//!     "https://pokefarm.com/summary/Y65"
//! );
//! ```

mod error;

pub use error::{Result, ShortLinkError};

pub const ALPHABET: &[u8; 54] = b"0JbyY7pLxMVG6kjR-sCz4Fhl_Ttw2qgNX5ZQn9S1v8fc3PDdrKHBmW";
pub const BASE: u64 = ALPHABET.len() as u64;
pub const MAX_SLUG_LEN: usize = 6;
/// Largest id that fits in `MAX_SLUG_LEN` symbols (`BASE^6 - 1`).
pub const MAX_ENCODABLE: u64 = BASE.pow(MAX_SLUG_LEN as u32) - 1;

pub const SUMMARY_URL_PREFIX: &str = "https://pokefarm.com/summary/";

/// Encodes an instance id into its slug, most significant symbol first.
///
/// The loop runs while the remaining id is nonzero, so `encode(0)` yields an
/// empty slug rather than `"0"`.
pub fn encode(id: u64) -> Result<String> {
    let mut remaining = id;
    let mut symbols = Vec::with_capacity(MAX_SLUG_LEN);
    while remaining != 0 && symbols.len() < MAX_SLUG_LEN {
        symbols.push(ALPHABET[(remaining % BASE) as usize]);
        remaining /= BASE;
    }

    if remaining != 0 {
        return Err(ShortLinkError::EncodingOverflow {
            id,
            max_len: MAX_SLUG_LEN,
        });
    }

    symbols.reverse();
    Ok(symbols.into_iter().map(char::from).collect())
}

pub fn summary_url(id: u64) -> Result<String> {
    Ok(format!("{SUMMARY_URL_PREFIX}{}", encode(id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_symbols_are_distinct() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 54);
        assert_eq!(BASE, 54);
    }

    #[test]
    fn golden_slugs() {
        assert_eq!(encode(1).unwrap(), "J");
        assert_eq!(encode(53).unwrap(), "W");
        assert_eq!(encode(54).unwrap(), "J0");
        assert_eq!(encode(2916).unwrap(), "J00");
        assert_eq!(encode(12345).unwrap(), "Y65");
        assert_eq!(encode(999_999).unwrap(), "pCHw");
        assert_eq!(encode(MAX_ENCODABLE).unwrap(), "WWWWWW");
    }

    #[test]
    fn zero_encodes_to_empty_slug() {
        assert_eq!(encode(0).unwrap(), "");
    }

    #[test]
    fn ids_past_six_symbols_overflow() {
        assert_eq!(MAX_ENCODABLE, 24_794_911_295);
        let err = encode(MAX_ENCODABLE + 1).unwrap_err();
        assert_eq!(
            err,
            ShortLinkError::EncodingOverflow {
                id: MAX_ENCODABLE + 1,
                max_len: 6
            }
        );
        assert!(encode(u64::MAX).is_err());
    }

    #[test]
    fn summary_url_embeds_slug() {
        assert_eq!(
            summary_url(12345).unwrap(),
            "https://pokefarm.com/summary/Y65"
        );
        assert!(summary_url(MAX_ENCODABLE + 1).is_err());
    }

    proptest! {
        #[test]
        fn proptest_encode_is_deterministic_and_bounded(id in 1u64..=MAX_ENCODABLE) {
            let first = encode(id).unwrap();
            prop_assert_eq!(&first, &encode(id).unwrap());
            prop_assert!(!first.is_empty());
            prop_assert!(first.len() <= MAX_SLUG_LEN);
        }

        #[test]
        fn proptest_distinct_ids_give_distinct_slugs(
            a in 1u64..=MAX_ENCODABLE,
            b in 1u64..=MAX_ENCODABLE,
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(encode(a).unwrap(), encode(b).unwrap());
        }

        #[test]
        fn proptest_ids_beyond_capacity_overflow(id in (MAX_ENCODABLE + 1)..u64::MAX) {
            let is_overflow = matches!(
                encode(id),
                Err(ShortLinkError::EncodingOverflow { .. })
            );
            prop_assert!(is_overflow);
        }
    }
}
