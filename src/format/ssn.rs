use super::{digits, Mask, Rejection};

const MAX_DIGITS: usize = 9;

/// Social Security numbers: `DDD-DD-DDDD`, stored as bare digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SsnMask;

impl Mask for SsnMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        let d = digits(raw, MAX_DIGITS);
        let formatted = match d.len() {
            0..=3 => d,
            4..=5 => format!("{}-{}", &d[..3], &d[3..]),
            _ => format!("{}-{}-{}", &d[..3], &d[3..5], &d[5..]),
        };
        Ok(formatted)
    }

    fn canonicalize(&self, display: &str) -> String {
        digits(display, MAX_DIGITS)
    }

    fn is_significant(&self, c: char) -> bool {
        c.is_ascii_digit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(raw: &str) -> String {
        SsnMask.format(raw).unwrap()
    }

    #[test]
    fn hyphen_placement() {
        assert_eq!(fmt("12"), "12");
        assert_eq!(fmt("123"), "123");
        assert_eq!(fmt("1234"), "123-4");
        assert_eq!(fmt("12345"), "123-45");
        assert_eq!(fmt("123456"), "123-45-6");
        assert_eq!(fmt("123456789"), "123-45-6789");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(fmt("123-45-67890"), "123-45-6789");
    }

    proptest! {
        #[test]
        fn canonical_round_trip(d in "[0-9]{0,9}") {
            let display = fmt(&d);
            prop_assert_eq!(SsnMask.canonicalize(&display), d.clone());
            prop_assert!(display.len() <= 11);
        }
    }
}
