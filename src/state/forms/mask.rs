//! Input masks applied to text fields as the user types
//!
//! Every mask is a pure function of the whole raw text. The field value is
//! replaced wholesale with the masked result on each edit, so applying a mask
//! to its own output is a no-op.

/// Formatting rule attached to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMask {
    /// `(DDD) DDD-DDDD`, 10 digits max
    Phone,
    /// SSN-style `DDD-DD-DDDD`, 9 digits max
    NationalId,
    /// EIN-style `DD-DDDDDDD`, 9 digits max
    TaxId,
    /// 5 digit ZIP code
    PostalCode,
}

impl InputMask {
    /// Derive the display value from raw input
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Phone => format_phone(raw),
            Self::NationalId => format_national_id(raw),
            Self::TaxId => format_tax_id(raw),
            Self::PostalCode => format_postal_code(raw),
        }
    }

    /// Maximum number of digits the mask keeps
    pub fn max_digits(self) -> usize {
        match self {
            Self::Phone => 10,
            Self::NationalId | Self::TaxId => 9,
            Self::PostalCode => 5,
        }
    }

    /// Remove the last digit and re-apply the mask.
    ///
    /// Popping a raw character would only remove punctuation the mask puts
    /// straight back, e.g. the trailing space of `(555) `.
    pub fn backspace(self, current: &str) -> String {
        let mut digits = digits_only(current, self.max_digits());
        digits.pop();
        self.apply(&digits)
    }
}

/// Strip everything but ASCII digits, keeping at most `max` of them
fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

pub fn format_phone(raw: &str) -> String {
    let d = digits_only(raw, 10);
    if d.len() >= 6 {
        format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..])
    } else if d.len() >= 3 {
        format!("({}) {}", &d[..3], &d[3..])
    } else {
        d
    }
}

pub fn format_national_id(raw: &str) -> String {
    let d = digits_only(raw, 9);
    if d.len() >= 5 {
        format!("{}-{}-{}", &d[..3], &d[3..5], &d[5..])
    } else if d.len() >= 3 {
        format!("{}-{}", &d[..3], &d[3..])
    } else {
        d
    }
}

pub fn format_tax_id(raw: &str) -> String {
    let d = digits_only(raw, 9);
    if d.len() >= 2 {
        format!("{}-{}", &d[..2], &d[2..])
    } else {
        d
    }
}

pub fn format_postal_code(raw: &str) -> String {
    digits_only(raw, 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [InputMask; 4] = [
        InputMask::Phone,
        InputMask::NationalId,
        InputMask::TaxId,
        InputMask::PostalCode,
    ];

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_number() {
            assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        }

        #[test]
        fn test_area_code_only() {
            assert_eq!(format_phone("555"), "(555) ");
        }

        #[test]
        fn test_partial_exchange() {
            assert_eq!(format_phone("55512"), "(555) 12");
            assert_eq!(format_phone("555123"), "(555) 123-");
        }

        #[test]
        fn test_short_input_stays_bare() {
            assert_eq!(format_phone("55"), "55");
            assert_eq!(format_phone(""), "");
        }

        #[test]
        fn test_truncates_to_ten_digits() {
            assert_eq!(format_phone("555-123-4567 ext 89"), "(555) 123-4567");
        }
    }

    mod national_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_number() {
            assert_eq!(format_national_id("123456789"), "123-45-6789");
        }

        #[test]
        fn test_partial() {
            assert_eq!(format_national_id("1234"), "123-4");
            assert_eq!(format_national_id("12345"), "123-45-");
            assert_eq!(format_national_id("12"), "12");
        }

        #[test]
        fn test_truncates_to_nine_digits() {
            assert_eq!(format_national_id("1234567890"), "123-45-6789");
        }
    }

    mod tax_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_number() {
            assert_eq!(format_tax_id("123456789"), "12-3456789");
        }

        #[test]
        fn test_partial() {
            assert_eq!(format_tax_id("1"), "1");
            assert_eq!(format_tax_id("12"), "12-");
        }
    }

    mod postal_code {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_strips_letters() {
            assert_eq!(format_postal_code("12345abc"), "12345");
        }

        #[test]
        fn test_truncates() {
            assert_eq!(format_postal_code("1234567"), "12345");
        }
    }

    #[test]
    fn test_masks_are_idempotent() {
        let samples = [
            "", "5", "55", "555", "5551", "55512", "555123", "5551234567", "12345abc",
            "(555) 123-4567", "123-45-6789", "12-3456789", "abc 987 65 43 21 0",
        ];
        for mask in ALL {
            for sample in samples {
                let once = mask.apply(sample);
                assert_eq!(mask.apply(&once), once, "{mask:?} on {sample:?}");
            }
        }
    }

    #[test]
    fn test_backspace_removes_a_digit() {
        assert_eq!(InputMask::Phone.backspace("(555) "), "55");
        assert_eq!(InputMask::Phone.backspace("(555) 123-4567"), "(555) 123-456");
        assert_eq!(InputMask::TaxId.backspace("12-"), "1");
        assert_eq!(InputMask::PostalCode.backspace(""), "");
    }
}
