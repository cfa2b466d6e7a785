//! ISO 7064 MOD 11-10 check digit.
//!
//! Pure functions over decimal digits. The algorithm is an order-sensitive
//! fold, so digits are always consumed most significant first.

/// Number of base digits covered by the check digit.
pub const BASE_LEN: usize = 10;

/// Total length of an OIB (base digits plus the check digit).
pub const OIB_LEN: usize = BASE_LEN + 1;

/// Compute the ISO 7064 MOD 11-10 check digit for ten decimal digits.
///
/// Each element must be in `0..=9`.
///
/// Two substitutions happen and they point in opposite directions: inside the
/// loop an intermediate `0` becomes `10`, and at the end a check value of `10`
/// becomes the digit `0`.
pub fn check_digit(digits: &[u8; BASE_LEN]) -> u8 {
    debug_assert!(digits.iter().all(|&d| d <= 9));

    let mut control: u32 = 10;
    for &d in digits {
        control = (control + u32::from(d)) % 10;
        if control == 0 {
            control = 10;
        }
        control = (control * 2) % 11;
    }

    // control is in 1..=10 here, so the subtraction cannot underflow.
    match 11 - control {
        10 => 0,
        digit => digit as u8,
    }
}

/// Check digit for a textual base number of exactly ten ASCII digits.
///
/// Returns `None` for anything else (wrong length, signs, whitespace,
/// non-ASCII digits).
pub fn check_digit_for(base: &str) -> Option<u8> {
    ascii_digits::<BASE_LEN>(base).map(|digits| check_digit(&digits))
}

/// Parse `text` into exactly `N` digit values, or `None` if it is not `N`
/// ASCII decimal digits.
pub(crate) fn ascii_digits<const N: usize>(text: &str) -> Option<[u8; N]> {
    let bytes = text.as_bytes();
    if bytes.len() != N {
        return None;
    }
    let mut out = [0u8; N];
    for (slot, &b) in out.iter_mut().zip(bytes) {
        if !b.is_ascii_digit() {
            return None;
        }
        *slot = b - b'0';
    }
    Some(out)
}
