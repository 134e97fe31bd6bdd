//! Modulo-11 check digit computation.

/// Weights applied to the digits of the body, least significant first.
/// The cycle wraps back to 2 after 7.
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

const MODULUS: u32 = 11;

/// Check digit used when the checksum result is 10.
pub const K: char = 'k';

/// Compute the check digit of a numeric body.
///
/// Total over `u32`: a body of `0` consumes no digits and yields `'0'`.
///
/// ```
/// use chilean_rut::calc_check_digit;
///
/// assert_eq!(calc_check_digit(17_679_133), '0');
/// assert_eq!(calc_check_digit(1_234_567), '4');
/// assert_eq!(calc_check_digit(13_239_959), 'k');
/// ```
pub fn calc_check_digit(number: u32) -> char {
    let mut rest = number;
    let mut sum = 0u32;
    let mut index = 0usize;
    while rest > 0 {
        sum += (rest % 10) * WEIGHTS[index];
        rest /= 10;
        index = (index + 1) % WEIGHTS.len();
    }
    digit_from_result(MODULUS - sum % MODULUS)
}

fn digit_from_result(result: u32) -> char {
    match result {
        11 => '0',
        10 => K,
        // `sum % 11` keeps the result in 1..=11, so n is a single digit here
        n => char::from(b'0' + n as u8),
    }
}

/// Returns true if `c` belongs to the check digit alphabet (`0-9`, `k`, `K`).
pub fn is_check_digit(c: char) -> bool {
    c.is_ascii_digit() || c.eq_ignore_ascii_case(&K)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(calc_check_digit(17_679_133), '0');
        assert_eq!(calc_check_digit(1_234_567), '4');
        assert_eq!(calc_check_digit(15_605_286), '8');
        assert_eq!(calc_check_digit(13_239_959), 'k');
        assert_eq!(calc_check_digit(1), '9');
        assert_eq!(calc_check_digit(5_942_232), '4');
    }

    #[test]
    fn zero_body_is_total() {
        // accumulator 0 -> 11 - 0 = 11 -> '0'
        assert_eq!(calc_check_digit(0), '0');
    }

    #[test]
    fn weights_wrap_after_six_digits() {
        // 1_000_000: the seventh digit gets weight 2 again -> 11 - 2 = 9
        assert_eq!(calc_check_digit(1_000_000), '9');
        // 100_000: sixth digit, weight 7 -> 11 - 7 = 4
        assert_eq!(calc_check_digit(100_000), '4');
    }

    #[test]
    fn check_digit_alphabet() {
        for c in ['0', '5', '9', 'k', 'K'] {
            assert!(is_check_digit(c), "{c} should be accepted");
        }
        for c in ['a', 'A', '-', '.', ' ', 'ñ'] {
            assert!(!is_check_digit(c), "{c} should be rejected");
        }
    }
}
