//! Marker labels for pins.
//!
//! Pins are labelled by their position: `A` through `Z`, then `AA`, `AB`, ...
//! `AZ`, `BA`, ... in the same way spreadsheet columns are named. The scheme
//! has no upper bound.

const ALPHABET_LEN: usize = 26;

/// Label for the pin at `index` (zero-based).
#[must_use]
pub fn pin_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % ALPHABET_LEN;
        // rem < 26, so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::pin_label;

    #[test]
    fn single_letters_cover_first_26() {
        assert_eq!(pin_label(0), "A");
        assert_eq!(pin_label(1), "B");
        assert_eq!(pin_label(25), "Z");
    }

    #[test]
    fn continues_with_double_letters() {
        assert_eq!(pin_label(26), "AA");
        assert_eq!(pin_label(27), "AB");
        assert_eq!(pin_label(51), "AZ");
        assert_eq!(pin_label(52), "BA");
        assert_eq!(pin_label(701), "ZZ");
        assert_eq!(pin_label(702), "AAA");
    }
}
