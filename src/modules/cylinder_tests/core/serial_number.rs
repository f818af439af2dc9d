// Serial numbers printed on the test certificate.
//
// Format
// - CNG<two digit year>-<six characters from [A-Z0-9]>, for example CNG25-7QX2KD.
// - The year is the year the record was entered, not the test date.

use rand::Rng;

const SERIAL_PREFIX: &str = "CNG";
const SUFFIX_LEN: usize = 6;
const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn generate_serial_number<R: Rng + ?Sized>(year: i32, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{SERIAL_PREFIX}{:02}-{suffix}", year.rem_euclid(100))
}

/// True when `serial` has the shape `generate_serial_number` produces.
#[cfg(test)]
pub fn is_generated_format(serial: &str) -> bool {
    let Some(rest) = serial.strip_prefix(SERIAL_PREFIX) else {
        return false;
    };
    let Some((year, suffix)) = rest.split_once('-') else {
        return false;
    };
    year.len() == 2
        && year.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}
