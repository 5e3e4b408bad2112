use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

const INVOICE_PREFIX: &str = "INV";
const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 3;

static INVOICE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^INV-[0-9]{6}-[0-9A-Z]{3}$").expect("invoice pattern is valid"));

/// `INV-<last 6 digits of epoch millis>-<3 random base-36 chars>`.
pub fn generate_invoice_number() -> String {
    generate_invoice_number_at(Utc::now(), &mut rand::thread_rng())
}

pub fn generate_invoice_number_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let stamp = now.timestamp_millis().rem_euclid(1_000_000);
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{}-{:06}-{}", INVOICE_PREFIX, stamp, suffix)
}

pub fn is_valid_invoice_number(candidate: &str) -> bool {
    INVOICE_NUMBER_REGEX.is_match(candidate)
}
