//! Random value sources for each field kind.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::errors::GenerationError;

/// Prefixes drawn for the mobile field.
pub const MOBILE_PREFIXES: &[&str] = &["09"];
/// Prefixes drawn for phone1..phone4.
pub const PHONE_PREFIXES: &[&str] = &["09", "02"];

pub const SURNAMES: [&str; 15] = [
    "陳", "林", "李", "張", "王", "吳", "劉", "蔡", "楊", "許", "鄭", "謝", "洪", "郭", "邱",
];
pub const GIVEN_NAMES: [&str; 12] = [
    "大文", "小明", "雅婷", "志強", "美玲", "家豪", "淑芬", "俊傑", "欣怡", "建宏", "佩君", "昱廷",
];

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A phone number together with the number of draws it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneDraw {
    pub value: String,
    pub attempts: u32,
}

pub fn random_consent(rng: &mut dyn rand::RngCore) -> String {
    let value = if rng.random_bool(0.5) { "Y" } else { "N" };
    value.to_string()
}

/// Draw `<prefix><8 digits>` until the result is not in `exclude`.
pub fn random_phone(
    rng: &mut dyn rand::RngCore,
    prefixes: &[&str],
    exclude: &[String],
) -> Result<String, GenerationError> {
    draw_phone(rng, prefixes, exclude, None).map(|draw| draw.value)
}

/// Like [`random_phone`], optionally giving up after `max_attempts` draws.
pub fn draw_phone(
    rng: &mut dyn rand::RngCore,
    prefixes: &[&str],
    exclude: &[String],
    max_attempts: Option<u32>,
) -> Result<PhoneDraw, GenerationError> {
    if prefixes.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "phone prefixes must not be empty".to_string(),
        ));
    }

    let mut attempts = 0_u32;
    loop {
        if let Some(max) = max_attempts {
            if attempts >= max {
                return Err(GenerationError::Exhausted(attempts));
            }
        }
        attempts = attempts.saturating_add(1);

        let prefix = prefixes.choose(rng).copied().unwrap_or("09");
        let value = format!("{prefix}{:08}", rng.random_range(0..100_000_000_u32));
        if !exclude.contains(&value) {
            return Ok(PhoneDraw { value, attempts });
        }
    }
}

/// One uppercase letter followed by nine digits.
pub fn random_id_code(rng: &mut dyn rand::RngCore) -> String {
    let letter = LETTERS.choose(rng).copied().unwrap_or(b'A') as char;
    format!("{letter}{:09}", rng.random_range(0..1_000_000_000_u32))
}

/// Surname followed by given name, no separator.
pub fn random_name(rng: &mut dyn rand::RngCore) -> String {
    let surname = SURNAMES.choose(rng).unwrap_or(&"陳");
    let given = GIVEN_NAMES.choose(rng).unwrap_or(&"大文");
    format!("{surname}{given}")
}
