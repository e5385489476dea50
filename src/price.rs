//! Price string parsing
//!
//! Upstream prices arrive as localized strings like "16억 5,000" (16 eok and
//! 5,000 man-won). Parsed values are in ten-thousand-won units, so that
//! example becomes 165000.

/// The 100-million-won unit marker in provider price strings
const EOK: char = '억';

/// Parse a provider price string into ten-thousand-won units.
///
/// Returns `None` for empty or garbage input; callers drop the owning record
/// rather than treating this as an error.
pub fn parse_price(price: &str) -> Option<i64> {
    let cleaned = price.replace(',', "");

    if let Some((eok_part, man_part)) = cleaned.split_once(EOK) {
        let eok: i64 = eok_part.trim().parse().ok()?;
        let man_part = man_part.trim();
        let man: i64 = if man_part.is_empty() {
            0
        } else {
            man_part.parse().ok()?
        };
        return Some(eok * 10000 + man);
    }

    let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod tests;
