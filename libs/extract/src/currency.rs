//! Currency figure parsing.
//!
//! Package and CTC fields hold free text: "₹12,00,000", "12 LPA",
//! "negotiable". Unlike experience parsing, there is no default here. A
//! figure either parses or it is absent, and the caller decides what absence
//! means (CTC filters keep the record, see the residual filter rules).

/// Parse a currency string into a plain amount.
///
/// Strips every character that is not an ASCII digit or dot and parses the
/// remainder. Returns `None` when nothing numeric is left or the remainder
/// is not a single figure.
pub fn parse_currency(text: &str) -> Option<f64> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse().ok()
}
