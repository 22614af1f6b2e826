//! # Face-value price check
//!
//! Advisory client-side check of an asking price against the most specific
//! cap known for a ticket: its verified face value, otherwise the event's
//! section ceiling. The server re-verifies every listing and its
//! `verification_status` is what the UI shows after submit; nothing here
//! blocks a submission.

use crate::models::Ceiling;

/// Cap that applies to a listing: face value first, then section ceiling.
pub fn effective_max(face_value_cents: Option<u64>, section_ceiling_cents: Option<u64>) -> Option<u64> {
    face_value_cents.or(section_ceiling_cents)
}

/// First ceiling whose pattern matches `section`.
pub fn ceiling_for_section<'a>(ceilings: &'a [Ceiling], section: &str) -> Option<&'a Ceiling> {
    let section = section.trim();
    if section.is_empty() {
        return None;
    }
    ceilings
        .iter()
        .find(|c| glob_matches(&c.section_pattern, section))
}

/// Case-insensitive match where `*` stands for any run of characters.
fn glob_matches(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.trim().to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;
    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((sp, st)) = star {
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

/// Parse user input like `"$1,234.567"` into cents (`123456`).
///
/// Everything but digits and `.` is dropped, input stops at a second `.`, and
/// the fraction is clamped to two digits. Returns `None` when no digits remain.
pub fn parse_price(input: &str) -> Option<u64> {
    let mut whole = String::new();
    let mut fraction = String::new();
    let mut seen_dot = false;
    for c in input.chars() {
        match c {
            '.' if seen_dot => break,
            '.' => seen_dot = true,
            d if d.is_ascii_digit() && seen_dot => {
                if fraction.len() < 2 {
                    fraction.push(d);
                }
            }
            d if d.is_ascii_digit() => whole.push(d),
            _ => {}
        }
    }
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    // Digits only, so a failed parse means overflow: saturate
    let dollars: u64 = if whole.is_empty() { 0 } else { whole.parse().unwrap_or(u64::MAX) };
    while fraction.len() < 2 {
        fraction.push('0');
    }
    let cents: u64 = fraction.parse().unwrap_or(0);
    Some(dollars.saturating_mul(100).saturating_add(cents))
}

/// Sanitised text for the price field, same rules as [`parse_price`].
pub fn sanitize_price_input(input: &str) -> String {
    let mut out = String::new();
    let mut decimals: Option<usize> = None;
    for c in input.chars() {
        match (c, decimals) {
            ('.', Some(_)) => break,
            ('.', None) => {
                decimals = Some(0);
                out.push('.');
            }
            (d, Some(n)) if d.is_ascii_digit() => {
                if n < 2 {
                    out.push(d);
                    decimals = Some(n + 1);
                }
            }
            (d, None) if d.is_ascii_digit() => out.push(d),
            _ => {}
        }
    }
    out
}

/// `$12.34` formatting for cents.
pub fn format_cents(cents: u64) -> String {
    let dollars = cents / 100;
    let mut grouped = String::new();
    for (i, c) in dollars.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("${}.{:02}", grouped, cents % 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Below,
    AtFaceValue,
    Above,
}

/// Result of checking one asking price against one cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCheck {
    pub asking_cents: Option<u64>,
    pub max_cents: Option<u64>,
}

impl PriceCheck {
    pub fn new(asking_cents: Option<u64>, max_cents: Option<u64>) -> Self {
        Self {
            asking_cents,
            max_cents,
        }
    }

    /// Build from raw field input and the known caps.
    pub fn from_input(input: &str, face_value_cents: Option<u64>, section_ceiling_cents: Option<u64>) -> Self {
        Self::new(parse_price(input), effective_max(face_value_cents, section_ceiling_cents))
    }

    /// True when there is nothing to compare or the price is within the cap.
    pub fn is_valid(&self) -> bool {
        match (self.asking_cents, self.max_cents) {
            (Some(asking), Some(max)) => asking <= max,
            _ => true,
        }
    }

    pub fn comparison(&self) -> Option<Comparison> {
        let (asking, max) = (self.asking_cents?, self.max_cents?);
        Some(match asking.cmp(&max) {
            std::cmp::Ordering::Less => Comparison::Below,
            std::cmp::Ordering::Equal => Comparison::AtFaceValue,
            std::cmp::Ordering::Greater => Comparison::Above,
        })
    }

    /// Fill bar width in percent of the cap, clamped to 100.
    pub fn fill_percent(&self) -> u8 {
        match (self.asking_cents, self.max_cents) {
            (Some(_), Some(0)) => 100,
            (Some(asking), Some(max)) => (asking.saturating_mul(100) / max).min(100) as u8,
            _ => 0,
        }
    }

    /// The price exceeds the cap and the bar should show an overflow marker.
    pub fn overflows(&self) -> bool {
        self.comparison() == Some(Comparison::Above)
    }

    /// Inline message under the price field.
    pub fn message(&self) -> Option<String> {
        let max = self.max_cents?;
        let asking = self.asking_cents?;
        Some(match self.comparison()? {
            Comparison::Below => format!("{} below face value", format_cents(max - asking)),
            Comparison::AtFaceValue => "Listed at face value".to_string(),
            Comparison::Above => format!(
                "{} over the {} cap. Listings above face value are rejected.",
                format_cents(asking - max),
                format_cents(max)
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceiling(pattern: &str, cents: u64) -> Ceiling {
        Ceiling {
            section_pattern: pattern.to_string(),
            max_price_cents: cents,
        }
    }

    #[test]
    fn test_effective_max_prefers_face_value() {
        assert_eq!(effective_max(Some(5_000), Some(9_000)), Some(5_000));
        assert_eq!(effective_max(None, Some(9_000)), Some(9_000));
        assert_eq!(effective_max(None, None), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("120"), Some(12_000));
        assert_eq!(parse_price("$1,234.56"), Some(123_456));
        assert_eq!(parse_price("12.345"), Some(1_234));
        assert_eq!(parse_price("12.3"), Some(1_230));
        assert_eq!(parse_price("12.3.4"), Some(1_230));
        assert_eq!(parse_price(".5"), Some(50));
        assert_eq!(parse_price("12."), Some(1_200));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_is_stable_under_sanitize() {
        for input in ["$1,234.567", "12.3.4", "  99 ", "0.01", "abc.12"] {
            let cleaned = sanitize_price_input(input);
            assert_eq!(parse_price(&cleaned), parse_price(input), "{input}");
            assert_eq!(sanitize_price_input(&cleaned), cleaned);
        }
        assert_eq!(sanitize_price_input("$1,234.567"), "1234.56");
    }

    #[test]
    fn test_validity_is_monotonic() {
        let max = Some(10_000);
        let mut last_valid = true;
        for asking in (0..20_000).step_by(250) {
            let valid = PriceCheck::new(Some(asking), max).is_valid();
            assert_eq!(valid, asking <= 10_000);
            // once invalid, never valid again at a higher price
            assert!(last_valid || !valid);
            last_valid = valid;
        }
    }

    #[test]
    fn test_no_cap_or_no_price_is_valid() {
        assert!(PriceCheck::new(Some(1_000_000), None).is_valid());
        assert!(PriceCheck::new(None, Some(100)).is_valid());
        assert_eq!(PriceCheck::new(None, Some(100)).comparison(), None);
    }

    #[test]
    fn test_comparison_and_fill() {
        let below = PriceCheck::from_input("50", Some(10_000), None);
        assert_eq!(below.comparison(), Some(Comparison::Below));
        assert_eq!(below.fill_percent(), 50);
        assert_eq!(below.message().unwrap(), "$50.00 below face value");

        let at = PriceCheck::from_input("100.00", Some(10_000), Some(5_000));
        assert_eq!(at.comparison(), Some(Comparison::AtFaceValue));
        assert_eq!(at.fill_percent(), 100);
        assert!(!at.overflows());

        let above = PriceCheck::from_input("1500", None, Some(100_000));
        assert_eq!(above.comparison(), Some(Comparison::Above));
        assert_eq!(above.fill_percent(), 100);
        assert!(above.overflows());
        assert!(!above.is_valid());
    }

    #[test]
    fn test_huge_price_saturates_and_is_above_cap() {
        assert_eq!(parse_price("99999999999999999999999"), Some(u64::MAX));
        assert_eq!(parse_price("184467440737095516.99"), Some(u64::MAX));

        let check = PriceCheck::from_input("99999999999999999999999", Some(10_000), None);
        assert!(!check.is_valid());
        assert_eq!(check.comparison(), Some(Comparison::Above));
        assert!(check.overflows());
        assert!(check.message().unwrap().ends_with("Listings above face value are rejected."));
    }

    #[test]
    fn test_ceiling_glob_matching() {
        let ceilings = vec![
            ceiling("Floor*", 25_000),
            ceiling("1*", 15_000),
            ceiling("*", 8_000),
        ];
        assert_eq!(ceiling_for_section(&ceilings, "floor a").unwrap().max_price_cents, 25_000);
        assert_eq!(ceiling_for_section(&ceilings, "112").unwrap().max_price_cents, 15_000);
        assert_eq!(ceiling_for_section(&ceilings, "Balcony").unwrap().max_price_cents, 8_000);
        assert!(ceiling_for_section(&ceilings, "  ").is_none());

        let exact = vec![ceiling("GA", 5_000), ceiling("*-Pit", 9_000)];
        assert!(ceiling_for_section(&exact, "GA2").is_none());
        assert_eq!(ceiling_for_section(&exact, "ga").unwrap().max_price_cents, 5_000);
        assert_eq!(ceiling_for_section(&exact, "North-pit").unwrap().max_price_cents, 9_000);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123_456), "$1,234.56");
        assert_eq!(format_cents(100_000_000), "$1,000,000.00");
    }
}
