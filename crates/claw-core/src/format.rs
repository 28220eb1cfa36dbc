//! Small text helpers shared by narration and payment messages.

/// Round half up, matching how the arena has always rounded stats and damage.
#[inline]
pub fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`).
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shorten a wallet address to `0x1234...abcd`.
///
/// Addresses of ten characters or fewer are returned unchanged.
pub fn short_wallet(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Percentage of `hp` out of `max`, rounded to a whole number.
pub fn percent(hp: i32, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    round_half_up(hp as f64 / max as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(42.5), 43);
        assert_eq!(round_half_up(42.49), 42);
        assert_eq!(round_half_up(0.8), 1);
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(250_000_000), "250,000,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_short_wallet() {
        assert_eq!(
            short_wallet("0x8725f5479322e952f63b9611FED6ef36B61E4e02"),
            "0x8725...4e02"
        );
        assert_eq!(short_wallet("0xabc"), "0xabc");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(40, 100), 40);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(5, 0), 0);
    }
}
