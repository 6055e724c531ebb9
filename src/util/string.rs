pub struct StringUtils {}

impl StringUtils {
    pub fn maybe_pluralize((singular, plural) : (&str, &str), qty: usize) -> String {
        format!("{}", if qty == 1 { singular } else { plural })
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural) : (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }

    /// Two-decimal money string, without currency sign: `40` -> `"40.00"`.
    pub fn money(amount: f64) -> String {
        format!("{:.2}", amount)
    }

    /// Whole amounts print bare (`"100"`), fractional ones with cents (`"100.50"`).
    pub fn compact_money(amount: f64) -> String {
        if amount.fract() == 0.0 {
            format!("{:.0}", amount)
        } else {
            Self::money(amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_count() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("supporter", "supporters")), "1 supporter");
        assert_eq!(StringUtils::maybe_pluralize_count(3, ("supporter", "supporters")), "3 supporters");
        assert_eq!(StringUtils::maybe_pluralize_count(0, ("penalty", "penalties")), "0 penalties");
    }

    #[test]
    fn test_money_formats() {
        assert_eq!(StringUtils::money(40.0), "40.00");
        assert_eq!(StringUtils::money(33.333), "33.33");
        assert_eq!(StringUtils::compact_money(110.0), "110");
        assert_eq!(StringUtils::compact_money(12.5), "12.50");
    }

    #[test]
    fn test_compact_money_keeps_large_whole_amounts() {
        assert_eq!(StringUtils::compact_money(1e20), "100000000000000000000");
        assert_eq!(StringUtils::compact_money(1e19 + 2048.0), "10000000000000002048");
    }
}
