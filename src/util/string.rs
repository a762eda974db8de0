pub struct StringUtils {}

impl StringUtils {
    pub fn maybe_pluralize((singular, plural) : (&str, &str), qty: usize) -> String {
        format!("{}", if qty == 1 { singular } else { plural })
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural) : (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("class", "classes")), "1 class");
        assert_eq!(StringUtils::maybe_pluralize_count(3, ("class", "classes")), "3 classes");
    }
}
