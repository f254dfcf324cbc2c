//! Well-known idea categories.

/// Categories the bundled clients offer, with their display labels.
pub const KNOWN_CATEGORIES: [(&str, &str); 4] = [
    ("meta", "Meta"),
    ("pensamento", "Pensamento"),
    ("ideia", "Ideia"),
    ("lembrete", "Lembrete"),
];

/// Display label for a stored category; unknown values read as "Outro".
pub fn category_label(category: &str) -> &'static str {
    KNOWN_CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map_or("Outro", |(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_label() {
        assert_eq!(category_label("lembrete"), "Lembrete");
    }

    #[test]
    fn unknown_category_is_other() {
        assert_eq!(category_label("shopping"), "Outro");
        assert_eq!(category_label(""), "Outro");
    }
}
