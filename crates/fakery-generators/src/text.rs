//! Small string helpers shared by the domain generators.

/// Title-case every whitespace-separated word, lowercasing the rest.
pub fn capitalize(sentence: &str) -> String {
    sentence
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Lowercase and drop everything but ASCII letters and digits.
///
/// Used to turn display names into dataset ids, e.g. `Mercedes-Benz` into
/// `mercedesbenz`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U'))
}

/// English plural for regular nouns.
pub fn pluralize(noun: &str) -> String {
    let lower = noun.to_ascii_lowercase();
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| lower.ends_with(end)) {
        return format!("{noun}es");
    }
    if let Some(stem) = noun.strip_suffix('y') {
        if !stem.ends_with(|c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }
    format!("{noun}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("grinning face"), "Grinning Face");
        assert_eq!(capitalize("RED heart"), "Red Heart");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan vital"), "Élan Vital");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Mercedes-Benz"), "mercedesbenz");
        assert_eq!(normalize("Land Rover"), "landrover");
        assert_eq!(normalize("BMW"), "bmw");
    }

    #[test]
    fn test_starts_with_vowel() {
        assert!(starts_with_vowel("Echo"));
        assert!(starts_with_vowel("ocean"));
        assert!(!starts_with_vowel("Shadow"));
        assert!(!starts_with_vowel(""));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Shadow"), "Shadows");
        assert_eq!(pluralize("Witch"), "Witches");
        assert_eq!(pluralize("Glass"), "Glasses");
        assert_eq!(pluralize("Memory"), "Memories");
        assert_eq!(pluralize("Key"), "Keys");
    }
}
