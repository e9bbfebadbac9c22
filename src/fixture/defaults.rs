//! Shared rules for computing default field values.

use std::sync::atomic::{AtomicU64, Ordering};

/// Number of placeholder options given to option-bearing entities built without any.
pub const PLACEHOLDER_OPTION_COUNT: usize = 5;

/// Counter for generating unique codes and identifiers.
static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique sequence value.
///
/// Used for default codes and identifiers so that several entities built with defaults
/// in one test never collide.
pub fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::SeqCst)
}

/// Turns a code or slug into a display label.
///
/// Underscores and dashes become spaces and each word starts with an uppercase
/// letter: `tdd_attribute` becomes `Tdd Attribute`, `tdd-page` becomes `Tdd Page`.
pub fn humanize(code: &str) -> String {
    code.split(['_', '-'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Turns a label into a URL key.
///
/// Lowercases, collapses every run of non-alphanumeric characters into one dash and
/// trims dashes from both ends: `Top Level Category` becomes `top-level-category`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Labels of the placeholder options: `Option 1` through `Option 5`.
pub fn placeholder_options() -> Vec<String> {
    (1..=PLACEHOLDER_OPTION_COUNT)
        .map(|n| format!("Option {}", n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_codes() {
        assert_eq!(humanize("tdd_attribute"), "Tdd Attribute");
        assert_eq!(humanize("tdd-page"), "Tdd Page");
        assert_eq!(humanize("single"), "Single");
    }

    #[test]
    fn humanize_keeps_rest_of_word() {
        assert_eq!(humanize("sku_ID"), "Sku ID");
    }

    #[test]
    fn slugifies_labels() {
        assert_eq!(slugify("Top Level Category"), "top-level-category");
        assert_eq!(slugify("  Men's  Shoes & Boots! "), "men-s-shoes-boots");
    }

    #[test]
    fn five_placeholder_options() {
        let options = placeholder_options();

        assert_eq!(options.len(), PLACEHOLDER_OPTION_COUNT);
        assert_eq!(options[0], "Option 1");
        assert_eq!(options[4], "Option 5");
    }

    #[test]
    fn sequence_is_monotonic() {
        let a = next_sequence();
        let b = next_sequence();

        assert!(b > a);
    }
}
