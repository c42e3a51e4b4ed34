//! Case conversions shared by file-name and class-name derivation.
//!
//! All conversions run through one word splitter so that kebab, camel, and
//! pascal renderings of the same input always agree on word boundaries.

/// Split a name into words.
///
/// Boundaries: any non-alphanumeric character, a lowercase-to-uppercase
/// transition, the end of an uppercase acronym followed by a capitalized
/// word ("HTTPServer" -> "HTTP", "Server"), and letter/digit transitions
/// ("order2" -> "order", "2").
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(last) = current.chars().last() {
            let case_boundary = last.is_lowercase() && c.is_uppercase();
            let digit_boundary = last.is_numeric() != c.is_numeric();
            if case_boundary || digit_boundary {
                words.push(std::mem::take(&mut current));
            } else if last.is_uppercase() && c.is_lowercase() && current.chars().count() > 1 {
                // The final capital of an acronym run starts the next word.
                let split = current.len() - last.len_utf8();
                let tail = current.split_off(split);
                words.push(std::mem::take(&mut current));
                current = tail;
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "customerOrder" -> "customer-order")
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a string to camelCase (e.g., "customer order" -> "customerOrder")
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    for (i, word) in words(s).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            result.push_str(&lower);
        } else {
            result.push_str(&capitalize(&lower));
        }
    }
    result
}

/// Convert a string to PascalCase (e.g., "customer order" -> "CustomerOrder")
pub fn to_pascal_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect()
}
