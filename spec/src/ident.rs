//! Identifier derivation for display names.
//!
//! Skill and role classes carry no explicit id; their RDF/XML local names are
//! derived from the display name by title-casing every word, dropping every
//! non-alphanumeric character, and fixing the case of the first character.
//!
//! ```
//! use ddat_ontology::ident::{camel_case, pascal_case};
//!
//! assert_eq!(pascal_case("user-centred design"), "UserCentredDesign");
//! assert_eq!(camel_case("Data Engineer"), "dataEngineer");
//! ```

/// Title-cases `text`: every cased character that follows an uncased one
/// (or starts the string) is upper-cased, every other cased character is
/// lower-cased. Digits and punctuation break words.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

/// Lower-first identifier (`"Data Engineer"` → `"dataEngineer"`).
///
/// Returns an empty string for a name with no alphanumeric characters.
#[must_use]
pub fn camel_case(text: &str) -> String {
    derive(text, false)
}

/// Upper-first identifier (`"Data Engineer"` → `"DataEngineer"`).
///
/// Returns an empty string for a name with no alphanumeric characters.
#[must_use]
pub fn pascal_case(text: &str) -> String {
    derive(text, true)
}

fn derive(text: &str, upper_first: bool) -> String {
    let joined: String = title_case(text)
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) if upper_first => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of `text`, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders `items` as a numbered list, one sentence per line:
/// `"1. First item. \n2. Second item. \n"`.
#[must_use]
pub fn numbered_list(items: &[String]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}. \n", index + 1, capitalize(item)));
    }
    out
}
