/// Uppercase the first character if it is an ASCII letter.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Uppercase the first character, including non-ASCII letters.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize every space-separated word; spacing is preserved as-is.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}
