/// Upper-cases the first letter of every whitespace separated word and keeps
/// the rest as is, e.g. "green apple" -> "Green Apple".
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Shortest natural rendering of a number: `14.0` prints as `14`, `0.3` as `0.3`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

pub fn format_price_per_kg(price: f64) -> String {
    format!("${:.2}/kg", price)
}
