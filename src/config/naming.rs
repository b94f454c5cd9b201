//! Column name to Go identifier conversion

/// Words rendered fully upper-case in identifiers
const COMMON_INITIALISMS: &[&str] = &["api", "http", "id", "ip", "json", "sql", "url", "uuid"];

/// Convert a snake_case column name to an exported Go identifier
/// (`user_id` -> `UserID`, `created_at` -> `CreatedAt`)
pub fn to_camel_case(column: &str) -> String {
    let mut result = String::with_capacity(column.len());

    for part in column.split(|c: char| c == '_' || c == '-' || c == ' ') {
        if part.is_empty() {
            continue;
        }
        let lower = part.to_lowercase();
        if COMMON_INITIALISMS.contains(&lower.as_str()) {
            result.push_str(&lower.to_uppercase());
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    // Go identifiers cannot start with a digit
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}
