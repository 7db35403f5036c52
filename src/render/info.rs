use crate::model::Event;

/// Values that stand for "nothing" when they come out of a query.
fn is_blank(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || ["none", "null", "nan", "nat"].iter().any(|n| v.eq_ignore_ascii_case(n))
}

/// Join the event's non-blank `fields`, in the given order, with `separator`.
/// This is both the hover tooltip and the text shown on click.
pub fn info_text(event: &Event, fields: &[String], separator: &str) -> String {
    fields
        .iter()
        .filter_map(|name| event.field(name))
        .map(str::trim)
        .filter(|v| !is_blank(v))
        .collect::<Vec<_>>()
        .join(separator)
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
