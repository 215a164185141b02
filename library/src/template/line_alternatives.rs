use super::choice::ChoiceSource;
use super::resolver::{non_blank_lines, pick_one, split_options};

/// Resolver used by the template-only node.
///
/// Each line is an alternative unless it ends with `,`, so
///
/// ```text
/// red
/// blue,
/// smiling
/// frowning
/// ```
///
/// resolves to one of `red`/`blue` followed by one of `smiling`/`frowning`.
pub fn resolve_line_alternatives<C: ChoiceSource + ?Sized>(template: &str, rng: &mut C) -> String {
    if template.trim().is_empty() {
        return String::new();
    }

    let marked: Vec<String> = non_blank_lines(template)
        .into_iter()
        .map(|line| {
            if line.ends_with(',') || line.ends_with('|') {
                line.to_string()
            } else {
                format!("{} |", line)
            }
        })
        .collect();

    let mut joined = marked.join(" ");
    while joined.contains(" | |") {
        joined = joined.replace(" | |", " |");
    }

    let mut parts = Vec::new();
    for part in joined.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let part = part.trim_end_matches('|').trim();
        if part.contains('|') {
            if let Some(choice) = pick_one(&split_options(part), rng) {
                parts.push(choice);
            }
        } else if !part.is_empty() {
            parts.push(part);
        }
    }
    parts.join(", ")
}
