use log::trace;

use super::choice::ChoiceSource;

/// Resolve a raw template into a comma-joined tag string.
///
/// One choice is drawn from `rng` per wildcard group that has at least one
/// non-empty option.
pub fn resolve<C: ChoiceSource + ?Sized>(template: &str, rng: &mut C) -> String {
    if template.trim().is_empty() {
        return String::new();
    }

    let lines = non_blank_lines(template);
    let resolved = if is_multiline_group(&lines) {
        resolve_group(&lines, rng)
    } else {
        resolve_standard(&lines, rng)
    };
    trace!("Resolved template {:?} -> {:?}", template, resolved);
    resolved
}

/// True when every line but at most one ends with `|`.
///
/// A template like
///
/// ```text
/// red |
/// blue |
/// green
/// ```
///
/// is a single alternative set, so it resolves to one colour rather than
/// three tags.
pub fn is_multiline_group(lines: &[&str]) -> bool {
    let pipe_endings = lines.iter().filter(|line| line.ends_with('|')).count();
    pipe_endings > 0 && pipe_endings + 1 >= lines.len()
}

pub(super) fn non_blank_lines(template: &str) -> Vec<&str> {
    template
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub(super) fn split_options(group: &str) -> Vec<&str> {
    group
        .split('|')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .collect()
}

pub(super) fn pick_one<'a, C: ChoiceSource + ?Sized>(
    options: &[&'a str],
    rng: &mut C,
) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    options.get(rng.pick(options.len())).copied()
}

fn resolve_group<C: ChoiceSource + ?Sized>(lines: &[&str], rng: &mut C) -> String {
    let joined = lines
        .iter()
        .map(|line| line.trim_end_matches(&['|', ','][..]).trim())
        .collect::<Vec<_>>()
        .join(" | ");
    pick_one(&split_options(&joined), rng)
        .unwrap_or_default()
        .to_string()
}

fn resolve_standard<C: ChoiceSource + ?Sized>(lines: &[&str], rng: &mut C) -> String {
    let joined = lines.join(" ");
    let mut parts = Vec::new();
    for part in joined.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if part.contains('|') {
            // A group with no surviving options drops out entirely.
            if let Some(choice) = pick_one(&split_options(part), rng) {
                parts.push(choice);
            }
        } else {
            parts.push(part);
        }
    }
    parts.join(", ")
}
