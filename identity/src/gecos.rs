//! GECOS field semantics.
//!
//! The fifth field of a passwd record holds comma-separated subfields; the
//! first is the account's full name, the rest office and phone data. Within
//! the name, `&` stands for the login with its first letter capitalized.

/// Extracts the full name from a raw GECOS field.
///
/// Keeps only the first comma-delimited subfield, expands `&` to the
/// capitalized login, collapses whitespace runs to single spaces, and trims.
/// Returns `None` when nothing usable remains: an account with an empty
/// full-name field must fail resolution, not author a report as "".
pub(crate) fn full_name(gecos: &str, login: &str) -> Option<String> {
    let name_field = gecos.split_once(',').map_or(gecos, |(name, _)| name);
    let expanded = expand_login_marker(name_field, login);
    let collapsed = expanded.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

fn expand_login_marker(name: &str, login: &str) -> String {
    if !name.contains('&') {
        return name.to_string();
    }
    name.replace('&', &capitalize_first(login))
}

fn capitalize_first(login: &str) -> String {
    let mut chars = login.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
