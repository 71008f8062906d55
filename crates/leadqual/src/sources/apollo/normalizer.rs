pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Dedupe key for a lead row; e-mail when present, otherwise name + company.
pub(crate) fn dedupe_key(email: Option<&str>, name: &str, company: &str) -> String {
    match email {
        Some(email) if !email.trim().is_empty() => normalize_text(email),
        _ => format!("{}@{}", normalize_text(name), normalize_text(company)),
    }
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_text(value)
}
