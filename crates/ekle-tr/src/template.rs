// Placeholder substitution for `{{key}}` templates.
//
// Substitution is literal and runs before markup scanning, so a template can
// put markup right after a placeholder: "{{user}}'--dan".

/// Replace every `{{key}}` in `text` with its value.
///
/// Keys are applied in iteration order; placeholders without a value are left
/// in place.
pub fn substitute<I, K, V>(text: &str, substitutions: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = text.to_string();
    for (key, value) in substitutions {
        let placeholder = format!("{{{{{}}}}}", key.as_ref());
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, value.as_ref());
        }
    }
    out
}
