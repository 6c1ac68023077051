use relay_core::config::SanitizationPolicy;

use crate::patterns;

/// Standardizes names and values for the backend.
///
/// Holds only the immutable policy it was built with, so a single instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NameValueSanitizer {
    policy: SanitizationPolicy,
}

impl NameValueSanitizer {
    pub fn new(policy: SanitizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SanitizationPolicy {
        &self.policy
    }

    /// Standardize an event name (`is_event`) or a user attribute name.
    ///
    /// Disallowed characters are stripped, whitespace runs become `_`, each
    /// forbidden prefix is removed once (in policy order), leading
    /// non-letters are dropped, and the result is cut to the context's
    /// maximum length. The result may be empty.
    pub fn standardize_name(&self, raw: &str, is_event: bool) -> String {
        let stripped = patterns::strip_disallowed(raw);
        let collapsed = patterns::collapse_whitespace(&stripped);

        let mut name: &str = &collapsed;
        for prefix in &self.policy.forbidden_prefixes {
            if let Some(rest) = name.strip_prefix(prefix.as_str()) {
                name = rest;
            }
        }

        let name = name.trim_start_matches(|c: char| !c.is_ascii_alphabetic());
        truncate_chars(name, self.policy.name_max_len(is_event)).to_string()
    }

    /// Absent in, absent out.
    pub fn standardize_name_opt(&self, raw: Option<&str>, is_event: bool) -> Option<String> {
        raw.map(|raw| self.standardize_name(raw, is_event))
    }

    /// Values are passed through unchanged apart from truncation.
    pub fn standardize_value(&self, raw: &str, is_event: bool) -> String {
        truncate_chars(raw, self.policy.value_max_len(is_event)).to_string()
    }

    pub fn standardize_value_opt(&self, raw: Option<&str>, is_event: bool) -> Option<String> {
        raw.map(|raw| self.standardize_value(raw, is_event))
    }

    /// Standardize every key and value of an attribute map. Entries whose
    /// key standardizes to the empty string are dropped. Distinct keys may
    /// collide after standardization; callers writing the pairs in order
    /// get last-write-wins.
    pub fn standardize_attributes<'a, I>(&self, attributes: I, is_event: bool) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        attributes
            .into_iter()
            .filter_map(|(key, value)| {
                let key = self.standardize_name(key, is_event);
                if key.is_empty() {
                    return None;
                }
                Some((key, self.standardize_value(value, is_event)))
            })
            .collect()
    }
}

/// Longest prefix of `s` with at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
