//! `{key}` placeholder substitution for log messages

use super::fields::Fields;

/// Replaces `{key}` placeholders in message templates.
///
/// The call context is merged over the default context. Each placeholder is
/// replaced by the string form of its value in a single left-to-right pass;
/// substituted text is never rescanned. Placeholders without a matching key,
/// or whose value has no string form, are left untouched.
///
/// # Example
///
/// ```
/// use rust_structured_logger::{Fields, Interpolator};
///
/// let interpolator = Interpolator::with_default_context(Fields::new().with("service", "api"));
/// let message = interpolator.interpolate(
///     "{service} handled {count} requests",
///     &Fields::new().with("count", 3),
/// );
/// assert_eq!(message, "api handled 3 requests");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    default_context: Fields,
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_context(default_context: Fields) -> Self {
        Self { default_context }
    }

    pub fn default_context(&self) -> &Fields {
        &self.default_context
    }

    /// Replace the default context entirely
    pub fn set_default_context(&mut self, default_context: Fields) {
        self.default_context = default_context;
    }

    pub fn interpolate(&self, template: &str, context: &Fields) -> String {
        let mut merged = self.default_context.clone();
        merged.merge(context);

        let mut replacements: Vec<(String, String)> = merged
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_interpolation()
                    .map(|text| (format!("{{{}}}", key), text))
            })
            .collect();
        if replacements.is_empty() {
            return template.to_string();
        }
        // Longest placeholder wins when several match at the same position
        replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut output = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            output.push_str(&rest[..start]);
            rest = &rest[start..];
            match replacements
                .iter()
                .find(|(placeholder, _)| rest.starts_with(placeholder.as_str()))
            {
                Some((placeholder, text)) => {
                    output.push_str(text);
                    rest = &rest[placeholder.len()..];
                }
                None => {
                    output.push('{');
                    rest = &rest[1..];
                }
            }
        }
        output.push_str(rest);
        output
    }
}
