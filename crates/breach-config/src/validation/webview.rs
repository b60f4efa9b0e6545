use crate::schema::BreachConfig;

/// A user agent ends up in an HTTP header, so it must be a single
/// printable line.
pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &BreachConfig) {
    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be blank".into());
        } else if ua.chars().any(char::is_control) {
            errors.push("webview.user_agent contains control characters".into());
        }
    }
}
