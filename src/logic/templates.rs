//! Template presentation logic

/// Icon for a template card, keyed on the lowercased template name
///
/// Total over all inputs: unrecognized names get the package icon.
///
/// # Examples
/// ```
/// use sandtui::logic::templates::template_icon;
///
/// assert_eq!(template_icon("Secure"), "🔒");
/// assert_eq!(template_icon("gaming"), "📦");
/// ```
pub fn template_icon(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "minimal" => "🚀",
        "secure" => "🔒",
        "development" => "💻",
        "full" => "🌟",
        _ => "📦",
    }
}
