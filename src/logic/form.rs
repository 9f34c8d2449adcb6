//! Create-form parsing rules
//!
//! Pure functions that turn raw form input into payload values.

use crate::api::MappedFolder;

pub const NETWORKING_VALUES: &[&str] = &["Default", "Disable"];
pub const VGPU_VALUES: &[&str] = &["Default", "Disable"];
pub const AUDIO_INPUT_VALUES: &[&str] = &["Default", "Enable", "Disable"];
pub const VIDEO_INPUT_VALUES: &[&str] = &["Default", "Enable", "Disable"];
pub const REDIRECTION_VALUES: &[&str] = &["Enable", "Disable"];

pub const DEFAULT_MEMORY_MB: &str = "4096";

/// Parse the memory field the way an integer-prefix parse does
///
/// Leading whitespace and one sign are allowed, then as many digits as
/// follow. No digits means "not a number", returned as `None` and sent to
/// the backend unchanged; there is no range check on this side.
///
/// # Examples
/// ```
/// use sandtui::logic::form::parse_memory;
///
/// assert_eq!(parse_memory("4096"), Some(4096));
/// assert_eq!(parse_memory(" 512MB"), Some(512));
/// assert_eq!(parse_memory("lots"), None);
/// ```
pub fn parse_memory(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Build the `mapped_folders` payload from form rows in display order
///
/// Paths are trimmed; rows whose path is empty are dropped silently.
pub fn collect_mapped_folders<'a, I>(rows: I) -> Vec<MappedFolder>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    rows.into_iter()
        .filter_map(|(path, readonly)| {
            let path = path.trim();
            if path.is_empty() {
                None
            } else {
                Some(MappedFolder {
                    path: path.to_string(),
                    readonly,
                })
            }
        })
        .collect()
}

/// Index of `value` among `options`, falling back to the first option
pub fn option_index(options: &[&str], value: &str) -> usize {
    options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(value))
        .unwrap_or(0)
}

/// Step through `options` with wrap-around
pub fn cycle_option(len: usize, index: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_plain() {
        assert_eq!(parse_memory("4096"), Some(4096));
        assert_eq!(parse_memory("0"), Some(0));
    }

    #[test]
    fn test_parse_memory_prefix_and_sign() {
        assert_eq!(parse_memory("  2048  "), Some(2048));
        assert_eq!(parse_memory("1024.5"), Some(1024));
        assert_eq!(parse_memory("-256"), Some(-256));
        assert_eq!(parse_memory("+128"), Some(128));
    }

    #[test]
    fn test_parse_memory_not_a_number() {
        assert_eq!(parse_memory(""), None);
        assert_eq!(parse_memory("   "), None);
        assert_eq!(parse_memory("abc"), None);
        assert_eq!(parse_memory("-"), None);
        assert_eq!(parse_memory("MB512"), None);
    }

    #[test]
    fn test_parse_memory_overflow_is_not_a_number() {
        assert_eq!(parse_memory("99999999999999999999999"), None);
    }

    #[test]
    fn test_collect_drops_empty_paths() {
        let folders = collect_mapped_folders(vec![("C:\\data", true), ("", false)]);
        assert_eq!(
            folders,
            vec![MappedFolder {
                path: "C:\\data".to_string(),
                readonly: true
            }]
        );
    }

    #[test]
    fn test_collect_trims_and_keeps_order() {
        let folders =
            collect_mapped_folders(vec![("  D:\\b ", false), ("   ", true), ("C:\\a", true)]);
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].path, "D:\\b");
        assert!(!folders[0].readonly);
        assert_eq!(folders[1].path, "C:\\a");
    }

    #[test]
    fn test_option_index_fallback() {
        assert_eq!(option_index(AUDIO_INPUT_VALUES, "Disable"), 2);
        assert_eq!(option_index(AUDIO_INPUT_VALUES, "enable"), 1);
        assert_eq!(option_index(REDIRECTION_VALUES, "Sometimes"), 0);
    }

    #[test]
    fn test_cycle_option_wraps() {
        assert_eq!(cycle_option(3, 2, true), 0);
        assert_eq!(cycle_option(3, 0, false), 2);
        assert_eq!(cycle_option(2, 0, true), 1);
        assert_eq!(cycle_option(0, 0, true), 0);
    }
}
