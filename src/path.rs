/// Reports whether `path` is present and a well-formed relative path.
///
/// Accepted paths are `/`-separated segments built from unreserved characters,
/// sub-delimiters, `@` and `%XX` escapes. Leading `/`, `:`, `\`, `?`, `#`,
/// whitespace and control characters are rejected. `.` and `..` segments are allowed.
pub fn is_valid_relative_path(path: Option<&str>) -> bool {
    let Some(path) = path else {
        return false;
    };

    if path.is_empty() || path.starts_with('/') {
        return false;
    }

    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let escaped = chars.next().zip(chars.next());
            match escaped {
                Some((hi, lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => continue,
                _ => return false,
            }
        }

        if !is_path_char(c) {
            return false;
        }
    }

    true
}

/// Reports whether every candidate is a valid relative path.
pub fn are_valid_relative_paths<'a, I>(paths: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    paths.into_iter().all(is_valid_relative_path)
}

fn is_path_char(c: char) -> bool {
    match c {
        '/' => true,
        '-' | '.' | '_' | '~' => true,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '@' => true,
        c if c.is_ascii() => c.is_ascii_alphanumeric(),
        c => c.is_alphanumeric(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_relative_paths() {
        assert!(is_valid_relative_path(Some("notes.txt")));
        assert!(is_valid_relative_path(Some("logs/app.log")));
        assert!(is_valid_relative_path(Some("log")));
        assert!(is_valid_relative_path(Some("./here")));
        assert!(is_valid_relative_path(Some("../escape")));
        assert!(is_valid_relative_path(Some("with%20space.log")));
        assert!(is_valid_relative_path(Some("journal-2026_10~(a).log")));
        assert!(is_valid_relative_path(Some("données.log")));
    }

    #[test]
    fn test_rejects_missing_and_empty() {
        assert!(!is_valid_relative_path(None));
        assert!(!is_valid_relative_path(Some("")));
    }

    #[test]
    fn test_rejects_absolute_and_scheme_paths() {
        assert!(!is_valid_relative_path(Some("/escape")));
        assert!(!is_valid_relative_path(Some("//host/share")));
        assert!(!is_valid_relative_path(Some("C:/escape")));
        assert!(!is_valid_relative_path(Some("file:notes.txt")));
        assert!(!is_valid_relative_path(Some("http://example.com/log")));
        assert!(!is_valid_relative_path(Some("..\\escape")));
    }

    #[test]
    fn test_rejects_malformed_characters() {
        assert!(!is_valid_relative_path(Some("my notes.txt")));
        assert!(!is_valid_relative_path(Some("tab\there")));
        assert!(!is_valid_relative_path(Some("line\nbreak")));
        assert!(!is_valid_relative_path(Some("query?x=1")));
        assert!(!is_valid_relative_path(Some("frag#1")));
        assert!(!is_valid_relative_path(Some("bad%2")));
        assert!(!is_valid_relative_path(Some("bad%zz")));
        assert!(!is_valid_relative_path(Some("a<b>.log")));
    }

    #[test]
    fn test_multiple_paths() {
        assert!(are_valid_relative_paths([Some("a.log"), Some("meta_log")]));
        assert!(!are_valid_relative_paths([Some("a.log"), None]));
        assert!(!are_valid_relative_paths([Some("a.log"), Some("/b.log")]));
        assert!(are_valid_relative_paths(std::iter::empty()));
    }
}
