//! String helpers used by models (slugs, tags) and page rendering.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^\w\s-]").expect("valid regex");
    static ref SLUG_SEPARATORS: Regex = Regex::new(r"[-\s]+").expect("valid regex");
    static ref VALID_SLUG: Regex = Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid regex");
    static ref HTML_TAG: Regex = Regex::new(r"(?s)<[^>]*>").expect("valid regex");
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Enter a valid slug consisting of letters, numbers, underscores or hyphens.")]
pub struct InvalidSlug;

/// URL slug from a title: lowercase ASCII, words joined by `-`.
///
/// Accented letters are decomposed (NFKD) and keep their base letter;
/// anything without an ASCII form is dropped.
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let cleaned = NON_SLUG_CHARS.replace_all(&ascii.to_lowercase(), "").into_owned();
    let joined = SLUG_SEPARATORS.replace_all(cleaned.trim(), "-").into_owned();
    joined.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Trimmed admin-supplied slug, `None` when blank.
pub fn clean_slug(slug: Option<&str>) -> Result<Option<String>, InvalidSlug> {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) if VALID_SLUG.is_match(slug) => Ok(Some(slug.to_string())),
        Some(_) => Err(InvalidSlug),
        None => Ok(None),
    }
}

/// The given slug when non-blank, otherwise one derived from `title`.
pub fn slug_or_title(slug: Option<&str>, title: &str) -> Result<String, InvalidSlug> {
    Ok(clean_slug(slug)?.unwrap_or_else(|| slugify(title)))
}

/// Split on `separator`; an empty value gives an empty list.
pub fn split(value: &str, separator: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(separator).map(str::to_string).collect()
}

pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Comma-separated tags, trimmed. Blank entries are dropped.
pub fn tag_list(tags: &str) -> Vec<String> {
    split(tags, ",")
        .into_iter()
        .map(|tag| trim(&tag))
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub fn strip_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Keep the first `count` words, appending " …" when anything was cut.
pub fn truncate_words(text: &str, count: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= count {
        return words.join(" ");
    }
    format!("{} …", words[..count].join(" "))
}

/// Plain-text teaser from admin-authored HTML.
pub fn truncatewords_html(html: &str, count: usize) -> String {
    truncate_words(&strip_tags(html), count)
}

/// First `count` characters, used for comment previews.
pub fn truncate_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Escape a search term for use inside `ILIKE '%…%'`.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `%term%` pattern for a non-empty search term, matched as typed.
pub fn like_pattern(query: Option<&str>) -> Option<String> {
    query
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{}%", escape_like(q)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Youth Leadership Summit 2024"), "youth-leadership-summit-2024");
    }

    #[test]
    fn slugify_drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  Girls' Rights -- Now!  "), "girls-rights-now");
        assert_eq!(slugify("A___b"), "a___b");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn slugify_keeps_base_letters_of_accented_chars() {
        assert_eq!(slugify("Café Día"), "cafe-dia");
        assert_eq!(slugify("Ngozi Ọkọnjọ"), "ngozi-okonjo");
        assert_eq!(slugify("日本 Summit"), "summit");
    }

    #[test]
    fn blank_slug_falls_back_to_title() {
        assert_eq!(slug_or_title(None, "Spring Gala").unwrap(), "spring-gala");
        assert_eq!(slug_or_title(Some("  "), "Spring Gala").unwrap(), "spring-gala");
        assert_eq!(slug_or_title(Some(" custom_2 "), "Spring Gala").unwrap(), "custom_2");
    }

    #[test]
    fn supplied_slugs_must_be_url_safe() {
        assert_eq!(clean_slug(Some("a/b")), Err(InvalidSlug));
        assert_eq!(clean_slug(Some("spring gala")), Err(InvalidSlug));
        assert_eq!(clean_slug(Some("gala-é")), Err(InvalidSlug));
        assert_eq!(slug_or_title(Some("a/b"), "Spring Gala"), Err(InvalidSlug));
        assert_eq!(clean_slug(Some("Spring-Gala_2025")), Ok(Some("Spring-Gala_2025".to_string())));
        assert_eq!(clean_slug(Some(" ")), Ok(None));
    }

    #[test]
    fn tag_list_trims_entries() {
        assert_eq!(tag_list("advocacy, education ,  health"), vec!["advocacy", "education", "health"]);
        assert!(tag_list("").is_empty());
    }

    #[test]
    fn split_empty_is_empty() {
        assert!(split("", ",").is_empty());
        assert_eq!(split("a|b", "|"), vec!["a", "b"]);
    }

    #[test]
    fn truncate_words_marks_cut() {
        assert_eq!(truncate_words("one two three four", 2), "one two …");
        assert_eq!(truncate_words("one two", 5), "one two");
    }

    #[test]
    fn truncatewords_html_strips_markup() {
        let html = "<p>Girls <strong>lead</strong> the way forward</p>";
        assert_eq!(truncatewords_html(html, 3), "Girls lead the …");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(like_pattern(Some("summit")), Some("%summit%".to_string()));
        assert_eq!(like_pattern(Some(" summit ")), Some("% summit %".to_string()));
        assert_eq!(like_pattern(Some("")), None);
        assert_eq!(like_pattern(None), None);
    }
}
