use chrono::{DateTime, Utc};

use crate::common::PageWindow;
use crate::domains::comments::Comment;

/// Escape HTML special characters for text and attribute values
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y %-I:%M %p").to_string()
}

/// `<img>` for an optional image URL
pub fn image(url: Option<&str>, alt: &str) -> String {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(url),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// Links to the non-blank social URLs
pub fn social_links(links: &[(&str, &str)]) -> String {
    let items: String = links
        .iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(label, url)| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
                escape(url),
                escape(label)
            )
        })
        .collect();

    if items.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="social-links">{}</ul>"#, items)
    }
}

/// Query string for a list page, dropping blank values.
pub fn query_string(params: &[(&str, Option<&str>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Previous/next links. `filters` (`q`, `category`) survive page changes.
pub fn pagination(path: &str, window: &PageWindow, filters: &[(&str, Option<&str>)]) -> String {
    if !window.has_other_pages() {
        return String::new();
    }

    let link = |page: i64, label: &str| {
        let page = page.to_string();
        let mut params = filters.to_vec();
        params.push(("page", Some(page.as_str())));
        format!(
            r#"<a href="{}{}">{}</a>"#,
            path,
            escape(&query_string(&params)),
            label
        )
    };

    let mut html = String::from(r#"<nav class="pagination">"#);
    if let Some(previous) = window.previous_number() {
        html.push_str(&link(1, "&laquo; first"));
        html.push_str(&link(previous, "previous"));
    }
    html.push_str(&format!(
        r#"<span class="current">Page {} of {}</span>"#,
        window.number, window.num_pages
    ));
    if let Some(next) = window.next_number() {
        html.push_str(&link(next, "next"));
        html.push_str(&link(window.num_pages, "last &raquo;"));
    }
    html.push_str("</nav>");
    html
}

pub fn comment_list(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return r#"<p class="no-comments">No comments yet.</p>"#.to_string();
    }

    let items: String = comments
        .iter()
        .map(|comment| {
            format!(
                r#"<li class="comment"><strong>{}</strong> <time>{}</time><p>{}</p></li>"#,
                escape(&comment.name),
                format_datetime(&comment.created_at),
                escape(&comment.text)
            )
        })
        .collect();

    format!(r#"<ul class="comments">{}</ul>"#, items)
}

/// Comment box on list pages: just the text.
pub fn list_comment_form(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="comment-form">
  <label for="comment">Leave a comment</label>
  <textarea id="comment" name="comment" rows="3" required></textarea>
  <button type="submit">Post comment</button>
</form>"#,
        escape(action)
    )
}

/// Comment box on detail pages: name, email and text are all required.
pub fn detail_comment_form(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="comment-form">
  <label for="name">Name</label>
  <input id="name" name="name" maxlength="100" required>
  <label for="email">Email</label>
  <input id="email" name="email" type="email" required>
  <label for="comment">Comment</label>
  <textarea id="comment" name="comment" rows="4" required></textarea>
  <button type="submit">Post comment</button>
</form>"#,
        escape(action)
    )
}

pub fn comments_section(comments: &[Comment], form: &str) -> String {
    format!(
        r#"<section class="comments-section"><h2>Recent comments</h2>{}{}</section>"#,
        comment_list(comments),
        form
    )
}

pub fn search_form(action: &str, query: Option<&str>) -> String {
    format!(
        r#"<form method="get" action="{}" class="search-form">
  <input type="search" name="q" value="{}" placeholder="Search">
  <button type="submit">Search</button>
</form>"#,
        escape(action),
        escape(query.unwrap_or(""))
    )
}

/// Field errors under an input
pub fn field_errors(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape(m)))
        .collect();
    format!(r#"<ul class="errorlist">{}</ul>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PageRequest, Paginator};

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn query_string_skips_blank_values_and_encodes() {
        assert_eq!(query_string(&[("q", None), ("page", Some(""))]), "");
        assert_eq!(
            query_string(&[("q", Some("girls & women")), ("page", Some("2"))]),
            "?q=girls%20%26%20women&page=2"
        );
    }

    #[test]
    fn pagination_keeps_filters() {
        let window = Paginator::new(25, 10).page(PageRequest::Number(2)).unwrap();
        let html = pagination("/resources/", &window, &[("category", Some("guide"))]);

        assert!(html.contains(r#"href="/resources/?category=guide&amp;page=1""#));
        assert!(html.contains(r#"href="/resources/?category=guide&amp;page=3""#));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn single_page_has_no_pagination() {
        let window = Paginator::new(3, 10).page(PageRequest::Number(1)).unwrap();
        assert_eq!(pagination("/events/", &window, &[]), "");
    }

    #[test]
    fn social_links_skip_blank_urls() {
        let html = social_links(&[("Facebook", ""), ("YouTube", "https://youtube.com/x")]);
        assert!(!html.contains("Facebook"));
        assert!(html.contains("YouTube"));
        assert_eq!(social_links(&[("Facebook", " ")]), "");
    }

    #[test]
    fn image_is_empty_without_url() {
        assert_eq!(image(None, "alt"), "");
        assert_eq!(image(Some(""), "alt"), "");
        assert!(image(Some("/media/a.png"), "A \"quote\"").contains("A &quot;quote&quot;"));
    }
}
