use crate::config::SiteSettings;

use super::escape;

const NAV: [(&str, &str); 9] = [
    ("/", "Home"),
    ("/about/", "About"),
    ("/team/", "Our Team"),
    ("/events/", "Events"),
    ("/stories/", "Stories"),
    ("/blog/", "Blog"),
    ("/resources/", "Resources"),
    ("/contact/", "Contact"),
    ("/donate/", "Donate"),
];

/// Wrap a page body in the site chrome.
pub fn page(settings: &SiteSettings, title: &str, body: &str) -> String {
    let site_name = escape(&settings.site_name);
    let site_description = escape(&settings.site_description);

    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();

    let full_title = if title.is_empty() {
        format!("{} | {}", site_name, site_description)
    } else {
        format!("{} | {}", escape(title), site_name)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{site_description}">
    <meta name="stripe-public-key" content="{stripe_key}">
    <title>{full_title}</title>
    <link rel="stylesheet" href="/static/site.css">
</head>
<body>
    <header class="site-header">
        <a class="brand" href="/">{site_name}</a>
        <nav><ul>{nav}</ul></nav>
    </header>
    <main>
{body}
    </main>
    <footer class="site-footer">
        <section class="newsletter">
            <h2>Stay informed</h2>
            <form id="newsletter-form" method="post" action="/newsletter-subscribe/">
                <input type="email" name="email" placeholder="Your email" required>
                <input type="text" name="name" placeholder="Your name" maxlength="200">
                <button type="submit">Subscribe</button>
            </form>
            <p class="newsletter-result" aria-live="polite"></p>
        </section>
        <p>&copy; {site_name}, {site_description}</p>
    </footer>
    <script src="/static/site.js"></script>
</body>
</html>"#,
        site_description = site_description,
        stripe_key = escape(&settings.stripe_public_key),
        full_title = full_title,
        site_name = site_name,
        nav = nav,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_carries_site_context() {
        let settings = SiteSettings::for_tests();
        let html = page(&settings, "Events", "<p>body</p>");

        assert!(html.contains("<title>Events | GYWAN</title>"));
        assert!(html.contains(r#"content="pk_test_123""#));
        assert!(html.contains("Girls and Young Women&#x27;s Advocacy Network"));
        assert!(html.contains(r#"action="/newsletter-subscribe/""#));
        assert!(html.contains("<p>body</p>"));
    }
}
