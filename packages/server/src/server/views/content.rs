//! Events, stories, blog and resources: paginated lists and detail pages.

use crate::common::utils::{truncate_words, truncatewords_html};
use crate::common::PageWindow;
use crate::config::SiteSettings;
use crate::domains::blog::BlogPost;
use crate::domains::comments::Comment;
use crate::domains::events::Event;
use crate::domains::resources::{Resource, ResourceCategory};
use crate::domains::stories::Story;

use super::components::{
    comments_section, detail_comment_form, escape, format_date, format_datetime, image,
    list_comment_form, pagination, search_form, social_links,
};
use super::layout;

const SUMMARY_WORDS: usize = 30;

/// What every list page shows besides its rows
pub struct ListContext<'a> {
    pub window: &'a PageWindow,
    pub query: Option<&'a str>,
    pub recent_comments: &'a [Comment],
}

#[allow(clippy::too_many_arguments)]
fn list_page(
    settings: &SiteSettings,
    title: &str,
    path: &str,
    header: &str,
    items: String,
    empty_message: &str,
    list: &ListContext<'_>,
    filters: &[(&str, Option<&str>)],
) -> String {
    let items = if items.is_empty() {
        format!(r#"<p class="empty">{}</p>"#, empty_message)
    } else {
        items
    };

    let body = format!(
        r#"<h1>{}</h1>
{}
<section class="list">{}</section>
{}
{}"#,
        escape(title),
        header,
        items,
        pagination(path, list.window, filters),
        comments_section(list.recent_comments, &list_comment_form(path))
    );
    layout::page(settings, title, &body)
}

pub fn event_list(settings: &SiteSettings, events: &[Event], list: &ListContext<'_>) -> String {
    let items: String = events
        .iter()
        .map(|event| {
            format!(
                r#"<article class="card">{}<h2><a href="/events/{}/">{}</a></h2><p class="meta"><time>{}</time> &middot; {}</p><p>{}</p></article>"#,
                image(event.image_url.as_deref(), &event.title),
                escape(&event.slug),
                escape(&event.title),
                format_datetime(&event.date),
                escape(&event.location),
                escape(&truncatewords_html(&event.description, SUMMARY_WORDS))
            )
        })
        .collect();

    list_page(
        settings,
        "Events",
        "/events/",
        &search_form("/events/", list.query),
        items,
        "No events found.",
        list,
        &[("q", list.query)],
    )
}

pub fn event_detail(settings: &SiteSettings, event: &Event, comments: &[Comment]) -> String {
    let path = format!("/events/{}/", event.slug);
    let registration = if event.registration_url.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<p><a class="button" href="{}" target="_blank" rel="noopener">Register</a></p>"#,
            escape(&event.registration_url)
        )
    };

    let body = format!(
        r#"<article class="event">
{image}
<h1>{title}</h1>
<p class="meta"><time>{date}</time> &middot; {location}</p>
<div class="content">{description}</div>
{registration}
{social}
</article>
{comments}"#,
        image = image(event.image_url.as_deref(), &event.title),
        title = escape(&event.title),
        date = format_datetime(&event.date),
        location = escape(&event.location),
        description = event.description,
        registration = registration,
        social = social_links(&[
            ("Facebook", event.facebook_url.as_str()),
            ("Instagram", event.instagram_url.as_str()),
            ("YouTube", event.youtube_url.as_str()),
            ("Twitter", event.twitter_url.as_str()),
        ]),
        comments = comments_section(comments, &detail_comment_form(&path)),
    );
    layout::page(settings, &event.title, &body)
}

pub fn story_list(settings: &SiteSettings, stories: &[Story], list: &ListContext<'_>) -> String {
    let items: String = stories
        .iter()
        .map(|story| {
            format!(
                r#"<article class="card">{}<h2><a href="/stories/{}/">{}</a></h2><p class="meta">by {} &middot; {}</p><p>{}</p></article>"#,
                image(story.image_url.as_deref(), &story.title),
                escape(&story.slug),
                escape(&story.title),
                escape(&story.author),
                format_date(&story.created_at),
                escape(&truncatewords_html(&story.content, SUMMARY_WORDS))
            )
        })
        .collect();

    list_page(
        settings,
        "Stories",
        "/stories/",
        &search_form("/stories/", list.query),
        items,
        "No stories found.",
        list,
        &[("q", list.query)],
    )
}

pub fn story_detail(settings: &SiteSettings, story: &Story, comments: &[Comment]) -> String {
    let path = format!("/stories/{}/", story.slug);
    let location = if story.location.is_empty() {
        String::new()
    } else {
        format!(" &middot; {}", escape(&story.location))
    };

    let body = format!(
        r#"<article class="story">
{image}
<h1>{title}</h1>
<p class="meta">by {author}{location} &middot; {date}</p>
<div class="content">{content}</div>
{social}
</article>
{comments}"#,
        image = image(story.image_url.as_deref(), &story.title),
        title = escape(&story.title),
        author = escape(&story.author),
        location = location,
        date = format_date(&story.created_at),
        content = story.content,
        social = social_links(&[
            ("Facebook", story.facebook_url.as_str()),
            ("Instagram", story.instagram_url.as_str()),
            ("YouTube", story.youtube_url.as_str()),
            ("Twitter", story.twitter_url.as_str()),
        ]),
        comments = comments_section(comments, &detail_comment_form(&path)),
    );
    layout::page(settings, &story.title, &body)
}

fn tag_badges(post: &BlogPost) -> String {
    let tags: String = post
        .tags_list()
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .collect();
    if tags.is_empty() {
        tags
    } else {
        format!(r#"<p class="tags">{}</p>"#, tags)
    }
}

pub fn blog_list(settings: &SiteSettings, posts: &[BlogPost], list: &ListContext<'_>) -> String {
    let items: String = posts
        .iter()
        .map(|post| {
            let summary = if post.excerpt.trim().is_empty() {
                truncatewords_html(&post.content, SUMMARY_WORDS)
            } else {
                truncate_words(&post.excerpt, SUMMARY_WORDS)
            };
            format!(
                r#"<article class="card">{}<h2><a href="/blog/{}/">{}</a></h2><p class="meta">by {} &middot; {}</p><p>{}</p>{}</article>"#,
                image(post.image_url.as_deref(), &post.title),
                escape(&post.slug),
                escape(&post.title),
                escape(&post.author),
                format_date(&post.created_at),
                escape(&summary),
                tag_badges(post)
            )
        })
        .collect();

    list_page(
        settings,
        "Blog",
        "/blog/",
        &search_form("/blog/", list.query),
        items,
        "No posts found.",
        list,
        &[("q", list.query)],
    )
}

pub fn blog_detail(settings: &SiteSettings, post: &BlogPost, comments: &[Comment]) -> String {
    let path = format!("/blog/{}/", post.slug);
    let body = format!(
        r#"<article class="blog-post">
{image}
<h1>{title}</h1>
<p class="meta">by {author} &middot; {date}</p>
{tags}
<div class="content">{content}</div>
{social}
</article>
{comments}"#,
        image = image(post.image_url.as_deref(), &post.title),
        title = escape(&post.title),
        author = escape(&post.author),
        date = format_date(&post.created_at),
        tags = tag_badges(post),
        content = post.content,
        social = social_links(&[
            ("Facebook", post.facebook_url.as_str()),
            ("Instagram", post.instagram_url.as_str()),
            ("YouTube", post.youtube_url.as_str()),
            ("Twitter", post.twitter_url.as_str()),
        ]),
        comments = comments_section(comments, &detail_comment_form(&path)),
    );
    layout::page(settings, &post.title, &body)
}

fn category_filter(selected: Option<&str>) -> String {
    let mut links = vec![format!(
        r#"<a href="/resources/"{}>All</a>"#,
        if selected.is_none() { r#" class="active""# } else { "" }
    )];
    links.extend(ResourceCategory::ALL.iter().map(|category| {
        let value = category.to_string();
        format!(
            r#"<a href="/resources/?category={}"{}>{}</a>"#,
            value,
            if selected == Some(value.as_str()) {
                r#" class="active""#
            } else {
                ""
            },
            category.label()
        )
    }));
    format!(r#"<nav class="category-filter">{}</nav>"#, links.join(" "))
}

/// Resources list. `list.query` carries the selected category.
pub fn resource_list(settings: &SiteSettings, resources: &[Resource], list: &ListContext<'_>) -> String {
    let items: String = resources
        .iter()
        .map(|resource| {
            format!(
                r#"<article class="card resource">{}<h2>{}</h2><p class="meta">{} &middot; <span class="download-count">{}</span> downloads</p><p>{}</p><a class="button download" href="{}" data-resource-id="{}" target="_blank" rel="noopener">Download</a></article>"#,
                image(resource.image_url.as_deref(), &resource.title),
                escape(&resource.title),
                escape(&resource.category_label()),
                resource.download_count,
                escape(&resource.description),
                escape(&resource.file_url),
                resource.id
            )
        })
        .collect();

    list_page(
        settings,
        "Resources",
        "/resources/",
        &category_filter(list.query),
        items,
        "No resources found.",
        list,
        &[("category", list.query)],
    )
}
