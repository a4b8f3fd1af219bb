//! Home, about, team, contact and donate pages.

use crate::common::FormErrors;
use crate::config::SiteSettings;
use crate::domains::contact::ContactForm;
use crate::domains::events::Event;
use crate::domains::impact::{ImpactStat, ImpactStory};
use crate::domains::resources::Resource;
use crate::domains::stories::Story;
use crate::domains::team::{Supporter, TeamMember};

use super::components::{escape, field_errors, format_date, image, social_links};
use super::layout;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We will get back to you soon.";

pub struct HomeContent<'a> {
    pub upcoming_events: &'a [Event],
    pub recent_stories: &'a [Story],
    pub recent_resources: &'a [Resource],
    pub impact_stats: &'a [ImpactStat],
}

pub fn home(settings: &SiteSettings, content: &HomeContent<'_>) -> String {
    let stats: String = content
        .impact_stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat">{}<span class="value">{}</span><span class="label">{}</span><p>{}</p></div>"#,
                image(stat.image_url.as_deref(), &stat.label),
                escape(&stat.value),
                escape(&stat.label),
                escape(&stat.description)
            )
        })
        .collect();

    let events: String = content
        .upcoming_events
        .iter()
        .map(|event| {
            format!(
                r#"<li><a href="/events/{}/">{}</a> <time>{}</time> <span>{}</span></li>"#,
                escape(&event.slug),
                escape(&event.title),
                format_date(&event.date),
                escape(&event.location)
            )
        })
        .collect();

    let stories: String = content
        .recent_stories
        .iter()
        .map(|story| {
            format!(
                r#"<li><a href="/stories/{}/">{}</a> <span>by {}</span></li>"#,
                escape(&story.slug),
                escape(&story.title),
                escape(&story.author)
            )
        })
        .collect();

    let resources: String = content
        .recent_resources
        .iter()
        .map(|resource| {
            format!(
                r#"<li><a href="{}">{}</a> <span class="category">{}</span></li>"#,
                escape(&resource.file_url),
                escape(&resource.title),
                escape(&resource.category_label())
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
    <h1>{site_name}</h1>
    <p>{site_description}</p>
    <a class="button" href="/donate/">Donate</a>
</section>
<section class="impact-stats">{stats}</section>
<section><h2>Upcoming events</h2><ul class="cards">{events}</ul></section>
<section><h2>Recent stories</h2><ul class="cards">{stories}</ul></section>
<section><h2>Latest resources</h2><ul class="cards">{resources}</ul></section>"#,
        site_name = escape(&settings.site_name),
        site_description = escape(&settings.site_description),
        stats = stats,
        events = events,
        stories = stories,
        resources = resources,
    );

    layout::page(settings, "", &body)
}

fn team_member_card(member: &TeamMember) -> String {
    format!(
        r#"<article class="team-member">{}<h3>{}</h3><p class="role">{}</p><p>{}</p>{}</article>"#,
        image(member.image_url.as_deref(), &member.name),
        escape(&member.name),
        escape(&member.role),
        escape(&member.bio),
        social_links(&[
            ("Twitter", member.twitter.as_str()),
            ("Instagram", member.instagram.as_str()),
            ("Facebook", member.facebook.as_str()),
            ("LinkedIn", member.linkedin.as_str()),
        ])
    )
}

pub fn about(settings: &SiteSettings, team_members: &[TeamMember]) -> String {
    let members: String = team_members.iter().map(team_member_card).collect();
    let body = format!(
        r#"<h1>About {}</h1>
<p>{}</p>
<section class="team"><h2>Our team</h2>{}</section>"#,
        escape(&settings.site_name),
        escape(&settings.site_description),
        members
    );
    layout::page(settings, "About", &body)
}

pub fn team(settings: &SiteSettings, team_members: &[TeamMember], supporters: &[Supporter]) -> String {
    let members: String = team_members.iter().map(team_member_card).collect();
    let supporters: String = supporters
        .iter()
        .map(|supporter| {
            format!(
                r#"<article class="supporter">{}<h3>{}</h3><p class="role">{}</p></article>"#,
                image(supporter.image_url.as_deref(), &supporter.name),
                escape(&supporter.name),
                escape(&supporter.role)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Our Team</h1>
<section class="team">{}</section>
<h2>Our Supporters</h2>
<section class="supporters">{}</section>"#,
        members, supporters
    );
    layout::page(settings, "Our Team", &body)
}

/// Contact page. `sent` shows the thank-you message after a redirect.
pub fn contact(settings: &SiteSettings, form: &ContactForm, errors: &FormErrors, sent: bool) -> String {
    let notice = if sent {
        format!(r#"<p class="message success">{}</p>"#, CONTACT_SUCCESS_MESSAGE)
    } else {
        String::new()
    };

    let body = format!(
        r#"<h1>Contact Us</h1>
{notice}
<form method="post" action="/contact/" class="contact-form">
  <label for="id_name">Name</label>
  <input id="id_name" name="name" maxlength="200" value="{name}" required>
  {name_errors}
  <label for="id_email">Email</label>
  <input id="id_email" name="email" type="email" value="{email}" required>
  {email_errors}
  <label for="id_subject">Subject</label>
  <input id="id_subject" name="subject" maxlength="200" value="{subject}" required>
  {subject_errors}
  <label for="id_message">Message</label>
  <textarea id="id_message" name="message" rows="6" required>{message}</textarea>
  {message_errors}
  <button type="submit">Send message</button>
</form>"#,
        notice = notice,
        name = escape(&form.name),
        name_errors = field_errors(errors.get("name")),
        email = escape(&form.email),
        email_errors = field_errors(errors.get("email")),
        subject = escape(&form.subject),
        subject_errors = field_errors(errors.get("subject")),
        message = escape(&form.message),
        message_errors = field_errors(errors.get("message")),
    );
    layout::page(settings, "Contact", &body)
}

pub fn donate(settings: &SiteSettings, impact_stories: &[ImpactStory]) -> String {
    let stories: String = impact_stories
        .iter()
        .map(|story| {
            format!(
                r#"<blockquote class="impact-story">{}<h3>{}</h3><p>&ldquo;{}&rdquo;</p><cite>{}</cite></blockquote>"#,
                image(Some(story.image_url.as_str()), &story.title),
                escape(&story.title),
                escape(&story.quote),
                escape(&story.location)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Support Our Work</h1>
<form id="donation-form" class="donation-form" data-stripe-key="{stripe_key}">
  <fieldset>
    <legend>Donation type</legend>
    <label><input type="radio" name="donation_type" value="one_time" checked> One-time</label>
    <label><input type="radio" name="donation_type" value="monthly"> Monthly</label>
  </fieldset>
  <label for="id_amount">Amount (USD)</label>
  <input id="id_amount" name="amount" type="number" min="1" step="0.01" required>
  <label for="id_donor_name">Name</label>
  <input id="id_donor_name" name="donor_name" maxlength="200" required>
  <label for="id_donor_email">Email</label>
  <input id="id_donor_email" name="donor_email" type="email" required>
  <label for="id_message">Message (optional)</label>
  <textarea id="id_message" name="message" rows="3"></textarea>
  <label><input type="checkbox" name="is_anonymous"> Make my donation anonymous</label>
  <div id="card-element"></div>
  <button type="submit">Donate</button>
  <p class="donation-result" aria-live="polite"></p>
</form>
<section class="impact-stories"><h2>Your impact</h2>{stories}</section>
<script src="https://js.stripe.com/v3/"></script>"#,
        stripe_key = escape(&settings.stripe_public_key),
        stories = stories,
    );
    layout::page(settings, "Donate", &body)
}
