//! Public HTML pages.

use axum::{
    extract::{Extension, Path, Query},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::common::{FormErrors, FormSubmitError, PageRequest, Paginator, LIST_PAGE_SIZE};
use crate::domains::blog::BlogPost;
use crate::domains::comments::actions::{post_detail_comment, post_list_comment};
use crate::domains::comments::{Comment, CommentForm, CommentTarget};
use crate::domains::contact::actions::submit_contact;
use crate::domains::contact::ContactForm;
use crate::domains::events::Event;
use crate::domains::impact::{ImpactStat, ImpactStory};
use crate::domains::resources::Resource;
use crate::domains::stories::Story;
use crate::domains::team::{Supporter, TeamMember};
use crate::server::app::AppState;
use crate::server::error::PageError;
use crate::server::views::content::{self, ListContext};
use crate::server::views::pages::{self, HomeContent};

const HOME_SECTION_SIZE: i64 = 6;
const DONATE_IMPACT_STORIES: i64 = 4;
const RECENT_COMMENTS: i64 = 10;

type PageResult = Result<Html<String>, PageError>;

/// `?q=`, `?category=` and `?page=` on list pages
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    fn query(&self) -> Option<&str> {
        non_empty(self.q.as_deref())
    }

    fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    fn page_request(&self) -> Result<PageRequest, PageError> {
        Ok(PageRequest::from_query(self.page.as_deref())?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactParams {
    pub sent: Option<String>,
}

/// Query values are used as typed; only an empty one is ignored.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// Static-ish pages
// =============================================================================

pub async fn home(Extension(state): Extension<AppState>) -> PageResult {
    let pool = &state.deps.db_pool;

    let upcoming_events = Event::find_upcoming(HOME_SECTION_SIZE, pool).await?;
    let recent_stories = Story::find_latest(HOME_SECTION_SIZE, pool).await?;
    let recent_resources = Resource::find_latest(HOME_SECTION_SIZE, pool).await?;
    let impact_stats = ImpactStat::find_active(pool).await?;

    Ok(Html(pages::home(
        &state.deps.settings,
        &HomeContent {
            upcoming_events: &upcoming_events,
            recent_stories: &recent_stories,
            recent_resources: &recent_resources,
            impact_stats: &impact_stats,
        },
    )))
}

pub async fn about(Extension(state): Extension<AppState>) -> PageResult {
    let team_members = TeamMember::find_active(&state.deps.db_pool).await?;
    Ok(Html(pages::about(&state.deps.settings, &team_members)))
}

pub async fn team(Extension(state): Extension<AppState>) -> PageResult {
    let pool = &state.deps.db_pool;
    let team_members = TeamMember::find_active(pool).await?;
    let supporters = Supporter::find_active(pool).await?;
    Ok(Html(pages::team(&state.deps.settings, &team_members, &supporters)))
}

pub async fn donate(Extension(state): Extension<AppState>) -> PageResult {
    let impact_stories = ImpactStory::find_latest(DONATE_IMPACT_STORIES, &state.deps.db_pool).await?;
    Ok(Html(pages::donate(&state.deps.settings, &impact_stories)))
}

pub async fn contact_page(
    Extension(state): Extension<AppState>,
    Query(params): Query<ContactParams>,
) -> PageResult {
    let sent = params.sent.is_some();
    Ok(Html(pages::contact(
        &state.deps.settings,
        &ContactForm::default(),
        &FormErrors::new(),
        sent,
    )))
}

/// Valid submissions redirect to `/contact/?sent=1`; invalid ones re-render
/// the form with field errors.
pub async fn submit_contact_form(
    Extension(state): Extension<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, PageError> {
    match submit_contact(form.clone(), &state.deps).await {
        Ok(_) => Ok(Redirect::to("/contact/?sent=1").into_response()),
        Err(FormSubmitError::Invalid(errors)) => {
            Ok(Html(pages::contact(&state.deps.settings, &form, &errors, false)).into_response())
        }
        Err(FormSubmitError::Internal(e)) => Err(PageError::Internal(e)),
    }
}

// =============================================================================
// List pages
// =============================================================================

pub async fn event_list(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> PageResult {
    let pool = &state.deps.db_pool;
    let query = params.query();

    let total = Event::count_public(query, pool).await?;
    let window = Paginator::new(total, LIST_PAGE_SIZE).page(params.page_request()?)?;
    let events = Event::find_public_page(query, &window, pool).await?;
    let recent_comments = Comment::recent(RECENT_COMMENTS, pool).await?;

    Ok(Html(content::event_list(
        &state.deps.settings,
        &events,
        &ListContext {
            window: &window,
            query,
            recent_comments: &recent_comments,
        },
    )))
}

pub async fn story_list(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> PageResult {
    let pool = &state.deps.db_pool;
    let query = params.query();

    let total = Story::count_public(query, pool).await?;
    let window = Paginator::new(total, LIST_PAGE_SIZE).page(params.page_request()?)?;
    let stories = Story::find_public_page(query, &window, pool).await?;
    let recent_comments = Comment::recent(RECENT_COMMENTS, pool).await?;

    Ok(Html(content::story_list(
        &state.deps.settings,
        &stories,
        &ListContext {
            window: &window,
            query,
            recent_comments: &recent_comments,
        },
    )))
}

pub async fn blog_list(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> PageResult {
    let pool = &state.deps.db_pool;
    let query = params.query();

    let total = BlogPost::count_public(query, pool).await?;
    let window = Paginator::new(total, LIST_PAGE_SIZE).page(params.page_request()?)?;
    let posts = BlogPost::find_public_page(query, &window, pool).await?;
    let recent_comments = Comment::recent(RECENT_COMMENTS, pool).await?;

    Ok(Html(content::blog_list(
        &state.deps.settings,
        &posts,
        &ListContext {
            window: &window,
            query,
            recent_comments: &recent_comments,
        },
    )))
}

pub async fn resource_list(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> PageResult {
    let pool = &state.deps.db_pool;
    let category = params.category();

    let total = Resource::count_public(category, pool).await?;
    let window = Paginator::new(total, LIST_PAGE_SIZE).page(params.page_request()?)?;
    let resources = Resource::find_public_page(category, &window, pool).await?;
    let recent_comments = Comment::recent(RECENT_COMMENTS, pool).await?;

    Ok(Html(content::resource_list(
        &state.deps.settings,
        &resources,
        &ListContext {
            window: &window,
            query: category,
            recent_comments: &recent_comments,
        },
    )))
}

/// POST on any list page: an unattached comment, then back to the list.
async fn list_comment(state: &AppState, form: &CommentForm, path: &'static str) -> Result<Redirect, PageError> {
    post_list_comment(form, &state.deps).await?;
    Ok(Redirect::to(path))
}

pub async fn event_list_comment(
    Extension(state): Extension<AppState>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    list_comment(&state, &form, "/events/").await
}

pub async fn story_list_comment(
    Extension(state): Extension<AppState>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    list_comment(&state, &form, "/stories/").await
}

pub async fn blog_list_comment(
    Extension(state): Extension<AppState>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    list_comment(&state, &form, "/blog/").await
}

pub async fn resource_list_comment(
    Extension(state): Extension<AppState>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    list_comment(&state, &form, "/resources/").await
}

// =============================================================================
// Detail pages
// =============================================================================

async fn find_event(slug: &str, state: &AppState) -> Result<Event, PageError> {
    Event::find_active_by_slug(slug, &state.deps.db_pool)
        .await?
        .ok_or(PageError::NotFound)
}

async fn find_story(slug: &str, state: &AppState) -> Result<Story, PageError> {
    Story::find_active_by_slug(slug, &state.deps.db_pool)
        .await?
        .ok_or(PageError::NotFound)
}

async fn find_blog_post(slug: &str, state: &AppState) -> Result<BlogPost, PageError> {
    BlogPost::find_visible_by_slug(slug, &state.deps.db_pool)
        .await?
        .ok_or(PageError::NotFound)
}

async fn recent_comments_for(target: CommentTarget, state: &AppState) -> Result<Vec<Comment>, PageError> {
    Ok(Comment::recent_for(target, RECENT_COMMENTS, &state.deps.db_pool).await?)
}

pub async fn event_detail(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> PageResult {
    let event = find_event(&slug, &state).await?;
    let comments = recent_comments_for(event.id.into(), &state).await?;
    Ok(Html(content::event_detail(&state.deps.settings, &event, &comments)))
}

pub async fn event_detail_comment(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    let event = find_event(&slug, &state).await?;
    post_detail_comment(event.id.into(), &form, &state.deps).await?;
    Ok(Redirect::to(&format!("/events/{}/", event.slug)))
}

pub async fn story_detail(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> PageResult {
    let story = find_story(&slug, &state).await?;
    let comments = recent_comments_for(story.id.into(), &state).await?;
    Ok(Html(content::story_detail(&state.deps.settings, &story, &comments)))
}

pub async fn story_detail_comment(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    let story = find_story(&slug, &state).await?;
    post_detail_comment(story.id.into(), &form, &state.deps).await?;
    Ok(Redirect::to(&format!("/stories/{}/", story.slug)))
}

pub async fn blog_detail(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> PageResult {
    let post = find_blog_post(&slug, &state).await?;
    let comments = recent_comments_for(post.id.into(), &state).await?;
    Ok(Html(content::blog_detail(&state.deps.settings, &post, &comments)))
}

pub async fn blog_detail_comment(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, PageError> {
    let post = find_blog_post(&slug, &state).await?;
    post_detail_comment(post.id.into(), &form, &state.deps).await?;
    Ok(Redirect::to(&format!("/blog/{}/", post.slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_ignored() {
        let params = ListParams {
            q: Some("  ".to_string()),
            category: Some(String::new()),
            page: None,
        };
        assert_eq!(params.query(), None);
        assert_eq!(params.category(), None);
        assert!(matches!(params.page_request(), Ok(PageRequest::Number(1))));
    }

    #[test]
    fn non_numeric_page_is_not_found() {
        let params = ListParams {
            page: Some("two".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.page_request(), Err(PageError::NotFound)));
    }
}
