//! GraphQL schema definition (admin interface).
//!
//! Every field except `adminLogin` requires an admin JWT.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, GraphQLEnum, RootNode};
use tracing::info;

use crate::common::{AdminFilter, Id};

// Domain actions
use crate::domains::auth::actions as auth_actions;

// Domain data types (GraphQL types)
use crate::domains::blog::{BlogPostData, CreateBlogPostInput, UpdateBlogPostInput};
use crate::domains::comments::CommentData;
use crate::domains::contact::ContactData;
use crate::domains::donations::DonationData;
use crate::domains::events::{CreateEventInput, EventData, UpdateEventInput};
use crate::domains::impact::{
    CreateImpactStatInput, CreateImpactStoryInput, ImpactStatData, ImpactStoryData,
    UpdateImpactStatInput, UpdateImpactStoryInput,
};
use crate::domains::newsletter::NewsletterData;
use crate::domains::resources::{CreateResourceInput, ResourceData, UpdateResourceInput};
use crate::domains::stories::{CreateStoryInput, StoryData, UpdateStoryInput};
use crate::domains::team::{
    CreateSupporterInput, CreateTeamMemberInput, SupporterData, TeamMemberData,
    UpdateSupporterInput, UpdateTeamMemberInput,
};

// Domain models
use crate::domains::blog::BlogPost;
use crate::domains::comments::{Comment, CommentableType};
use crate::domains::contact::Contact;
use crate::domains::donations::Donation;
use crate::domains::events::Event;
use crate::domains::impact::{ImpactStat, ImpactStory};
use crate::domains::newsletter::Newsletter;
use crate::domains::resources::{CreateResource, Resource, UpdateResource};
use crate::domains::stories::Story;
use crate::domains::team::{Supporter, TeamMember};

/// Record types the admin can delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum RecordKind {
    Event,
    Story,
    BlogPost,
    Resource,
    TeamMember,
    Supporter,
    ImpactStat,
    ImpactStory,
    Donation,
    Contact,
    Newsletter,
    Comment,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Convert anyhow::Error to juniper FieldError for thin resolvers
fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

fn parse_id<T>(id: &str) -> FieldResult<Id<T>> {
    Id::parse(id).map_err(|_| FieldError::new("Invalid id", juniper::Value::null()))
}

fn filter(
    search: Option<String>,
    is_active: Option<bool>,
    flag: Option<bool>,
    kind: Option<String>,
) -> AdminFilter {
    AdminFilter {
        search,
        is_active,
        flag,
        kind,
    }
}

fn into_data<M, D: From<M>>(records: Vec<M>) -> Vec<D> {
    records.into_iter().map(D::from).collect()
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Content
    // =========================================================================

    /// Events, newest date first
    async fn events(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        featured: Option<bool>,
    ) -> FieldResult<Vec<EventData>> {
        ctx.require_admin()?;
        let events = Event::find_for_admin(&filter(search, is_active, featured, None), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(events))
    }

    async fn event(ctx: &GraphQLContext, id: String) -> FieldResult<Option<EventData>> {
        ctx.require_admin()?;
        let event = Event::find_by_id(parse_id(&id)?, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(event.map(EventData::from))
    }

    async fn stories(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        featured: Option<bool>,
    ) -> FieldResult<Vec<StoryData>> {
        ctx.require_admin()?;
        let stories = Story::find_for_admin(&filter(search, is_active, featured, None), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(stories))
    }

    async fn story(ctx: &GraphQLContext, id: String) -> FieldResult<Option<StoryData>> {
        ctx.require_admin()?;
        let story = Story::find_by_id(parse_id(&id)?, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(story.map(StoryData::from))
    }

    /// Blog posts, including unpublished drafts
    async fn blog_posts(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        published: Option<bool>,
    ) -> FieldResult<Vec<BlogPostData>> {
        ctx.require_admin()?;
        let posts =
            BlogPost::find_for_admin(&filter(search, is_active, published, None), ctx.db_pool())
                .await
                .map_err(to_field_error)?;
        Ok(into_data(posts))
    }

    async fn blog_post(ctx: &GraphQLContext, id: String) -> FieldResult<Option<BlogPostData>> {
        ctx.require_admin()?;
        let post = BlogPost::find_by_id(parse_id(&id)?, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(post.map(BlogPostData::from))
    }

    async fn resources(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        featured: Option<bool>,
        category: Option<String>,
    ) -> FieldResult<Vec<ResourceData>> {
        ctx.require_admin()?;
        let resources = Resource::find_for_admin(
            &filter(search, is_active, featured, category),
            ctx.db_pool(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(into_data(resources))
    }

    async fn resource(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ResourceData>> {
        ctx.require_admin()?;
        let resource = Resource::find_by_id(parse_id(&id)?, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(resource.map(ResourceData::from))
    }

    // =========================================================================
    // People and impact
    // =========================================================================

    async fn team_members(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<Vec<TeamMemberData>> {
        ctx.require_admin()?;
        let members =
            TeamMember::find_for_admin(&filter(search, is_active, None, None), ctx.db_pool())
                .await
                .map_err(to_field_error)?;
        Ok(into_data(members))
    }

    async fn supporters(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<Vec<SupporterData>> {
        ctx.require_admin()?;
        let supporters =
            Supporter::find_for_admin(&filter(search, is_active, None, None), ctx.db_pool())
                .await
                .map_err(to_field_error)?;
        Ok(into_data(supporters))
    }

    async fn impact_stats(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<Vec<ImpactStatData>> {
        ctx.require_admin()?;
        let stats = ImpactStat::find_for_admin(&filter(search, is_active, None, None), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(stats))
    }

    async fn impact_stories(
        ctx: &GraphQLContext,
        search: Option<String>,
    ) -> FieldResult<Vec<ImpactStoryData>> {
        ctx.require_admin()?;
        let stories = ImpactStory::find_for_admin(&filter(search, None, None, None), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(stories))
    }

    // =========================================================================
    // Submissions
    // =========================================================================

    async fn donations(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        processed: Option<bool>,
        donation_type: Option<String>,
    ) -> FieldResult<Vec<DonationData>> {
        ctx.require_admin()?;
        let donations = Donation::find_for_admin(
            &filter(search, is_active, processed, donation_type),
            ctx.db_pool(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(into_data(donations))
    }

    async fn donation(ctx: &GraphQLContext, id: String) -> FieldResult<Option<DonationData>> {
        ctx.require_admin()?;
        let donation = Donation::find_by_id(parse_id(&id)?, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(donation.map(DonationData::from))
    }

    async fn contacts(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        is_read: Option<bool>,
    ) -> FieldResult<Vec<ContactData>> {
        ctx.require_admin()?;
        let contacts = Contact::find_for_admin(&filter(search, is_active, is_read, None), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(contacts))
    }

    async fn newsletter_subscriptions(
        ctx: &GraphQLContext,
        search: Option<String>,
        is_active: Option<bool>,
        subscribed: Option<bool>,
    ) -> FieldResult<Vec<NewsletterData>> {
        ctx.require_admin()?;
        let subscriptions =
            Newsletter::find_for_admin(&filter(search, is_active, subscribed, None), ctx.db_pool())
                .await
                .map_err(to_field_error)?;
        Ok(into_data(subscriptions))
    }

    async fn comments(
        ctx: &GraphQLContext,
        search: Option<String>,
        commentable_type: Option<String>,
    ) -> FieldResult<Vec<CommentData>> {
        ctx.require_admin()?;
        let kind = commentable_type
            .map(|t| {
                t.parse::<CommentableType>()
                    .map(|kind| kind.to_string())
                    .map_err(|_| FieldError::new("Invalid commentable type", juniper::Value::null()))
            })
            .transpose()?;
        let comments = Comment::find_for_admin(&filter(search, None, None, kind), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(into_data(comments))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Exchange admin credentials for a JWT (24h)
    async fn admin_login(ctx: &GraphQLContext, email: String, password: String) -> FieldResult<String> {
        auth_actions::admin_login(&email, &password, ctx.deps())
            .await
            .map_err(to_field_error)
    }

    // =========================================================================
    // Content
    // =========================================================================

    async fn create_event(ctx: &GraphQLContext, input: CreateEventInput) -> FieldResult<EventData> {
        ctx.require_admin()?;
        let event = Event::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        info!(event_id = %event.id, slug = %event.slug, "Event created");
        Ok(event.into())
    }

    async fn update_event(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateEventInput,
    ) -> FieldResult<EventData> {
        ctx.require_admin()?;
        let event = Event::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(event.into())
    }

    async fn create_story(ctx: &GraphQLContext, input: CreateStoryInput) -> FieldResult<StoryData> {
        ctx.require_admin()?;
        let story = Story::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        info!(story_id = %story.id, slug = %story.slug, "Story created");
        Ok(story.into())
    }

    async fn update_story(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateStoryInput,
    ) -> FieldResult<StoryData> {
        ctx.require_admin()?;
        let story = Story::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(story.into())
    }

    /// Author defaults to the signed-in admin
    async fn create_blog_post(
        ctx: &GraphQLContext,
        input: CreateBlogPostInput,
    ) -> FieldResult<BlogPostData> {
        let admin = ctx.require_admin()?;
        let post = BlogPost::create(input.into_create(&admin.email), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        info!(blog_post_id = %post.id, slug = %post.slug, "Blog post created");
        Ok(post.into())
    }

    async fn update_blog_post(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateBlogPostInput,
    ) -> FieldResult<BlogPostData> {
        ctx.require_admin()?;
        let post = BlogPost::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(post.into())
    }

    async fn create_resource(
        ctx: &GraphQLContext,
        input: CreateResourceInput,
    ) -> FieldResult<ResourceData> {
        ctx.require_admin()?;
        let create: CreateResource = input.try_into().map_err(to_field_error)?;
        let resource = Resource::create(create, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        info!(resource_id = %resource.id, "Resource created");
        Ok(resource.into())
    }

    async fn update_resource(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateResourceInput,
    ) -> FieldResult<ResourceData> {
        ctx.require_admin()?;
        let update: UpdateResource = input.try_into().map_err(to_field_error)?;
        let resource = Resource::update(parse_id(&id)?, update, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(resource.into())
    }

    // =========================================================================
    // People and impact
    // =========================================================================

    async fn create_team_member(
        ctx: &GraphQLContext,
        input: CreateTeamMemberInput,
    ) -> FieldResult<TeamMemberData> {
        ctx.require_admin()?;
        let member = TeamMember::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(member.into())
    }

    async fn update_team_member(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateTeamMemberInput,
    ) -> FieldResult<TeamMemberData> {
        ctx.require_admin()?;
        let member = TeamMember::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(member.into())
    }

    async fn create_supporter(
        ctx: &GraphQLContext,
        input: CreateSupporterInput,
    ) -> FieldResult<SupporterData> {
        ctx.require_admin()?;
        let supporter = Supporter::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(supporter.into())
    }

    async fn update_supporter(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateSupporterInput,
    ) -> FieldResult<SupporterData> {
        ctx.require_admin()?;
        let supporter = Supporter::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(supporter.into())
    }

    async fn create_impact_stat(
        ctx: &GraphQLContext,
        input: CreateImpactStatInput,
    ) -> FieldResult<ImpactStatData> {
        ctx.require_admin()?;
        let stat = ImpactStat::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(stat.into())
    }

    async fn update_impact_stat(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateImpactStatInput,
    ) -> FieldResult<ImpactStatData> {
        ctx.require_admin()?;
        let stat = ImpactStat::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(stat.into())
    }

    async fn create_impact_story(
        ctx: &GraphQLContext,
        input: CreateImpactStoryInput,
    ) -> FieldResult<ImpactStoryData> {
        ctx.require_admin()?;
        let story = ImpactStory::create(input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(story.into())
    }

    async fn update_impact_story(
        ctx: &GraphQLContext,
        id: String,
        input: UpdateImpactStoryInput,
    ) -> FieldResult<ImpactStoryData> {
        ctx.require_admin()?;
        let story = ImpactStory::update(parse_id(&id)?, input.into(), ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(story.into())
    }

    // =========================================================================
    // Submissions (donor and visitor fields are read-only)
    // =========================================================================

    async fn set_donation_processed(
        ctx: &GraphQLContext,
        id: String,
        processed: bool,
    ) -> FieldResult<DonationData> {
        ctx.require_admin()?;
        let donation = Donation::set_processed(parse_id(&id)?, processed, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(donation.into())
    }

    async fn set_contact_read(
        ctx: &GraphQLContext,
        id: String,
        is_read: bool,
    ) -> FieldResult<ContactData> {
        ctx.require_admin()?;
        let contact = Contact::set_read(parse_id(&id)?, is_read, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(contact.into())
    }

    async fn set_newsletter_subscribed(
        ctx: &GraphQLContext,
        id: String,
        subscribed: bool,
    ) -> FieldResult<NewsletterData> {
        ctx.require_admin()?;
        let subscription = Newsletter::set_subscribed(parse_id(&id)?, subscribed, ctx.db_pool())
            .await
            .map_err(to_field_error)?;
        Ok(subscription.into())
    }

    /// Delete one record. Returns false when nothing had that id.
    async fn delete_record(ctx: &GraphQLContext, kind: RecordKind, id: String) -> FieldResult<bool> {
        let admin = ctx.require_admin()?;
        let pool = ctx.db_pool();

        let deleted = match kind {
            RecordKind::Event => Event::delete(parse_id(&id)?, pool).await,
            RecordKind::Story => Story::delete(parse_id(&id)?, pool).await,
            RecordKind::BlogPost => BlogPost::delete(parse_id(&id)?, pool).await,
            RecordKind::Resource => Resource::delete(parse_id(&id)?, pool).await,
            RecordKind::TeamMember => TeamMember::delete(parse_id(&id)?, pool).await,
            RecordKind::Supporter => Supporter::delete(parse_id(&id)?, pool).await,
            RecordKind::ImpactStat => ImpactStat::delete(parse_id(&id)?, pool).await,
            RecordKind::ImpactStory => ImpactStory::delete(parse_id(&id)?, pool).await,
            RecordKind::Donation => Donation::delete(parse_id(&id)?, pool).await,
            RecordKind::Contact => Contact::delete(parse_id(&id)?, pool).await,
            RecordKind::Newsletter => Newsletter::delete(parse_id(&id)?, pool).await,
            RecordKind::Comment => Comment::delete(parse_id(&id)?, pool).await,
        }
        .map_err(to_field_error)?;

        info!(admin = %admin.email, kind = ?kind, id = %id, deleted, "Admin deleted record");
        Ok(deleted)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
