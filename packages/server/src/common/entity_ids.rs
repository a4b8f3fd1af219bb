//! Typed ID aliases for every table the site stores.

pub use super::id::Id;

pub struct TeamMember;
pub struct Supporter;
pub struct ImpactStat;
pub struct ImpactStory;
pub struct Event;
pub struct Story;
pub struct BlogPost;
pub struct Resource;
pub struct Donation;
pub struct Contact;
pub struct Newsletter;
pub struct Comment;

pub type TeamMemberId = Id<TeamMember>;
pub type SupporterId = Id<Supporter>;
pub type ImpactStatId = Id<ImpactStat>;
pub type ImpactStoryId = Id<ImpactStory>;
pub type EventId = Id<Event>;
pub type StoryId = Id<Story>;
pub type BlogPostId = Id<BlogPost>;
pub type ResourceId = Id<Resource>;
pub type DonationId = Id<Donation>;
pub type ContactId = Id<Contact>;
pub type NewsletterId = Id<Newsletter>;
pub type CommentId = Id<Comment>;
