//! Team domain - staff shown on the about and team pages, plus supporters

pub mod data;
pub mod models;

pub use data::{
    CreateSupporterInput, CreateTeamMemberInput, SupporterData, TeamMemberData,
    UpdateSupporterInput, UpdateTeamMemberInput,
};
pub use models::{
    CreateSupporter, CreateTeamMember, Supporter, TeamMember, UpdateSupporter, UpdateTeamMember,
};
