//! Impact domain - headline numbers for the home page and donor quotes for
//! the donate page

pub mod data;
pub mod models;

pub use data::{
    CreateImpactStatInput, CreateImpactStoryInput, ImpactStatData, ImpactStoryData,
    UpdateImpactStatInput, UpdateImpactStoryInput,
};
pub use models::{
    CreateImpactStat, CreateImpactStory, ImpactStat, ImpactStory, UpdateImpactStat,
    UpdateImpactStory,
};
