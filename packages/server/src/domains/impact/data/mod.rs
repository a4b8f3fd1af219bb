pub mod impact_stat;
pub mod impact_story;

pub use impact_stat::*;
pub use impact_story::*;
