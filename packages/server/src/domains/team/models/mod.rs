pub mod supporter;
pub mod team_member;

pub use supporter::*;
pub use team_member::*;
