// Common test utilities

#![allow(dead_code)]

pub mod fixtures;
pub mod graphql;
pub mod harness;
pub mod http;

pub use fixtures::*;
pub use graphql::*;
pub use harness::*;
pub use http::*;

/// Macro for creating GraphQL variables
#[macro_export]
macro_rules! vars {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut vars = juniper::Variables::new();
        $(
            vars.insert(
                $key.to_string(),
                juniper::InputValue::scalar($value),
            );
        )*
        vars
    }};
}
