//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::Variables;
use serde_json::Value;
use server_core::kernel::ServerDeps;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use server_core::server::middleware::AuthUser;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let title = result.get("createEvent.title").as_str();
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }

    /// True when any error message contains `needle`.
    pub fn has_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }
}

impl GraphQLClient {
    pub fn new(deps: ServerDeps, auth_user: Option<AuthUser>) -> Self {
        Self::with_context(GraphQLContext::new(deps, auth_user))
    }

    /// Creates a new GraphQL client acting as a signed-in user.
    pub fn as_user(deps: ServerDeps, email: &str, is_admin: bool) -> Self {
        Self::new(
            deps,
            Some(AuthUser {
                email: email.to_string(),
                is_admin,
            }),
        )
    }

    /// Creates a new GraphQL client with a custom context (for auth testing).
    pub fn with_context(context: GraphQLContext) -> Self {
        Self {
            schema: create_schema(),
            context,
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        // Convert juniper::Value to serde_json::Value
        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let error_messages: Vec<String> = errors
            .iter()
            .map(|e| e.error().message().to_string())
            .collect();

        GraphQLResult {
            data,
            errors: error_messages,
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
