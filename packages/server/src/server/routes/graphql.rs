use crate::server::graphql::{GraphQLContext, Schema};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::GraphQLRequest;
use std::sync::Arc;

/// GraphQL POST endpoint (admin interface)
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphiQL for poking at the admin schema during development
pub async fn graphql_playground() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>GYWAN Admin GraphiQL</title>
    <style>
        body { height: 100%; margin: 0; width: 100%; overflow: hidden; }
        #graphiql { height: 100vh; }
    </style>
    <script crossorigin src="https://unpkg.com/react@18/umd/react.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.production.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/graphiql/graphiql.min.css" />
</head>
<body>
    <div id="graphiql">Loading...</div>
    <script src="https://unpkg.com/graphiql/graphiql.min.js" type="application/javascript"></script>
    <script>
        const token = window.localStorage.getItem('gywan_admin_token');
        const fetcher = GraphiQL.createFetcher({
            url: '/graphql',
            headers: token ? { Authorization: 'Bearer ' + token } : {},
        });
        ReactDOM.render(
            React.createElement(GraphiQL, { fetcher: fetcher }),
            document.getElementById('graphiql'),
        );
    </script>
</body>
</html>"#,
    )
}
