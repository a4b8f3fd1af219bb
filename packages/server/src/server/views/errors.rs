fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/site.css">
</head>
<body>
    <main class="error-page">
        <h1>{title}</h1>
        <p>{message}</p>
        <p><a href="/">Back to the home page</a></p>
    </main>
</body>
</html>"#,
        title = title,
        message = message,
    )
}

pub fn not_found() -> String {
    error_page(
        "Page not found",
        "The page you are looking for does not exist or has been moved.",
    )
}

pub fn server_error() -> String {
    error_page(
        "Something went wrong",
        "We could not load this page. Please try again later.",
    )
}
