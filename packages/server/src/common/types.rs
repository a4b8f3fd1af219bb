// Filter types shared by the models and the admin GraphQL layer.

/// Admin list filters. Every field is optional; `None` means "don't filter".
///
/// `search` is matched case-insensitively against each model's admin search
/// fields. `flag` is the model's main boolean list filter (featured,
/// processed, is_read, subscribed, ...), `kind` its main choice filter
/// (category, donation_type, commentable_type).
#[derive(Debug, Clone, Default)]
pub struct AdminFilter {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub flag: Option<bool>,
    pub kind: Option<String>,
}

impl AdminFilter {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }
}
