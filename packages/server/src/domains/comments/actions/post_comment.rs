use anyhow::Result;
use tracing::{debug, info};

use crate::domains::comments::data::CommentForm;
use crate::domains::comments::models::{Comment, CommentTarget};
use crate::kernel::ServerDeps;

/// Comment from a list page. Blank text is ignored.
pub async fn post_list_comment(form: &CommentForm, deps: &ServerDeps) -> Result<Option<Comment>> {
    let Some(text) = form.text() else {
        debug!("Ignoring empty list comment");
        return Ok(None);
    };

    let comment = Comment::create_unattached(text, &deps.db_pool).await?;
    info!(comment_id = %comment.id, "Unattached comment posted");
    Ok(Some(comment))
}

/// Comment on a detail page. Ignored unless comment, name and email are all
/// present.
pub async fn post_detail_comment(
    target: CommentTarget,
    form: &CommentForm,
    deps: &ServerDeps,
) -> Result<Option<Comment>> {
    let Some((name, email, text)) = form.signed() else {
        debug!(commentable_type = %target.kind, "Ignoring incomplete comment");
        return Ok(None);
    };

    let comment = Comment::create_for(target, name, email, text, &deps.db_pool).await?;
    info!(
        comment_id = %comment.id,
        commentable_type = %target.kind,
        commentable_id = %target.id,
        "Comment posted"
    );
    Ok(Some(comment))
}
