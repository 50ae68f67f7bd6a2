use super::RenderContext;
use crate::error::Result;
use crate::model::Notice;
use crate::platform::Platform;
use crate::query::{resolve_category, NoticeQuery};
use crate::render::escape::escape_html;
use crate::store::ContentStore;
use crate::text::trim_words;
use crate::visibility::is_visible;

/// Presentation size for list thumbnails, in logical pixels.
pub const LIST_THUMBNAIL_SIZE: (u32, u32) = (300, 225);

/// Word budget for the list-view body summary.
pub const LIST_WORD_LIMIT: usize = 40;

/// Placeholder line emitted when nothing is visible and the list is not
/// hidden outright.
pub const EMPTY_PLACEHOLDER: &str = "There are currently no notices to be displayed.";

/// Embed-level options for the list renderer.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Category filter; takes precedence over the request's `category`
    /// parameter.
    pub category: Option<String>,
    /// Optional heading, always HTML-escaped.
    pub title: Option<String>,
    /// Suppress all output (heading and wrapper included) when nothing is
    /// visible.
    pub hide_if_empty: bool,
}

/// Renders the filtered notice list.
///
/// The query runs uncapped, newest first. Items outside their visibility
/// window are skipped entirely: they appear neither in the output nor in the
/// count the empty-list policy looks at. Iteration is a plain local loop over
/// the query result; there is no shared cursor to reset.
pub fn render_list<S: ContentStore, P: Platform>(
    opts: &ListOptions,
    ctx: &RenderContext<'_, S, P>,
) -> Result<String> {
    let query = NoticeQuery {
        category: resolve_category(
            opts.category.as_deref(),
            ctx.request.category().as_deref(),
        ),
        search_term: ctx.request.search_term(),
    };
    let candidates = ctx.store.query(&query)?;

    let items: Vec<String> = candidates
        .iter()
        .filter(|n| is_visible(n, ctx.today))
        .map(|n| render_item(n, ctx))
        .collect();

    if items.is_empty() && opts.hide_if_empty {
        return Ok(String::new());
    }

    let mut out = String::new();
    if let Some(title) = opts.title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(title)));
    }
    out.push_str("<ul class=\"noticeboard-list\">\n");
    if items.is_empty() {
        out.push_str(&format!("<li>{}</li>\n", EMPTY_PLACEHOLDER));
    } else {
        for item in &items {
            out.push_str(item);
        }
    }
    out.push_str("</ul>");
    Ok(out)
}

fn render_item<S: ContentStore, P: Platform>(
    notice: &Notice,
    ctx: &RenderContext<'_, S, P>,
) -> String {
    let summary = trim_words(&notice.body_text, LIST_WORD_LIMIT);
    let thumbnail = ctx
        .platform
        .thumbnail_markup(notice, LIST_THUMBNAIL_SIZE)
        .unwrap_or_default();
    let permalink = ctx.platform.permalink(notice);
    let title = ctx.policy.apply(&notice.metadata.title);
    let summary = ctx.policy.apply(&summary);

    format!(
        "<li>\n\
         <center>{thumbnail}</center>\n\
         <h2><a style=\"text-decoration:none\" href='{permalink}'>{title}</a></h2>\n\
         <p>{summary}</p>\n\
         <p class=\"view-more-link\"><a href='{permalink}'>View more</a></p>\n\
         </li>\n"
    )
}

/// Comma-separated display labels for a notice's categories, in stored order.
pub fn category_label_list<P: Platform>(notice: &Notice, platform: &P) -> String {
    notice
        .metadata
        .categories
        .iter()
        .map(|slug| platform.category_label(slug))
        .collect::<Vec<_>>()
        .join(", ")
}
