use super::RenderContext;
use crate::model::Notice;
use crate::platform::Platform;
use crate::store::ContentStore;
use crate::visibility::is_visible;

/// Presentation size for the detail-page thumbnail, in logical pixels.
pub const SINGLE_THUMBNAIL_SIZE: (u32, u32) = (200, 200);

/// The entire output for a notice outside its visibility window.
pub const EXPIRED_MARKUP: &str = "<p>This notice has expired.</p>";

/// Renders one notice for detail display.
///
/// Outside the visibility window the output is solely the expired
/// placeholder; no title, body, thumbnail, or link leaks through. The body is
/// full, untrimmed text, emitted per the context's escape policy.
pub fn render_single<S: ContentStore, P: Platform>(
    notice: &Notice,
    ctx: &RenderContext<'_, S, P>,
) -> String {
    if !is_visible(notice, ctx.today) {
        return EXPIRED_MARKUP.to_string();
    }

    let mut out = format!("<h2>{}</h2>\n", ctx.policy.apply(&notice.metadata.title));
    if let Some(thumbnail) = ctx.platform.thumbnail_markup(notice, SINGLE_THUMBNAIL_SIZE) {
        out.push_str(&thumbnail);
        out.push('\n');
    }
    out.push_str(&format!("<p>{}</p>", ctx.policy.apply(&notice.body_text)));

    if let Some(url) = notice.metadata.external_url.as_deref() {
        if !url.is_empty() {
            let url = ctx.policy.apply(url);
            out.push_str(&format!(
                "\n<p>More information: <a href='{url}' target='_blank'>{url}</a></p>"
            ));
        }
    }
    out
}
