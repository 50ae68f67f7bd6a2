//! The embed directives this crate registers with the host.
//!
//! `noticeboard_item` renders the routed current notice (or nothing when the
//! request resolved no record); `noticeboard_list` renders the filtered list.
//! Both return plain markup strings the host splices into page content—a
//! directive that cannot produce output yields an empty string rather than an
//! error, since the surrounding page must still render.

use crate::augment::CategoryArchiveHook;
use crate::platform::Platform;
use crate::registry::{EmbedAttrs, EmbedDirective, ExtensionRegistry};
use crate::render::{render_list, render_single, ListOptions, RenderContext};
use crate::store::ContentStore;

pub const ITEM_DIRECTIVE: &str = "noticeboard_item";
pub const LIST_DIRECTIVE: &str = "noticeboard_list";

/// Renders the request's current notice for detail display. Takes no
/// attributes.
pub struct NoticeItemDirective;

impl<S: ContentStore, P: Platform> EmbedDirective<S, P> for NoticeItemDirective {
    fn name(&self) -> &'static str {
        ITEM_DIRECTIVE
    }

    fn expand(&self, _attrs: &EmbedAttrs, ctx: &RenderContext<'_, S, P>) -> String {
        let Some(id) = ctx.current else {
            return String::new();
        };
        match ctx.store.get_notice(&id) {
            Ok(notice) => render_single(&notice, ctx),
            Err(_) => String::new(),
        }
    }
}

/// Renders the filtered notice list. Accepts `category`, `title`, and
/// `hide_if_empty` attributes.
pub struct NoticeListDirective;

impl<S: ContentStore, P: Platform> EmbedDirective<S, P> for NoticeListDirective {
    fn name(&self) -> &'static str {
        LIST_DIRECTIVE
    }

    fn expand(&self, attrs: &EmbedAttrs, ctx: &RenderContext<'_, S, P>) -> String {
        let opts = ListOptions {
            category: attrs.category.clone(),
            title: attrs.title.clone(),
            hide_if_empty: attrs.hide_if_empty,
        };
        render_list(&opts, ctx).unwrap_or_default()
    }
}

/// Wires everything this crate contributes into the host's registry: both
/// embed directives and the category-archive query hook. The single
/// registration entry point a host calls at startup.
pub fn register_noticeboard<S: ContentStore, P: Platform>(registry: &mut ExtensionRegistry<S, P>) {
    registry.register_directive(Box::new(NoticeItemDirective));
    registry.register_directive(Box::new(NoticeListDirective));
    registry.register_query_hook(Box::new(CategoryArchiveHook));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Notice;
    use crate::platform::{FixedPlatform, RequestContext};
    use crate::store::memory::InMemoryStore;
    use crate::store::ContentStore;
    use uuid::Uuid;

    #[test]
    fn register_wires_both_directives() {
        let mut registry: ExtensionRegistry<InMemoryStore, FixedPlatform> =
            ExtensionRegistry::new();
        register_noticeboard(&mut registry);
        assert_eq!(
            registry.directive_names(),
            vec![ITEM_DIRECTIVE, LIST_DIRECTIVE]
        );
    }

    #[test]
    fn item_directive_without_current_yields_nothing() {
        let store = InMemoryStore::new();
        let request = RequestContext::new();
        let ctx = RenderContext::new(&store, &FixedPlatform, &request);

        let markup = NoticeItemDirective.expand(&EmbedAttrs::default(), &ctx);
        assert_eq!(markup, "");
    }

    #[test]
    fn item_directive_with_unknown_id_yields_nothing() {
        let store = InMemoryStore::new();
        let request = RequestContext::new();
        let ctx = RenderContext::new(&store, &FixedPlatform, &request).with_current(Uuid::new_v4());

        let markup = NoticeItemDirective.expand(&EmbedAttrs::default(), &ctx);
        assert_eq!(markup, "");
    }

    #[test]
    fn item_directive_renders_the_current_notice() {
        let mut store = InMemoryStore::new();
        let mut notice = Notice::new("Routed".into(), "body".into());
        notice.metadata.date_enabled = Some(false);
        store.save_notice(&notice).unwrap();

        let request = RequestContext::new();
        let ctx =
            RenderContext::new(&store, &FixedPlatform, &request).with_current(notice.metadata.id);

        let markup = NoticeItemDirective.expand(&EmbedAttrs::default(), &ctx);
        assert!(markup.contains("<h2>Routed</h2>"));
    }

    #[test]
    fn list_directive_maps_attributes_to_options() {
        let store = InMemoryStore::new();
        let request = RequestContext::new();
        let ctx = RenderContext::new(&store, &FixedPlatform, &request);

        let attrs = EmbedAttrs {
            title: Some("Board".into()),
            hide_if_empty: true,
            ..Default::default()
        };
        // Empty store plus hide_if_empty: everything suppressed
        assert_eq!(NoticeListDirective.expand(&attrs, &ctx), "");

        let attrs = EmbedAttrs {
            title: Some("Board".into()),
            ..Default::default()
        };
        let markup = NoticeListDirective.expand(&attrs, &ctx);
        assert!(markup.contains("<h2>Board</h2>"));
    }
}
