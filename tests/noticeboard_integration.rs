//! End-to-end exercise of the crate the way a host platform drives it:
//! register the extensions, save records through the facade, expand the
//! embed directives, and run the pre-query hook.

use chrono::NaiveDate;
use noticeboard::augment::{ContentType, PageQuery};
use noticeboard::directives::{register_noticeboard, ITEM_DIRECTIVE, LIST_DIRECTIVE};
use noticeboard::model::Notice;
use noticeboard::platform::{Platform, RequestContext, CATEGORY_PARAM};
use noticeboard::registry::{EmbedAttrs, ExtensionRegistry};
use noticeboard::render::RenderContext;
use noticeboard::schema::NoticeSubmission;
use noticeboard::store::memory::InMemoryStore;
use noticeboard::api::Noticeboard;
use noticeboard::store::ContentStore;

struct HostPlatform;

impl Platform for HostPlatform {
    fn permalink(&self, notice: &Notice) -> String {
        format!("/notices/{}", notice.metadata.id)
    }

    fn thumbnail_markup(&self, notice: &Notice, size: (u32, u32)) -> Option<String> {
        notice
            .metadata
            .thumbnail
            .as_ref()
            .map(|img| format!("<img src='{}' width='{}' height='{}' />", img, size.0, size.1))
    }

    fn category_label(&self, slug: &str) -> String {
        slug.to_uppercase()
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn submission(title: &str, body: &str, from: &str, to: &str) -> NoticeSubmission {
    NoticeSubmission {
        title: title.into(),
        body_text: body.into(),
        date_enabled: true,
        date_from: from.into(),
        date_to: to.into(),
        categories: vec!["events".into()],
        ..Default::default()
    }
}

#[test]
fn host_lifecycle_save_then_render_both_directives() {
    let mut board = Noticeboard::new(InMemoryStore::new());
    let current = board
        .save_notice(
            None,
            &submission("Fete", "School fete on Saturday", "2024-01-01", "2024-01-31"),
            false,
        )
        .unwrap()
        .unwrap();
    board
        .save_notice(
            None,
            &submission("Old camp", "Long gone", "2023-01-01", "2023-01-31"),
            false,
        )
        .unwrap()
        .unwrap();

    let mut registry: ExtensionRegistry<InMemoryStore, HostPlatform> = ExtensionRegistry::new();
    register_noticeboard(&mut registry);

    let request = RequestContext::new();
    let ctx = RenderContext::new(board.store(), &HostPlatform, &request)
        .with_today(day("2024-01-15"))
        .with_current(current.metadata.id);

    // Detail page: the routed notice, rendered fully.
    let item = registry
        .expand(ITEM_DIRECTIVE, &EmbedAttrs::default(), &ctx)
        .unwrap();
    assert!(item.contains("<h2>Fete</h2>"));

    // List page: only the in-window notice appears.
    let attrs = EmbedAttrs::from_pairs(vec![("title", "Noticeboard")]);
    let list = registry.expand(LIST_DIRECTIVE, &attrs, &ctx).unwrap();
    assert!(list.contains("<h2>Noticeboard</h2>"));
    assert!(list.contains("Fete"));
    assert!(!list.contains("Old camp"));
    assert!(list.contains(&format!("/notices/{}", current.metadata.id)));
}

#[test]
fn expired_detail_page_shows_placeholder_only() {
    let mut board = Noticeboard::new(InMemoryStore::new());
    let current = board
        .save_notice(
            None,
            &submission("Fete", "School fete", "2024-01-01", "2024-01-31"),
            false,
        )
        .unwrap()
        .unwrap();

    let mut registry: ExtensionRegistry<InMemoryStore, HostPlatform> = ExtensionRegistry::new();
    register_noticeboard(&mut registry);

    let request = RequestContext::new();
    let ctx = RenderContext::new(board.store(), &HostPlatform, &request)
        .with_today(day("2024-02-01"))
        .with_current(current.metadata.id);

    let item = registry
        .expand(ITEM_DIRECTIVE, &EmbedAttrs::default(), &ctx)
        .unwrap();
    assert_eq!(item, "<p>This notice has expired.</p>");
}

#[test]
fn request_category_param_filters_the_list() {
    let mut store = InMemoryStore::new();
    let mut sports = Notice::new("Sports day".into(), "On the oval".into());
    sports.metadata.categories = vec!["sports".into()];
    sports.metadata.date_enabled = Some(false);
    store.save_notice(&sports).unwrap();
    let mut news = Notice::new("Newsletter".into(), "Term two".into());
    news.metadata.categories = vec!["news".into()];
    news.metadata.date_enabled = Some(false);
    store.save_notice(&news).unwrap();

    let mut registry: ExtensionRegistry<InMemoryStore, HostPlatform> = ExtensionRegistry::new();
    register_noticeboard(&mut registry);

    let request = RequestContext::new().with_param(CATEGORY_PARAM, "sports");
    let ctx = RenderContext::new(&store, &HostPlatform, &request);

    let list = registry
        .expand(LIST_DIRECTIVE, &EmbedAttrs::default(), &ctx)
        .unwrap();
    assert!(list.contains("Sports day"));
    assert!(!list.contains("Newsletter"));
}

#[test]
fn query_hook_widens_primary_category_queries() {
    let mut registry: ExtensionRegistry<InMemoryStore, HostPlatform> = ExtensionRegistry::new();
    register_noticeboard(&mut registry);

    let mut query = PageQuery {
        is_category_archive: true,
        is_primary: true,
        content_types: None,
    };
    registry.apply_query_hooks(&mut query);
    assert_eq!(
        query.content_types,
        Some(vec![ContentType::Post, ContentType::Notice])
    );

    let mut secondary = PageQuery {
        is_category_archive: true,
        is_primary: false,
        content_types: None,
    };
    registry.apply_query_hooks(&mut secondary);
    assert_eq!(secondary.content_types, None);
}
