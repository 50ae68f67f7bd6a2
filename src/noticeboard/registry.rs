//! # Extension-Point Registry
//!
//! The host platform exposes two invocation points: embed directives (named,
//! attribute-parameterized placeholders expanded into markup) and a pre-query
//! hook run before each page-level query. Rather than string-keyed callback
//! registration, extensions implement the [`EmbedDirective`] and [`QueryHook`]
//! traits and are registered as trait objects against a typed registry.
//!
//! The host drives the registry: it calls [`ExtensionRegistry::expand`] when
//! it encounters a directive in page content and
//! [`ExtensionRegistry::apply_query_hooks`] before running a page query.

use crate::augment::PageQuery;
use crate::platform::Platform;
use crate::render::RenderContext;
use crate::store::ContentStore;

/// Named attributes of an embed directive occurrence.
#[derive(Debug, Clone, Default)]
pub struct EmbedAttrs {
    pub category: Option<String>,
    pub title: Option<String>,
    pub hide_if_empty: bool,
}

impl EmbedAttrs {
    /// Builds attributes from the host's name/value pairs. Unknown names are
    /// ignored; the `hide_if_empty` flag accepts `1`, `true`, and `yes`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut attrs = Self::default();
        for (name, value) in pairs {
            match name {
                "category" => attrs.category = Some(value.to_string()),
                "title" => attrs.title = Some(value.to_string()),
                "hide_if_empty" => attrs.hide_if_empty = parse_flag(value),
                _ => {}
            }
        }
        attrs
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// A named placeholder the host expands into markup.
pub trait EmbedDirective<S: ContentStore, P: Platform> {
    fn name(&self) -> &'static str;
    fn expand(&self, attrs: &EmbedAttrs, ctx: &RenderContext<'_, S, P>) -> String;
}

/// Mutates an outgoing page query before the host executes it.
pub trait QueryHook {
    fn before_query(&self, query: &mut PageQuery);
}

pub struct ExtensionRegistry<S: ContentStore, P: Platform> {
    directives: Vec<Box<dyn EmbedDirective<S, P>>>,
    query_hooks: Vec<Box<dyn QueryHook>>,
}

impl<S: ContentStore, P: Platform> Default for ExtensionRegistry<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContentStore, P: Platform> ExtensionRegistry<S, P> {
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
            query_hooks: Vec::new(),
        }
    }

    pub fn register_directive(&mut self, directive: Box<dyn EmbedDirective<S, P>>) {
        self.directives.push(directive);
    }

    pub fn register_query_hook(&mut self, hook: Box<dyn QueryHook>) {
        self.query_hooks.push(hook);
    }

    pub fn directive_names(&self) -> Vec<&'static str> {
        self.directives.iter().map(|d| d.name()).collect()
    }

    /// Expands the named directive, or `None` when nothing is registered
    /// under that name.
    pub fn expand(
        &self,
        name: &str,
        attrs: &EmbedAttrs,
        ctx: &RenderContext<'_, S, P>,
    ) -> Option<String> {
        self.directives
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.expand(attrs, ctx))
    }

    /// Runs every registered hook against the outgoing query. Hooks decide
    /// for themselves which queries they touch.
    pub fn apply_query_hooks(&self, query: &mut PageQuery) {
        for hook in &self.query_hooks {
            hook.before_query(query);
        }
    }
}
