//! # Rendering Layer
//!
//! Produces the public-facing markup: one notice on its own page
//! ([`single::render_single`]) and the filtered list ([`list::render_list`]).
//!
//! Everything a render needs travels explicitly in [`RenderContext`]: the
//! store, the host platform services, the request parameters, the escape
//! policy, "today" for visibility evaluation, and the routed current item.
//! Carrying `today` in the context keeps the renderers deterministic under
//! test; production callers take the default.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::platform::{Platform, RequestContext};
use crate::store::ContentStore;

pub mod escape;
pub mod list;
pub mod single;

pub use escape::EscapePolicy;
pub use list::{render_list, ListOptions};
pub use single::render_single;

pub struct RenderContext<'a, S: ContentStore, P: Platform> {
    pub store: &'a S,
    pub platform: &'a P,
    pub request: &'a RequestContext,
    pub policy: EscapePolicy,
    pub today: NaiveDate,
    /// The record the routing layer resolved for this request, if any. This
    /// replaces the host's ambient "current item" cursor.
    pub current: Option<Uuid>,
}

impl<'a, S: ContentStore, P: Platform> RenderContext<'a, S, P> {
    pub fn new(store: &'a S, platform: &'a P, request: &'a RequestContext) -> Self {
        Self {
            store,
            platform,
            request,
            policy: EscapePolicy::default(),
            today: Local::now().date_naive(),
            current: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_current(mut self, id: Uuid) -> Self {
        self.current = Some(id);
        self
    }

    pub fn with_policy(mut self, policy: EscapePolicy) -> Self {
        self.policy = policy;
        self
    }
}
