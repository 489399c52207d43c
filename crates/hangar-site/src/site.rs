//! Process-wide site state.

use std::fmt;

use hangar_config::{Config, RuntimeConfig};

use crate::content::{self, BlogEntry, BlogSource, NavEntry, PageMeta, PlaceholderBlogs};
use crate::routes::{RouteError, RouteRule, RouteTable};

/// Everything pages read: runtime config, route policy, metadata and content.
///
/// Built once at startup and shared read-only (wrap in `Arc`). Accessors never
/// recompute anything except [`Site::blogs`], which asks the blog source.
pub struct Site {
    runtime: RuntimeConfig,
    routes: RouteTable,
    meta: PageMeta,
    navigation: Vec<NavEntry>,
    blogs: Box<dyn BlogSource>,
}

impl Site {
    /// Create a site with the default page metadata and placeholder blogs.
    #[must_use]
    pub fn new(runtime: RuntimeConfig, routes: RouteTable) -> Self {
        let navigation = content::navigation(&runtime);
        Self {
            runtime,
            routes,
            meta: PageMeta::default(),
            navigation,
            blogs: Box::new(PlaceholderBlogs::default()),
        }
    }

    /// Create a site from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured route pattern or header is malformed.
    pub fn from_config(config: &Config) -> Result<Self, RouteError> {
        let routes = RouteTable::with_builtin(&config.routes)?;
        Ok(Self::new(config.runtime.clone(), routes))
    }

    /// Replace the blog source.
    #[must_use]
    pub fn with_blog_source(mut self, source: impl BlogSource + 'static) -> Self {
        self.blogs = Box::new(source);
        self
    }

    /// Public runtime configuration.
    #[must_use]
    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Route table.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Effective route rule for a request path.
    #[must_use]
    pub fn resolve_route(&self, path: &str) -> RouteRule {
        self.routes.resolve(path)
    }

    #[must_use]
    pub fn page_meta(&self) -> &PageMeta {
        &self.meta
    }

    #[must_use]
    pub fn navigation(&self) -> &[NavEntry] {
        &self.navigation
    }

    #[must_use]
    pub fn blogs(&self) -> Vec<BlogEntry> {
        self.blogs.entries()
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("runtime", &self.runtime)
            .field("routes", &self.routes.len())
            .field("navigation", &self.navigation)
            .finish_non_exhaustive()
    }
}
