//! Route policy, page metadata and static content for the Game Hangar site front.
//!
//! This crate provides:
//! - [`RouteTable`]: per-path rendering mode and response headers
//! - [`PageMeta`], [`NavEntry`], [`BlogEntry`]: content read by every page
//! - [`Site`]: the process-wide, read-only bundle of all of the above
//! - [`render_page`]: the HTML page shell
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use hangar_config::Config;
//! use hangar_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Arc::new(Site::from_config(&config)?);
//!
//! let rule = site.resolve_route("/games/space-shooter");
//! assert!(!rule.renders_on_server());
//! # Ok(())
//! # }
//! ```

mod content;
mod routes;
mod site;
mod template;

pub use content::{
    BlogEntry, BlogSource, GODOT_ICON_URL, HeadLink, NavEntry, PageMeta, PlaceholderBlogs,
    SITE_TITLE, navigation,
};
pub use routes::{
    CROSS_ORIGIN_EMBEDDER_POLICY, CROSS_ORIGIN_OPENER_POLICY, HeaderList, RouteError,
    RoutePattern, RouteRule, RouteTable, builtin_rules,
};
pub use site::Site;
pub use template::{CONFIG_ELEMENT_ID, PageData, RenderMode, render_page};
