use crate::{config::Config, settings::GuildSettingsStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Collection of data that is shared across events
pub struct Context<'a> {
    // Concierge's own state
    pub cfg: &'a RwLock<Config>,
    pub settings: &'a RwLock<GuildSettingsStore>,
    // Discord/Serenity context types
    pub cache: &'a Arc<serenity::all::Cache>,
    pub http: &'a Arc<serenity::all::Http>,
    pub cache_http: &'a CacheHttp,
}

/// Many Serenity functions take an `impl CacheHttp` that checks the cache
/// before falling back to an http request.  The most readily available type
/// implementing it carries a confusingly different name, so we alias it.
pub type CacheHttp = serenity::all::Context;
