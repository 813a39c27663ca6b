use crate::event::{Event, EventHandled};
use anyhow::Result;

pub use crate::context::Context;

mod cleanup;
mod debug;
mod deleteonleave;
mod help;
mod ignore_bots;
mod setcategory;
mod settrusted;
mod showconfig;
mod spawnfor;
mod welcome;

#[serenity::async_trait]
pub trait Plugin: Sync + Send {
    /// Plugin name.  Doubles as the command name for command plugins.
    fn name(&self) -> &'static str;
    /// Help message line.  None if no help message
    async fn usage(&self, ctx: &Context) -> Option<String>;
    /// Potentially handle event.  Returns:
    /// - Ok(EventHandled::Yes) if the event has been handled and no other plugin should attempt to
    ///   handle it
    /// - Ok(EventHandled::No) if another plugin should attempt to handle the event
    /// - Err if an error occurred
    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled>;
}

/// Ordered list of available plugins
pub fn plugins() -> Vec<Box<dyn Plugin>> {
    use crate::plugin::*;

    vec![
        // Core bot operations
        Box::new(debug::Debug),
        Box::new(ignore_bots::IgnoreBots),
        // Welcome channel lifecycle
        Box::new(welcome::Welcome),
        Box::new(cleanup::Cleanup),
        // Admin commands
        Box::new(help::Help),
        Box::new(settrusted::SetTrusted),
        Box::new(setcategory::SetCategory),
        Box::new(deleteonleave::DeleteOnLeave),
        Box::new(spawnfor::SpawnFor),
        Box::new(showconfig::ShowConfig),
    ]
}
