use crate::{event::*, plugin::*, provision};
use anyhow::Result;

/// Provisions a private welcome channel when a member joins.  Errors
/// propagate to the dispatch loop, which logs them; there is no retry and the
/// member is not notified.
pub struct Welcome;

#[serenity::async_trait]
impl Plugin for Welcome {
    fn name(&self) -> &'static str {
        "welcome"
    }

    async fn usage(&self, _ctx: &Context) -> Option<String> {
        None
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::MemberJoin(member) = event else {
            return Ok(EventHandled::No);
        };

        provision::provision_for(ctx, member).await?;
        Ok(EventHandled::Yes)
    }
}
