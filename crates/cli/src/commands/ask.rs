use anyhow::Result;

use sqlscout_core::Conversation;
use sqlscout_service::QueryService;

use super::print_outcome;

/// One-shot question with empty history.
pub async fn run(service: &QueryService, question: &str) -> Result<()> {
    let mut conversation = Conversation::new();
    let outcome = service.ask(question, &mut conversation).await?;
    print_outcome(&outcome);
    Ok(())
}
