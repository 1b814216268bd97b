//! List voices handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_voice_table;

/// Print the voices the speech program offers.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let voices = ctx
        .speech
        .list_voices()
        .await
        .map_err(|e| CliError::Process(e.to_string()))?;

    if voices.is_empty() {
        println!("{} reported no voices.", ctx.speech.program());
        return Ok(());
    }

    print!("{}", format_voice_table(&voices, &ctx.config.voice.voice));
    Ok(())
}
