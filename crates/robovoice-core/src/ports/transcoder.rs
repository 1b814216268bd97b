//! Media transcoder port.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::ToolOutput;
use crate::error::ToolError;

/// Port for the external media converter.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Convert `input` into `output`, overwriting `output` if it exists.
    ///
    /// The target container is chosen from `output`'s extension.
    async fn transcode(&self, input: &Path, output: &Path) -> Result<ToolOutput, ToolError>;

    /// Program name, for messages.
    fn program(&self) -> &str;
}
