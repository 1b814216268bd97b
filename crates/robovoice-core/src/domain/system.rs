//! External tool dependency and voice listing types.

/// Represents the status of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Tool is installed and answered a version probe.
    Present { version: String },
    /// Tool is missing.
    Missing,
}

/// Information about an external tool robovoice shells out to.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Program name (e.g., "say", "ffmpeg").
    pub name: String,
    /// Current status of the tool.
    pub status: DependencyStatus,
    /// Description of what this tool is used for.
    pub description: String,
    /// Whether robovoice can do anything useful without it.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self.status, DependencyStatus::Missing)
    }
}

/// A voice reported by the speech command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Voice identifier to pass back to the speech command.
    pub name: String,
    /// Locale tag, e.g. `en_US`.
    pub locale: String,
    /// Sample sentence, if the command supplies one.
    pub sample: Option<String>,
}
