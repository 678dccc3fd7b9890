use serde::Serialize;

use crate::forge::request::{Branch, Release, Repository};

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One completed remote operation, in the order it ran.
pub struct ResponseStep {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ResponseStep {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            secondary_message: None,
            link: None,
        }
    }

    pub fn secondary(mut self, secondary_message: impl Into<String>) -> Self {
        self.secondary_message = Some(secondary_message.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

impl std::fmt::Display for ResponseStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(secondary) = &self.secondary_message {
            write!(f, " {secondary}")?;
        }
        if let Some(link) = &self.link {
            write!(f, " ({link})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Public identifiers of a freshly created release candidate.
pub struct RcCreated {
    pub release_url: String,
    pub release_name: String,
    pub comparison_url: String,
    /// Tag of the release the candidate was compared against, if any.
    pub previous_tag: Option<String>,
    pub created_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Repository and release state used to display and plan releases.
pub struct BatchInfo {
    pub repository: Repository,
    pub latest_release: Option<Release>,
    /// Present exactly when `latest_release` is.
    pub release_branch: Option<Branch>,
}
