use serde::{Deserialize, Serialize};

/// Body of an email sent or replied to by a mail integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    /// Message body.
    pub body: String,
    /// How the body should be rendered.
    #[serde(default)]
    pub content_type: EmailContentType,
}

impl EmailContent {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: EmailContentType::Text,
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: EmailContentType::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailContentType {
    #[default]
    Text,
    Html,
}
