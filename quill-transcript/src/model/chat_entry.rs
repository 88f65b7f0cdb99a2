use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Short speaker label used by plain-text views.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "AI",
        }
    }
}

/// One line of the chat. Fields are private so an entry cannot change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    role: Role,
    text: String,
    timestamp: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn assistant(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
