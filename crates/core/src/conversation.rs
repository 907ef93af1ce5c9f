use serde::{Deserialize, Serialize};

/// Rendered in place of history when the conversation is empty.
pub const NO_HISTORY_MARKER: &str = "No previous conversation.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

/// One question or one answer in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Append-only log of prior question/answer turns.
///
/// Not process-global state: callers own a `Conversation` value and thread it
/// through each request, so concurrent users cannot interleave each other's
/// history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn { role: Role::User, content: content.into() });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn { role: Role::Assistant, content: content.into() });
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Serialize the full ordered log into prompt text.
    ///
    /// Empty conversations render as [`NO_HISTORY_MARKER`] so prompt templates
    /// never embed a blank section.
    #[must_use]
    pub fn render(&self) -> String {
        if self.turns.is_empty() {
            return NO_HISTORY_MARKER.to_owned();
        }
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conversation_renders_marker() {
        let conversation = Conversation::new();
        assert_eq!(conversation.render(), NO_HISTORY_MARKER);
    }

    #[test]
    fn turns_render_in_chronological_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("Show me all customers");
        conversation.push_assistant("SQL: SELECT * FROM customers");
        conversation.push_user("Only from California");

        let rendered = conversation.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "User: Show me all customers");
        assert_eq!(lines[1], "Assistant: SQL: SELECT * FROM customers");
        assert_eq!(lines[2], "User: Only from California");
    }

    #[test]
    fn clear_empties_the_log() {
        let mut conversation = Conversation::new();
        conversation.push_user("hello");
        conversation.push_assistant("hi");
        assert_eq!(conversation.len(), 2);

        conversation.clear();
        assert!(conversation.is_empty());
        assert_eq!(conversation.render(), NO_HISTORY_MARKER);
    }

    #[test]
    fn role_round_trips_through_from_str() {
        use std::str::FromStr;
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("Assistant").unwrap(), Role::Assistant);
        assert!(Role::from_str("system").is_err());
    }
}
