use serde::{Deserialize, Serialize};

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a user's chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    /// Formatted as `YYYY-MM-DD HH:MM:SS`
    pub time: String,
    pub content: String,
}

impl ChatTurn {
    /// Build the (prompt, response) pair recorded for one generation request
    pub fn exchange(prompt: String, response: String, time: &str) -> [ChatTurn; 2] {
        [
            ChatTurn {
                role: Role::User,
                time: time.to_string(),
                content: prompt,
            },
            ChatTurn {
                role: Role::Assistant,
                time: time.to_string(),
                content: response,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_pairs_user_then_assistant() {
        let [user, assistant] =
            ChatTurn::exchange("plan".into(), "itinerary".into(), "2024-05-01 10:00:00");

        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "plan");
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.content, "itinerary");
        assert_eq!(user.time, assistant.time);
    }

    #[test]
    fn test_turn_json_shape() {
        let turn = ChatTurn {
            role: Role::Assistant,
            time: "2024-05-01 10:00:00".to_string(),
            content: "Day 1".to_string(),
        };

        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["time"], "2024-05-01 10:00:00");
        assert_eq!(value["content"], "Day 1");
    }
}
