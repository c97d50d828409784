use crate::advice::fetch::UserData;
use crate::services::prompt::ChatPrompt;

pub const ADVICE_INSTRUCTION: &str = "Give improvement advice based on data.";
pub const NO_DATA_NOTE: &str = "No user data found.";

/// Builds the advice prompt with the same contract as the API's chat prompt.
pub fn advice_prompt(user_data: &UserData, question: &str) -> ChatPrompt {
    let message = format!("{}\n{}", question, ADVICE_INSTRUCTION);
    match user_data {
        UserData::Found(map) => ChatPrompt::new(message).with_context(map),
        UserData::Missing => ChatPrompt::new(message).with_entry("Note", NO_DATA_NOTE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_becomes_context_block() {
        let data = UserData::Found(json!({"Age": 20, "Mind_Score": 6}).as_object().cloned().unwrap());
        assert_eq!(
            advice_prompt(&data, "How can I focus?").render(),
            "User context:\nAge: 20\nMind_Score: 6\n\nUser says:\nHow can I focus?\nGive improvement advice based on data."
        );
    }

    #[test]
    fn missing_snapshot_adds_note() {
        assert_eq!(
            advice_prompt(&UserData::Missing, "hello").render(),
            "User context:\nNote: No user data found.\n\nUser says:\nhello\nGive improvement advice based on data."
        );
    }
}
