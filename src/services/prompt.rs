use serde_json::{Map, Value};

pub const CONTEXT_HEADER: &str = "User context:";
pub const MESSAGE_MARKER: &str = "User says:";

/// Prompt shared by every chat-with-context path: an optional context block,
/// the message marker, then the message verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatPrompt {
    context: Vec<(String, String)>,
    message: String,
}

impl ChatPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            context: Vec::new(),
            message: message.into(),
        }
    }

    /// Appends every entry of `context`, keeping its order.
    pub fn with_context(mut self, context: &Map<String, Value>) -> Self {
        for (key, value) in context {
            self.context.push((key.clone(), render_value(value)));
        }
        self
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(3);

        if !self.context.is_empty() {
            let lines: Vec<String> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            parts.push(format!("{}\n{}\n", CONTEXT_HEADER, lines.join("\n")));
        }

        parts.push(MESSAGE_MARKER.to_string());
        parts.push(self.message.clone());
        parts.join("\n")
    }
}

pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}
