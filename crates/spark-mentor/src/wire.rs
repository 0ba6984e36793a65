//! Chat-completions request and response shapes.
//!
//! Only the fields Spark sends or reads are modelled. The feedback comes back
//! as a forced function call whose `arguments` is a JSON string.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use spark_core::feedback::MentorFeedback;

use crate::error::MentorError;

pub const TOOL_NAME: &str = "provide_mentor_feedback";

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub tools: Vec<Value>,
    pub tool_choice: Value,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// One system message, one user message, and the forced feedback tool.
    #[must_use]
    pub fn feedback(model: &'a str, system: &'a str, user: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            tools: vec![feedback_tool()],
            tool_choice: json!({ "type": "function", "function": { "name": TOOL_NAME } }),
        }
    }
}

/// Function tool whose parameters are exactly the four feedback fields.
#[must_use]
pub fn feedback_tool() -> Value {
    let string_list = |description: &str| {
        json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description,
        })
    };
    json!({
        "type": "function",
        "function": {
            "name": TOOL_NAME,
            "description": "Provide Super-Mentor feedback on the idea",
            "parameters": {
                "type": "object",
                "properties": {
                    "refinements": string_list("Two specific, concrete improvements. No fluff."),
                    "whatIfs": string_list("Two 'What if...' questions that push their thinking"),
                    "nextSteps": string_list("Two real actions they can take tomorrow"),
                    "verdict": {
                        "type": "string",
                        "description": "Your honest 2-3 sentence take on this idea. Potential and risks. Be real.",
                    },
                },
                "required": ["refinements", "whatIfs", "nextSteps", "verdict"],
                "additionalProperties": false,
            },
        },
    })
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: Option<String>,
}

/// Extract `choices[0].message.tool_calls[0].function.arguments` and parse it.
///
/// # Errors
///
/// [`MentorError::Parse`] if the body is not JSON, the tool call is missing,
/// the arguments do not match [`MentorFeedback`], or the verdict is blank.
pub fn parse_feedback(body: &str) -> Result<MentorFeedback, MentorError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| MentorError::Parse(format!("response is not valid JSON: {e}")))?;

    let arguments = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.tool_calls.into_iter().next())
        .and_then(|call| call.function)
        .and_then(|function| function.arguments)
        .ok_or_else(|| MentorError::Parse("missing tool call".into()))?;

    let feedback: MentorFeedback = serde_json::from_str(&arguments)
        .map_err(|e| MentorError::Parse(format!("invalid tool arguments: {e}")))?;

    if feedback.verdict.trim().is_empty() {
        return Err(MentorError::Parse("verdict is empty".into()));
    }
    Ok(feedback)
}
