use serde_json::{Map, Value};

/// One intent invocation received from the conversational agent.
///
/// The platform's request envelope is adapted down to the two things
/// fulfillment needs: the recognized intent name and its captured
/// parameters. Immutable for the lifetime of the request.
#[derive(Debug, Clone)]
pub struct IntentInvocation {
    pub intent_name: String,
    pub parameters: Map<String, Value>,
}

impl IntentInvocation {
    pub fn new(intent_name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            intent_name: intent_name.into(),
            parameters,
        }
    }

    /// Read a captured parameter as a string.
    ///
    /// Free-text captures arrive as strings, but numeric entity types come
    /// through as JSON numbers; both are accepted. Whole numbers render
    /// without a decimal point. Empty strings count as absent.
    pub fn param_str(&self, name: &str) -> Option<String> {
        match self.parameters.get(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(i.to_string());
                }
                let f = n.as_f64()?;
                if f.fract() == 0.0 {
                    Some(format!("{}", f as i64))
                } else {
                    Some(f.to_string())
                }
            }
            _ => None,
        }
    }
}

/// The text sent back to the conversational agent.
///
/// Terminal: produced exactly once per invocation, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
