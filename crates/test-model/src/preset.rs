use serde::{Deserialize, Serialize};

/// One scripted pick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SelectionStep {
    /// Pick the reply at this index.
    #[serde(rename = "index")]
    Index(usize),
    /// Pick the reply with exactly this text.
    #[serde(rename = "text")]
    Text(String),
}

/// The sequence of picks a [`crate::ScriptedSelector`] replays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionScript {
    /// Steps in replay order.
    pub steps: Vec<SelectionStep>,
    /// Start over from the first step once the script is used up.
    #[serde(default)]
    pub repeat: bool,
}

impl SelectionScript {
    /// Creates a script from the given steps.
    #[inline]
    pub fn with_steps(steps: impl Into<Vec<SelectionStep>>) -> Self {
        Self {
            steps: steps.into(),
            repeat: false,
        }
    }

    /// Creates a script that picks the given indices in order.
    #[inline]
    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::with_steps(
            indices
                .into_iter()
                .map(SelectionStep::Index)
                .collect::<Vec<_>>(),
        )
    }

    /// Makes the script loop forever.
    #[inline]
    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let script = SelectionScript::with_steps([
            SelectionStep::Index(2),
            SelectionStep::Text("Legal terms can be confusing!".to_owned()),
        ])
        .repeating();

        let serialized = serde_json::to_string(&script).unwrap();
        let deserialized: SelectionScript =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(script, deserialized);
    }

    #[test]
    fn test_repeat_defaults_to_false() {
        let script: SelectionScript = serde_json::from_str(
            r#"{ "steps": [{ "type": "index", "data": 1 }] }"#,
        )
        .unwrap();
        assert_eq!(script, SelectionScript::with_indices([1]));
    }
}
