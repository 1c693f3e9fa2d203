//! CloudFormation stack models

/// Key of the stack output holding the deployed API endpoint
pub const SERVICE_ENDPOINT_OUTPUT: &str = "ServiceEndpoint";

/// The parts of a stack description needed to locate the API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackDescription {
    /// `None` when the stack record carries no outputs collection at all
    pub outputs: Option<Vec<StackOutput>>,
}

/// A single stack output entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub output_key: Option<String>,
    pub output_value: Option<String>,
}

impl StackOutput {
    #[cfg(test)]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            output_key: Some(key.into()),
            output_value: Some(value.into()),
        }
    }
}

impl StackDescription {
    /// Stack with the given outputs
    #[cfg(test)]
    pub fn with_outputs(outputs: Vec<StackOutput>) -> Self {
        Self {
            outputs: Some(outputs),
        }
    }

    /// Find an output entry by key
    pub fn output(&self, key: &str) -> Option<&StackOutput> {
        self.outputs
            .as_deref()?
            .iter()
            .find(|output| output.output_key.as_deref() == Some(key))
    }
}
