use serde::{Deserialize, Serialize};

/// A message direction present on a WSDL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Input,
    Output,
    Fault,
}

/// Classification of one WSDL operation by its declared messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub has_input: bool,
    pub has_output: bool,
    pub has_fault: bool,
    /// Holds iff both input and output are declared; one-way otherwise.
    pub is_synchronous: bool,
    /// The kinds present, in declaration order.
    pub message_types: Vec<MessageKind>,
}

/// The transport action bound to one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationAction {
    pub operation: String,
    /// May be empty: an explicitly declared `soapAction=""` is a valid
    /// value, distinct from the operation carrying no declaration at all
    /// (such operations are omitted from the action list).
    pub action: String,
}

/// Namespace metadata read off a WSDL root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    pub uri: String,
    /// The prefix bound to `uri` on the root, empty when none is.
    pub prefix: String,
    /// First SOAP address location found in the document.
    pub schema_location: String,
}
