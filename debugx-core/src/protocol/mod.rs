//! Inspection document
//!
//! Defines the JSON shape handed to the debugger front-end.

use serde::{Deserialize, Serialize};

/// Sentinel for a type without a module path
pub const NO_PACKAGE: &str = "No package";
/// Sentinel for a root type
pub const NO_SUPERCLASS: &str = "No superclass";
/// Sentinel for a field that could not be read
pub const ACCESS_DENIED: &str = "Access denied";
/// Sentinel for an absent field value
pub const NULL_VALUE: &str = "null";
/// Message of the error document for an absent object
pub const NULL_OBJECT_MESSAGE: &str = "Provided object is null.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Snapshot of one inspected object, or the error document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InspectionResult {
    Error { status: Status, message: String },
    Object(ObjectReport),
}

impl InspectionResult {
    pub fn error(msg: impl Into<String>) -> Self {
        InspectionResult::Error {
            status: Status::Error,
            message: msg.into(),
        }
    }

    pub fn null_object() -> Self {
        Self::error(NULL_OBJECT_MESSAGE)
    }

    /// The success document carries no `status` key; this reports it anyway.
    pub fn status(&self) -> Status {
        match self {
            InspectionResult::Error { status, .. } => *status,
            InspectionResult::Object(_) => Status::Ok,
        }
    }

    pub fn report(&self) -> Option<&ObjectReport> {
        match self {
            InspectionResult::Object(report) => Some(report),
            InspectionResult::Error { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReport {
    pub class_name: String,
    pub package_name: String,
    pub superclass_name: String,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDescriptor>,
    pub constructors: Vec<ConstructorDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub modifiers: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    /// Fully qualified name of the declaring type
    pub name: String,
    pub modifiers: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: String,
    pub modifiers: String,
    pub parameters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> ObjectReport {
        ObjectReport {
            class_name: "app::Counter".to_string(),
            package_name: "app".to_string(),
            superclass_name: NO_SUPERCLASS.to_string(),
            interfaces: vec![],
            fields: vec![FieldDescriptor {
                name: "count".to_string(),
                type_name: "u32".to_string(),
                modifiers: "private".to_string(),
                value: "42".to_string(),
            }],
            constructors: vec![ConstructorDescriptor {
                name: "app::Counter".to_string(),
                modifiers: "pub".to_string(),
                parameters: vec!["u32".to_string()],
            }],
            methods: vec![MethodDescriptor {
                name: "get".to_string(),
                return_type: "u32".to_string(),
                modifiers: "pub".to_string(),
                parameters: vec![],
            }],
        }
    }

    #[test]
    fn test_null_object_document() {
        let json = InspectionResult::null_object().to_json().unwrap();
        assert_eq!(
            json,
            json!({"status": "error", "message": "Provided object is null."})
        );
    }

    #[test]
    fn test_object_document_keys() {
        let json = InspectionResult::Object(sample_report()).to_json().unwrap();

        assert!(json.get("status").is_none());
        assert_eq!(json["className"], "app::Counter");
        assert_eq!(json["packageName"], "app");
        assert_eq!(json["superclassName"], "No superclass");
        assert_eq!(json["interfaces"], json!([]));
        assert_eq!(
            json["fields"][0],
            json!({"name": "count", "type": "u32", "modifiers": "private", "value": "42"})
        );
        assert_eq!(
            json["constructors"][0],
            json!({"name": "app::Counter", "modifiers": "pub", "parameters": ["u32"]})
        );
        assert_eq!(
            json["methods"][0],
            json!({"name": "get", "returnType": "u32", "modifiers": "pub", "parameters": []})
        );
    }

    #[test]
    fn test_document_parses_back() {
        let text = InspectionResult::Object(sample_report())
            .to_json_string()
            .unwrap();
        let parsed: InspectionResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status(), Status::Ok);
        assert_eq!(parsed.report().unwrap().fields[0].value, "42");

        let text = InspectionResult::null_object().to_json_string().unwrap();
        let parsed: InspectionResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status(), Status::Error);
    }
}
