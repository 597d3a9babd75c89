//! Object inspector
//!
//! Snapshots an object's runtime type and field values into an
//! [`InspectionResult`].

use tracing::{debug, warn};

use crate::protocol::{
    ConstructorDescriptor, FieldDescriptor, InspectionResult, MethodDescriptor, ObjectReport,
    ACCESS_DENIED, NO_PACKAGE, NO_SUPERCLASS, NULL_VALUE,
};
use crate::reflect::{FieldInfo, FieldRead, Reflect};

/// Describe `object`, or produce the error document when it is absent.
///
/// Only members declared directly on the runtime type are listed. A field
/// that cannot be read is reported as `"Access denied"` and never aborts the
/// inspection.
pub fn inspect(object: Option<&dyn Reflect>) -> InspectionResult {
    let Some(object) = object else {
        debug!("Inspection requested for a null object");
        return InspectionResult::null_object();
    };

    let info = object.type_info();
    debug!("Inspecting {}", info.name);

    let constants = info
        .constants
        .iter()
        .map(|constant| describe_field(&constant.field, constant.value.clone()));

    let fields: Vec<FieldDescriptor> = info
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| describe_field(field, object.read_field(index)))
        .chain(constants)
        .collect();

    let constructors = info
        .constructors
        .iter()
        .map(|ctor| ConstructorDescriptor {
            name: info.name.clone(),
            modifiers: ctor.modifiers.to_string(),
            parameters: ctor.parameters.clone(),
        })
        .collect();

    let methods: Vec<MethodDescriptor> = info
        .methods
        .iter()
        .map(|method| MethodDescriptor {
            name: method.name.clone(),
            return_type: method.return_type.clone(),
            modifiers: method.modifiers.to_string(),
            parameters: method.parameters.clone(),
        })
        .collect();

    debug!(
        "Inspected {}: {} fields, {} methods",
        info.name,
        fields.len(),
        methods.len()
    );

    InspectionResult::Object(ObjectReport {
        package_name: info.package.unwrap_or_else(|| NO_PACKAGE.to_string()),
        superclass_name: info.superclass.unwrap_or_else(|| NO_SUPERCLASS.to_string()),
        class_name: info.name,
        interfaces: info.interfaces,
        fields,
        constructors,
        methods,
    })
}

/// Inspect a value whose static type is known
pub fn inspect_value<T: Reflect>(object: &T) -> InspectionResult {
    inspect(Some(object as &dyn Reflect))
}

fn describe_field(field: &FieldInfo, read: FieldRead) -> FieldDescriptor {
    let value = match read {
        Ok(Some(value)) => value,
        Ok(None) => NULL_VALUE.to_string(),
        Err(e) => {
            warn!("Cannot read field {}: {}", field.name, e);
            ACCESS_DENIED.to_string()
        }
    };

    FieldDescriptor {
        name: field.name.clone(),
        type_name: field.type_name.clone(),
        modifiers: field.modifiers.to_string(),
        value,
    }
}
