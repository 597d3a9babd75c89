//! DebugX Core Library
//!
//! Runtime object inspection for debugger front-ends:
//! - Type descriptors (`Reflect`, `TypeInfo`) emitted at build time
//! - The inspector that snapshots an object into a JSON document
//! - The host-facing bridge
//! - Derive macros (`derive` feature, on by default)

// Lets the derive output's `::debugx_core` paths resolve inside this crate too.
extern crate self as debugx_core;

pub mod bridge;
pub mod inspector;
pub mod protocol;
pub mod reflect;

pub use bridge::{Bridge, BridgeError, DebugxBridge};
pub use inspector::{inspect, inspect_value};
pub use protocol::{InspectionResult, ObjectReport, Status};
pub use reflect::{
    AccessError, ConstantInfo, ConstructorInfo, FieldInfo, FieldRead, Members, MethodInfo,
    Modifiers, Reflect, TypeInfo, Visibility,
};

#[cfg(feature = "derive")]
pub use debugx_derive::{reflect_members, Reflect};
