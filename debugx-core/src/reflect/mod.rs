//! Type descriptors
//!
//! Rust has no runtime reflection, so every inspectable type describes itself
//! through [`Reflect`]. The descriptor is usually emitted at build time by
//! `#[derive(Reflect)]` and `#[reflect_members]`, but can be written by hand
//! with the [`TypeInfo`] builder.

mod modifiers;
pub mod value;

use std::rc::Rc;
use std::sync::Arc;

pub use modifiers::{Modifiers, Visibility};
pub use value::{AccessError, FieldRead};

/// A value whose runtime type can be described.
///
/// Object safe: a `&dyn Reflect` reports the concrete type behind it.
pub trait Reflect {
    /// Metadata of the runtime type, members declared directly on it only.
    fn type_info(&self) -> TypeInfo;

    /// Current value of the field at `index` in [`TypeInfo::fields`].
    fn read_field(&self, index: usize) -> FieldRead;
}

/// Constructors, methods and associated constants declared in a type's
/// reflected impl block.
pub trait Members {
    fn declared_constructors() -> Vec<ConstructorInfo>;

    fn declared_methods() -> Vec<MethodInfo>;

    /// Associated constants, reported after the instance fields
    fn declared_constants() -> Vec<ConstantInfo> {
        Vec::new()
    }
}

/// Metadata for a single type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeInfo {
    /// Fully qualified type name
    pub name: String,
    /// Module path, `None` for primitives
    pub package: Option<String>,
    /// Fully qualified name of the declared parent type
    pub superclass: Option<String>,
    /// Implemented traits, spelled as written in `implements(...)`. Paths
    /// are not resolved, so `Clone` stays `Clone`.
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldInfo>,
    /// Associated constants with their values
    pub constants: Vec<ConstantInfo>,
    pub constructors: Vec<ConstructorInfo>,
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Descriptor for `T` with the package taken from its type path
    pub fn of<T: ?Sized>() -> Self {
        let name = std::any::type_name::<T>();
        let mut info = Self::new(name);
        info.package = package_of(name).map(str::to_string);
        info
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_constant(mut self, constant: ConstantInfo) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Take constructors, methods and constants from a `Members` impl
    pub fn with_members<M: Members + ?Sized>(mut self) -> Self {
        self.constants = M::declared_constants();
        self.constructors = M::declared_constructors();
        self.methods = M::declared_methods();
        self
    }
}

/// Field information for reflection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name, or its index for tuple structs
    pub name: String,
    /// Declared type as written
    pub type_name: String,
    pub modifiers: Modifiers,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers,
        }
    }
}

/// Associated constant, a static field whose value is known to the type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantInfo {
    pub field: FieldInfo,
    pub value: FieldRead,
}

impl ConstantInfo {
    pub fn new(field: FieldInfo, value: FieldRead) -> Self {
        Self { field, value }
    }
}

/// Constructor information for reflection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub modifiers: Modifiers,
    /// Parameter types in declaration order
    pub parameters: Vec<String>,
}

impl ConstructorInfo {
    pub fn new(modifiers: Modifiers, parameters: Vec<String>) -> Self {
        Self {
            modifiers,
            parameters,
        }
    }
}

/// Method information for reflection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    /// `()` when no return type is written
    pub return_type: String,
    pub modifiers: Modifiers,
    /// Parameter types in declaration order, receiver excluded
    pub parameters: Vec<String>,
}

impl MethodInfo {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        modifiers: Modifiers,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            modifiers,
            parameters,
        }
    }
}

/// Module part of a type path
///
/// Examples:
/// - `alloc::string::String` -> `alloc::string`
/// - `alloc::vec::Vec<u8>` -> `alloc::vec`
/// - `i32` -> none
/// - `(i32, alloc::string::String)`, `[u8; 4]`, `&str` -> none
pub fn package_of(type_name: &str) -> Option<&str> {
    if type_name.starts_with(&['(', '[', '&', '*'][..]) {
        return None;
    }
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit_once("::").map(|(package, _)| package)
}

macro_rules! reflect_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<$ty>()
                }

                fn read_field(&self, index: usize) -> FieldRead {
                    Err(AccessError::no_such_field(index))
                }
            }
        )*
    };
}

reflect_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
);

impl Reflect for str {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<str>()
    }

    fn read_field(&self, index: usize) -> FieldRead {
        Err(AccessError::no_such_field(index))
    }
}

macro_rules! reflect_pointee {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn type_info(&self) -> TypeInfo {
                    (**self).type_info()
                }

                fn read_field(&self, index: usize) -> FieldRead {
                    (**self).read_field(index)
                }
            }
        )*
    };
}

reflect_pointee!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_info(&self) -> TypeInfo {
        (**self).type_info()
    }

    fn read_field(&self, index: usize) -> FieldRead {
        (**self).read_field(index)
    }
}
