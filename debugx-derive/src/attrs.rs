//! `#[reflect(...)]` attribute parsing

use syn::{Attribute, Path, Type};

use crate::type_name::ValueKind;

/// Options from `#[reflect(...)]` on the struct
#[derive(Default)]
pub struct StructAttrs {
    /// `extends = Base`
    pub extends: Option<Type>,
    /// `implements(TraitA, TraitB)`
    pub implements: Vec<Path>,
    /// `members`: a `#[reflect_members]` impl block exists
    pub members: bool,
}

impl StructAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("extends") {
                    if result.extends.is_some() {
                        return Err(meta.error("duplicate `extends`"));
                    }
                    result.extends = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("implements") {
                    meta.parse_nested_meta(|inner| {
                        result.implements.push(inner.path);
                        Ok(())
                    })
                } else if meta.path.is_ident("members") {
                    result.members = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported reflect attribute, expected `extends`, `implements` or `members`",
                    ))
                }
            })?;
        }

        Ok(result)
    }
}

/// Renderer forced by `#[reflect(opaque | display | debug)]` on a field
pub fn field_kind(attrs: &[Attribute]) -> syn::Result<Option<ValueKind>> {
    let mut kind = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            let forced = if meta.path.is_ident("opaque") {
                ValueKind::Opaque
            } else if meta.path.is_ident("display") {
                ValueKind::Display
            } else if meta.path.is_ident("debug") {
                ValueKind::Debug
            } else {
                return Err(meta.error(
                    "unsupported field attribute, expected `opaque`, `display` or `debug`",
                ));
            };

            if kind.replace(forced).is_some() {
                return Err(meta.error("a field takes a single renderer"));
            }
            Ok(())
        })?;
    }

    Ok(kind)
}
