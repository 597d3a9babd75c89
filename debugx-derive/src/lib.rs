//! DebugX derive macros
//!
//! Emits `debugx_core` type descriptors at build time:
//! - `#[derive(Reflect)]` describes a struct and reads its fields
//! - `#[reflect_members]` describes the constructors and methods of an
//!   inherent impl block

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemImpl};

mod attrs;
mod members;
mod reflect;
mod type_name;

/// Derive `debugx_core::Reflect` for a struct.
///
/// Struct attributes: `#[reflect(extends = Base, implements(Clone, Debug), members)]`.
/// Field attributes: `#[reflect(opaque)]`, `#[reflect(display)]`, `#[reflect(debug)]`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Describe the constructors and methods of an inherent impl block.
///
/// Pair with `#[reflect(members)]` on the struct.
#[proc_macro_attribute]
pub fn reflect_members(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        let args = proc_macro2::TokenStream::from(args);
        return syn::Error::new_spanned(args, "#[reflect_members] takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(item as ItemImpl);
    members::expand(&item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
