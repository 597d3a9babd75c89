//! Source spelling of types and visibilities

use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{GenericArgument, PathArguments, Type};

/// How a field's value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Debug,
    Display,
    Optional,
    RefCell,
    Mutex,
    RwLock,
    Opaque,
}

impl ValueKind {
    /// Name of the `debugx_core::reflect::value` helper
    pub fn helper(self) -> &'static str {
        match self {
            ValueKind::Debug => "debug",
            ValueKind::Display => "display",
            ValueKind::Optional => "optional",
            ValueKind::RefCell => "ref_cell",
            ValueKind::Mutex => "mutex",
            ValueKind::RwLock => "rw_lock",
            ValueKind::Opaque => "opaque",
        }
    }
}

/// Type as written, with the token spacing tightened
///
/// Examples:
/// - `Vec < u8 >` -> `Vec<u8>`
/// - `std :: sync :: Arc < str >` -> `std::sync::Arc<str>`
/// - `& 'a mut T` -> `&'a mut T`
pub fn type_to_string(ty: &Type) -> String {
    tokens_to_string(ty.to_token_stream())
}

pub fn tokens_to_string(tokens: TokenStream) -> String {
    let mut result = tokens.to_string();

    let replacements = [
        (" :: ", "::"),
        (":: ", "::"),
        (" < ", "<"),
        ("< ", "<"),
        (" <", "<"),
        (" >", ">"),
        ("& ", "&"),
        (" ,", ","),
        (" ;", ";"),
        ("[ ", "["),
        (" ]", "]"),
        ("( ", "("),
        (" )", ")"),
    ];

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

/// Pick the renderer for a field from its declared type.
///
/// Returns the wrapped type for `Option`, `RefCell`, `Mutex` and `RwLock`.
pub fn classify(ty: &Type) -> (ValueKind, Option<&Type>) {
    match ty {
        Type::Reference(reference) => match &*reference.elem {
            Type::Path(path) if path.qself.is_none() && path.path.is_ident("str") => {
                (ValueKind::Display, None)
            }
            _ => (ValueKind::Debug, None),
        },

        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(segment) = type_path.path.segments.last() else {
                return (ValueKind::Debug, None);
            };

            let wrapper = match segment.ident.to_string().as_str() {
                "String" | "str" | "char" => return (ValueKind::Display, None),
                "Option" => ValueKind::Optional,
                "RefCell" => ValueKind::RefCell,
                "Mutex" => ValueKind::Mutex,
                "RwLock" => ValueKind::RwLock,
                _ => return (ValueKind::Debug, None),
            };

            match single_type_argument(&segment.arguments) {
                Some(inner) => (wrapper, Some(inner)),
                None => (ValueKind::Debug, None),
            }
        }

        Type::Paren(paren) => classify(&paren.elem),
        Type::Group(group) => classify(&group.elem),

        _ => (ValueKind::Debug, None),
    }
}

/// String-like types render through `Display`, everything else through `Debug`
pub fn is_string_like(ty: &Type) -> bool {
    classify(ty).0 == ValueKind::Display
}

/// Expression producing a `FieldRead` for `value`, a reference to the field
///
/// Wrappers render the value they hold with the rule of the wrapped type, so
/// `Some(String)` reads the same as a plain `String`.
pub fn read_tokens(kind: ValueKind, inner: Option<&Type>, value: TokenStream) -> TokenStream {
    let module = quote!(::debugx_core::reflect::value);
    let helper = format_ident!("{}", kind.helper());

    match kind {
        ValueKind::Opaque => quote!(#module::opaque()),
        ValueKind::Debug | ValueKind::Display => quote!(#module::#helper(#value)),
        ValueKind::Optional | ValueKind::RefCell | ValueKind::Mutex | ValueKind::RwLock => {
            let render = if inner.is_some_and(is_string_like) {
                format_ident!("display_string")
            } else {
                format_ident!("debug_string")
            };
            quote!(#module::#helper(#value, #module::#render))
        }
    }
}

fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

/// `debugx_core::reflect::Visibility` expression for a declared visibility
pub fn visibility_tokens(vis: &syn::Visibility) -> TokenStream {
    let path = quote!(::debugx_core::reflect::Visibility);

    match vis {
        syn::Visibility::Public(_) => quote!(#path::Public),
        syn::Visibility::Inherited => quote!(#path::Private),
        syn::Visibility::Restricted(restricted) => {
            let target = &restricted.path;
            if target.is_ident("crate") {
                quote!(#path::Crate)
            } else if target.is_ident("super") {
                quote!(#path::Super)
            } else if target.is_ident("self") {
                quote!(#path::Private)
            } else {
                let text = tokens_to_string(target.to_token_stream());
                quote!(#path::Restricted(::std::string::String::from(#text)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_type_to_string() {
        let ty: Type = parse_quote!(Vec<u8>);
        assert_eq!(type_to_string(&ty), "Vec<u8>");

        let ty: Type = parse_quote!(std::collections::HashMap<String, Vec<u32>>);
        assert_eq!(
            type_to_string(&ty),
            "std::collections::HashMap<String, Vec<u32>>"
        );

        let ty: Type = parse_quote!(&mut [u8; 4]);
        assert_eq!(type_to_string(&ty), "&mut [u8; 4]");

        let ty: Type = parse_quote!((i32, bool));
        assert_eq!(type_to_string(&ty), "(i32, bool)");
    }

    #[test]
    fn test_classify_wrappers() {
        let ty: Type = parse_quote!(Option<String>);
        let (kind, inner) = classify(&ty);
        assert_eq!(kind, ValueKind::Optional);
        assert_eq!(type_to_string(inner.unwrap()), "String");

        let ty: Type = parse_quote!(std::cell::RefCell<Vec<u8>>);
        assert_eq!(classify(&ty).0, ValueKind::RefCell);

        let ty: Type = parse_quote!(Mutex<u32>);
        assert_eq!(classify(&ty).0, ValueKind::Mutex);

        let ty: Type = parse_quote!(RwLock<u32>);
        assert_eq!(classify(&ty).0, ValueKind::RwLock);
    }

    #[test]
    fn test_classify_plain() {
        let ty: Type = parse_quote!(String);
        assert_eq!(classify(&ty), (ValueKind::Display, None));

        let ty: Type = parse_quote!(&'static str);
        assert_eq!(classify(&ty), (ValueKind::Display, None));

        let ty: Type = parse_quote!(u64);
        assert_eq!(classify(&ty), (ValueKind::Debug, None));

        // Unexpected arity falls back to Debug
        let ty: Type = parse_quote!(Option);
        assert_eq!(classify(&ty), (ValueKind::Debug, None));
    }

    #[test]
    fn test_wrapped_strings_render_through_display() {
        let ty: Type = parse_quote!(Option<String>);
        let (kind, inner) = classify(&ty);
        let tokens = read_tokens(kind, inner, quote!(&self.nickname)).to_string();
        assert!(tokens.contains("value :: optional (& self . nickname"));
        assert!(tokens.ends_with("value :: display_string)"));

        let ty: Type = parse_quote!(Mutex<&'static str>);
        let (kind, inner) = classify(&ty);
        let tokens = read_tokens(kind, inner, quote!(&self.state)).to_string();
        assert!(tokens.ends_with("value :: display_string)"));

        let ty: Type = parse_quote!(RefCell<Vec<u8>>);
        let (kind, inner) = classify(&ty);
        let tokens = read_tokens(kind, inner, quote!(&self.cache)).to_string();
        assert!(tokens.ends_with("value :: debug_string)"));
    }

    #[test]
    fn test_visibility_tokens() {
        let vis: syn::Visibility = parse_quote!(pub);
        assert!(visibility_tokens(&vis).to_string().ends_with("Public"));

        let vis: syn::Visibility = parse_quote!(pub(crate));
        assert!(visibility_tokens(&vis).to_string().ends_with("Crate"));

        let vis: syn::Visibility = syn::Visibility::Inherited;
        assert!(visibility_tokens(&vis).to_string().ends_with("Private"));

        let vis: syn::Visibility = parse_quote!(pub(in crate::session));
        let tokens = visibility_tokens(&vis).to_string();
        assert!(tokens.contains("Restricted"));
        assert!(tokens.contains("\"crate::session\""));
    }
}
