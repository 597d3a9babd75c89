//! `#[reflect_members]` expansion

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ImplItemConst, ImplItemFn, ItemImpl, ReturnType, Type};

use crate::type_name::{classify, read_tokens, type_to_string, visibility_tokens};

pub fn expand(item: &ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[reflect_members] expects an inherent impl block",
        ));
    }

    let self_ident = self_type_ident(&item.self_ty)?;

    let mut constructors = Vec::new();
    let mut methods = Vec::new();

    let constants: Vec<TokenStream> = item
        .items
        .iter()
        .filter_map(|impl_item| match impl_item {
            ImplItem::Const(constant) => Some(constant_info(constant)),
            _ => None,
        })
        .collect();

    for func in item.items.iter().filter_map(|impl_item| match impl_item {
        ImplItem::Fn(func) => Some(func),
        _ => None,
    }) {
        let parameters = parameter_types(func);
        let is_constructor =
            func.sig.receiver().is_none() && returns_self(&func.sig.output, self_ident);
        let modifiers = modifiers(func, is_constructor);

        if is_constructor {
            constructors.push(quote! {
                ::debugx_core::reflect::ConstructorInfo::new(
                    #modifiers,
                    ::std::vec![#( ::std::string::String::from(#parameters) ),*],
                )
            });
        } else {
            let name = func.sig.ident.unraw().to_string();
            let return_type = match &func.sig.output {
                ReturnType::Default => "()".to_string(),
                ReturnType::Type(_, ty) => type_to_string(ty),
            };
            methods.push(quote! {
                ::debugx_core::reflect::MethodInfo::new(
                    #name,
                    #return_type,
                    #modifiers,
                    ::std::vec![#( ::std::string::String::from(#parameters) ),*],
                )
            });
        }
    }

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let self_ty = &item.self_ty;

    Ok(quote! {
        #item

        impl #impl_generics ::debugx_core::reflect::Members for #self_ty #where_clause {
            fn declared_constructors() -> ::std::vec::Vec<::debugx_core::reflect::ConstructorInfo> {
                ::std::vec![#( #constructors ),*]
            }

            fn declared_methods() -> ::std::vec::Vec<::debugx_core::reflect::MethodInfo> {
                ::std::vec![#( #methods ),*]
            }

            fn declared_constants() -> ::std::vec::Vec<::debugx_core::reflect::ConstantInfo> {
                ::std::vec![#( #constants ),*]
            }
        }
    })
}

/// An associated const is a static field, e.g. `pub const MAX: u32` is
/// `pub static const`
fn constant_info(constant: &ImplItemConst) -> TokenStream {
    let ident = &constant.ident;
    let name = ident.unraw().to_string();
    let type_name = type_to_string(&constant.ty);
    let vis = visibility_tokens(&constant.vis);

    let (kind, inner) = classify(&constant.ty);
    let read = read_tokens(kind, inner, quote!(&Self::#ident));

    quote! {
        ::debugx_core::reflect::ConstantInfo::new(
            ::debugx_core::reflect::FieldInfo::new(
                #name,
                #type_name,
                ::debugx_core::reflect::Modifiers::new(#vis).with_static().with_const(),
            ),
            #read,
        )
    }
}

fn self_type_ident(self_ty: &Type) -> syn::Result<&Ident> {
    if let Type::Path(type_path) = self_ty {
        if let Some(segment) = type_path.path.segments.last() {
            return Ok(&segment.ident);
        }
    }
    Err(syn::Error::new_spanned(
        self_ty,
        "#[reflect_members] expects a named struct type",
    ))
}

/// Parameter types in declaration order, receiver excluded
fn parameter_types(func: &ImplItemFn) -> Vec<String> {
    func.sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat) => Some(type_to_string(&pat.ty)),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

/// `Self` or the type itself, e.g. `fn new() -> Self` or
/// `fn new() -> crate::model::Session`
fn returns_self(output: &ReturnType, self_ident: &Ident) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(type_path) = &**ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }

    let path = &type_path.path;
    path.is_ident("Self")
        || path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == *self_ident)
}

fn modifiers(func: &ImplItemFn, is_constructor: bool) -> TokenStream {
    let vis = visibility_tokens(&func.vis);
    let sig = &func.sig;

    let mut qualifiers = Vec::new();
    if sig.receiver().is_none() && !is_constructor {
        qualifiers.push(quote!(.with_static()));
    }
    if sig.constness.is_some() {
        qualifiers.push(quote!(.with_const()));
    }
    if sig.asyncness.is_some() {
        qualifiers.push(quote!(.with_async()));
    }
    if sig.unsafety.is_some() {
        qualifiers.push(quote!(.with_unsafe()));
    }
    if sig.abi.is_some() {
        qualifiers.push(quote!(.with_extern()));
    }

    quote!(::debugx_core::reflect::Modifiers::new(#vis) #( #qualifiers )*)
}
