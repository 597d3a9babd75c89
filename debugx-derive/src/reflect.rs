//! `#[derive(Reflect)]` expansion

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Field, Index, Member, Type};

use crate::attrs::{field_kind, StructAttrs};
use crate::type_name::{
    classify, is_string_like, read_tokens, tokens_to_string, type_to_string, visibility_tokens,
    ValueKind,
};

/// One declared field and how to read it
struct FieldPlan<'a> {
    name: String,
    member: Member,
    ty: &'a Type,
    kind: ValueKind,
    inner: Option<&'a Type>,
}

impl<'a> FieldPlan<'a> {
    fn new(index: usize, field: &'a Field) -> syn::Result<Self> {
        let (name, member) = match &field.ident {
            Some(ident) => (ident.unraw().to_string(), Member::Named(ident.clone())),
            None => (index.to_string(), Member::Unnamed(Index::from(index))),
        };

        let (kind, inner) = match field_kind(&field.attrs)? {
            Some(forced) => (forced, None),
            None => classify(&field.ty),
        };

        Ok(Self {
            name,
            member,
            ty: &field.ty,
            kind,
            inner,
        })
    }

    fn read(&self) -> TokenStream {
        let member = &self.member;
        read_tokens(self.kind, self.inner, quote!(&self.#member))
    }

    /// Bound the rendered type needs when the struct is generic
    fn bound(&self) -> Option<syn::WherePredicate> {
        let ty = self.ty;
        match (self.kind, self.inner) {
            (ValueKind::Opaque, _) => None,
            (ValueKind::Display, _) => Some(parse_quote!(#ty: ::core::fmt::Display)),
            (_, Some(inner)) if is_string_like(inner) => {
                Some(parse_quote!(#inner: ::core::fmt::Display))
            }
            (_, Some(inner)) => Some(parse_quote!(#inner: ::core::fmt::Debug)),
            (_, None) => Some(parse_quote!(#ty: ::core::fmt::Debug)),
        }
    }
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect can only be derived for structs",
        ));
    };

    let attrs = StructAttrs::parse(&input.attrs)?;
    let ident = &input.ident;

    let plans = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| FieldPlan::new(index, field))
        .collect::<syn::Result<Vec<_>>>()?;

    let mut generics = input.generics.clone();
    let is_generic = !generics.params.is_empty();
    if is_generic {
        let where_clause = generics.make_where_clause();
        where_clause
            .predicates
            .extend(plans.iter().filter_map(FieldPlan::bound));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let superclass = attrs.extends.as_ref().map(|base| {
        quote!(.with_superclass(::core::any::type_name::<#base>()))
    });

    let interfaces = attrs
        .implements
        .iter()
        .map(|path| tokens_to_string(path.to_token_stream()));

    let members = attrs
        .members
        .then(|| quote!(.with_members::<Self>()));

    let field_infos = data.fields.iter().zip(&plans).map(|(field, plan)| {
        let name = &plan.name;
        let type_name = type_to_string(&field.ty);
        let vis = visibility_tokens(&field.vis);
        quote! {
            .with_field(::debugx_core::reflect::FieldInfo::new(
                #name,
                #type_name,
                ::debugx_core::reflect::Modifiers::new(#vis),
            ))
        }
    });

    let indices = 0..plans.len();
    let reads = plans.iter().map(FieldPlan::read);

    // Generic structs cannot name `Self` in a free const, so only concrete
    // ones get the compile-time check.
    let assertions = if is_generic {
        Vec::new()
    } else {
        attrs
            .implements
            .iter()
            .map(|path| {
                quote! {
                    const _: fn() = || {
                        fn assert_implements<T: ?Sized + #path>() {}
                        assert_implements::<#ident>();
                    };
                }
            })
            .collect()
    };

    Ok(quote! {
        impl #impl_generics ::debugx_core::reflect::Reflect for #ident #ty_generics #where_clause {
            fn type_info(&self) -> ::debugx_core::reflect::TypeInfo {
                ::debugx_core::reflect::TypeInfo::new(::core::any::type_name::<Self>())
                    .with_package(::core::module_path!())
                    #superclass
                    #( .with_interface(#interfaces) )*
                    #( #field_infos )*
                    #members
            }

            fn read_field(&self, index: usize) -> ::debugx_core::reflect::FieldRead {
                match index {
                    #( #indices => #reads, )*
                    _ => ::core::result::Result::Err(
                        ::debugx_core::reflect::AccessError::no_such_field(index),
                    ),
                }
            }
        }

        #( #assertions )*
    })
}
