//! View generation for structs with named fields.
//!
//! `{Name}View<'a>` wraps `&'a Name` and exposes one accessor per included
//! field. Accessors borrow for the full `'a`, so values read from a view
//! outlive the view itself.

use super::utils::{
    bound_predicates, project_expr, projected_type, projection_predicates, view_generics,
    view_lifetime, where_clause_with,
};
use crate::field_kind::FieldKind;
use crate::parse::{FieldInput, ProjectionInput};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generate the view struct and the `DeepReadonly` trait implementation.
pub fn generate(input: &ProjectionInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let view = input.view_ident()?;
    let lifetime = view_lifetime();

    let generics = view_generics(&input.generics);
    let (view_impl_generics, view_ty_generics, _) = generics.split_for_impl();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let decl_where = where_clause_with(&input.generics, &[]);
    let accessor_where = where_clause_with(&input.generics, &projection_predicates(input)?);
    let project_where = where_clause_with(&input.generics, &bound_predicates(input)?);

    let accessors: Vec<TokenStream> = input
        .all_fields()
        .into_iter()
        .filter(|f| f.is_included())
        .map(generate_accessors)
        .collect();

    let doc = format!("Deep read-only view of [`{}`].", name);

    Ok(quote! {
        #[doc = #doc]
        #vis struct #view #generics #decl_where {
            inner: &#lifetime #name #ty_generics,
        }

        #[automatically_derived]
        impl #view_impl_generics ::core::clone::Clone for #view #view_ty_generics #decl_where {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        #[automatically_derived]
        impl #view_impl_generics ::core::marker::Copy for #view #view_ty_generics #decl_where {}

        #[allow(dead_code)]
        impl #view_impl_generics #view #view_ty_generics #accessor_where {
            /// The underlying value.
            #[inline]
            #vis fn get(&self) -> &#lifetime #name #ty_generics {
                self.inner
            }

            #(#accessors)*
        }

        #[automatically_derived]
        impl #impl_generics ::tirea_frozen::DeepReadonly for #name #ty_generics #project_where {
            type Projection<#lifetime> = #view #view_ty_generics where Self: #lifetime;

            #[inline]
            fn project(&self) -> Self::Projection<'_> {
                #view { inner: self }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::convert::From<::tirea_frozen::Frozen<#name #ty_generics>>
            for #name #ty_generics #where_clause
        {
            #[inline]
            fn from(frozen: ::tirea_frozen::Frozen<#name #ty_generics>) -> Self {
                frozen.into_inner()
            }
        }
    })
}

/// Generate the accessor for a field, plus `has_*` / `*_len` helpers.
fn generate_accessors(field: &FieldInput) -> TokenStream {
    let (Some(field_name), Some(accessor)) = (field.ident.as_ref(), field.accessor()) else {
        return TokenStream::new();
    };
    let vis = &field.vis;
    let ty = projected_type(field);
    let read = project_expr(field, quote! { &self.inner.#field_name });

    let mut tokens = quote! {
        #[inline]
        #vis fn #accessor(&self) -> #ty {
            #read
        }
    };

    let kind = FieldKind::from_type(&field.ty);

    if kind.is_option() {
        let has = format_ident!("has_{}", accessor);
        tokens.extend(quote! {
            #[inline]
            #vis fn #has(&self) -> bool {
                self.inner.#field_name.is_some()
            }
        });
    }

    if kind.is_collection() {
        let len = format_ident!("{}_len", accessor);
        tokens.extend(quote! {
            #[inline]
            #vis fn #len(&self) -> usize {
                self.inner.#field_name.len()
            }
        });
    }

    tokens
}
