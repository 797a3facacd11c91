//! Leaf projection: the type is read through a plain shared reference.

use super::utils::view_lifetime;
use crate::parse::ProjectionInput;
use proc_macro2::TokenStream;
use quote::quote;

/// Generate `impl DeepReadonly` with `Projection<'a> = &'a Self`.
pub fn generate(input: &ProjectionInput) -> TokenStream {
    let name = &input.ident;
    let lifetime = view_lifetime();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::tirea_frozen::DeepReadonly for #name #ty_generics #where_clause {
            type Projection<#lifetime> = &#lifetime Self where Self: #lifetime;

            #[inline]
            fn project(&self) -> Self::Projection<'_> {
                self
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
    }
}
