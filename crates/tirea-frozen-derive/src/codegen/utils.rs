//! Generics and type helpers shared by the view generators.

use crate::parse::{FieldInput, ProjectionInput};
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{parse_quote, GenericParam, Generics, Lifetime, Token, WherePredicate};

/// Lifetime parameter of every generated view.
pub fn view_lifetime() -> Lifetime {
    Lifetime::new("'__frozen", proc_macro2::Span::call_site())
}

/// The input generics with the view lifetime prepended.
pub fn view_generics(generics: &Generics) -> Generics {
    let lifetime = view_lifetime();
    let mut out = generics.clone();
    out.params.insert(0, parse_quote!(#lifetime));
    out
}

/// Trait bounds of the projection: the user's `bound`, or
/// `T: DeepReadonly` for every type parameter.
pub fn bound_predicates(input: &ProjectionInput) -> syn::Result<Vec<WherePredicate>> {
    match &input.bound {
        Some(bound) => Ok(Punctuated::<WherePredicate, Token![,]>::parse_terminated
            .parse_str(bound)
            .map_err(|e| {
                syn::Error::new_spanned(
                    &input.ident,
                    format!("#[frozen(bound = \"{}\")] is not a valid where clause: {}", bound, e),
                )
            })?
            .into_iter()
            .collect()),
        None => Ok(input
            .generics
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                parse_quote!(#ident: ::tirea_frozen::DeepReadonly)
            })
            .collect()),
    }
}

/// Every type and lifetime parameter outlives the view lifetime.
pub fn outlives_predicates(generics: &Generics) -> Vec<WherePredicate> {
    let lifetime = view_lifetime();
    generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                Some(parse_quote!(#ident: #lifetime))
            }
            GenericParam::Lifetime(lt) => {
                let param_lifetime = &lt.lifetime;
                Some(parse_quote!(#param_lifetime: #lifetime))
            }
            GenericParam::Const(_) => None,
        })
        .collect()
}

/// Bounds plus outlives predicates, for items generic over the view lifetime.
pub fn projection_predicates(input: &ProjectionInput) -> syn::Result<Vec<WherePredicate>> {
    let mut predicates = bound_predicates(input)?;
    predicates.extend(outlives_predicates(&input.generics));
    Ok(predicates)
}

/// The where clause of `generics` extended with `extra`.
pub fn where_clause_with(generics: &Generics, extra: &[WherePredicate]) -> TokenStream {
    let existing = generics
        .where_clause
        .as_ref()
        .map(|w| w.predicates.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    if existing.is_empty() && extra.is_empty() {
        return TokenStream::new();
    }

    quote! { where #(#existing,)* #(#extra,)* }
}

/// Type of a field as seen through the view.
pub fn projected_type(field: &FieldInput) -> TokenStream {
    let lifetime = view_lifetime();
    let ty = &field.ty;
    if field.opaque {
        quote! { &#lifetime #ty }
    } else {
        quote! { <#ty as ::tirea_frozen::DeepReadonly>::Projection<#lifetime> }
    }
}

/// Expression producing a field's view from a reference to it.
pub fn project_expr(field: &FieldInput, place: TokenStream) -> TokenStream {
    if field.opaque {
        place
    } else {
        quote! { ::tirea_frozen::DeepReadonly::project(#place) }
    }
}
