//! View generation for enums with data-carrying variants.
//!
//! The view mirrors the enum variant by variant, with each payload replaced
//! by its projection, so callers `match` on the view.

use super::utils::{
    bound_predicates, project_expr, projected_type, projection_predicates, view_generics,
    where_clause_with,
};
use crate::parse::{FieldInput, ProjectionInput, VariantInput};
use darling::ast::Style;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generate the view enum and the `DeepReadonly` trait implementation.
pub fn generate(input: &ProjectionInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let view = input.view_ident()?;

    let variants = input.data.as_ref().take_enum().unwrap_or_default();

    let generics = view_generics(&input.generics);
    let (view_impl_generics, view_ty_generics, _) = generics.split_for_impl();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let view_where = where_clause_with(&input.generics, &projection_predicates(input)?);
    let project_where = where_clause_with(&input.generics, &bound_predicates(input)?);

    let declarations = variants.iter().map(|v| declare_variant(v));
    let arms = variants.iter().map(|v| project_arm(&view, v));

    let doc = format!("Deep read-only view of [`{}`].", name);

    Ok(quote! {
        #[doc = #doc]
        #vis enum #view #generics #view_where {
            #(#declarations,)*
        }

        #[automatically_derived]
        impl #view_impl_generics ::core::clone::Clone for #view #view_ty_generics #view_where {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        #[automatically_derived]
        impl #view_impl_generics ::core::marker::Copy for #view #view_ty_generics #view_where {}

        #[automatically_derived]
        impl #impl_generics ::tirea_frozen::DeepReadonly for #name #ty_generics #project_where {
            type Projection<'__frozen> = #view #view_ty_generics where Self: '__frozen;

            fn project(&self) -> Self::Projection<'_> {
                match self {
                    #(#arms,)*
                }
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

fn declare_variant(variant: &VariantInput) -> TokenStream {
    let ident = &variant.ident;
    let fields = &variant.fields.fields;

    match variant.fields.style {
        Style::Unit => quote! { #ident },
        Style::Tuple => {
            let types = fields.iter().map(projected_type);
            quote! { #ident(#(#types),*) }
        }
        Style::Struct => {
            let members = fields.iter().map(|f| {
                let name = f.accessor();
                let ty = projected_type(f);
                quote! { #name: #ty }
            });
            quote! { #ident { #(#members),* } }
        }
    }
}

fn project_arm(view: &syn::Ident, variant: &VariantInput) -> TokenStream {
    let ident = &variant.ident;
    let fields = &variant.fields.fields;

    match variant.fields.style {
        Style::Unit => quote! { Self::#ident => #view::#ident },
        Style::Tuple => {
            let bindings: Vec<_> = (0..fields.len()).map(|i| format_ident!("__f{}", i)).collect();
            let values = fields
                .iter()
                .zip(&bindings)
                .map(|(f, b)| project_expr(f, quote! { #b }));
            quote! { Self::#ident(#(#bindings),*) => #view::#ident(#(#values),*) }
        }
        Style::Struct => {
            let bindings: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
            let members = fields.iter().map(|f: &FieldInput| {
                let name = f.accessor();
                let binding = f.ident.as_ref();
                let value = project_expr(f, quote! { #binding });
                quote! { #name: #value }
            });
            quote! { Self::#ident { #(#bindings),* } => #view::#ident { #(#members),* } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darling::FromDeriveInput;
    use syn::parse_quote;

    fn render(input: syn::DeriveInput) -> String {
        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        generate(&parsed).unwrap().to_string()
    }

    #[test]
    fn test_variants_mirror_enum() {
        let out = render(parse_quote! {
            pub enum Endpoint {
                Local,
                Remote { #[frozen(rename = "hostname")] host: String, port: u16 },
                Socket(std::path::PathBuf, #[frozen(opaque)] Vec<u8>),
            }
        });

        assert!(out.contains("pub enum EndpointView"));
        assert!(out.contains("Self :: Local => EndpointView :: Local"));
        assert!(out.contains(
            "Self :: Remote { host , port } => EndpointView :: Remote { hostname : :: tirea_frozen :: DeepReadonly :: project (host)"
        ));
        assert!(out.contains("Self :: Socket (__f0 , __f1) => EndpointView :: Socket (:: tirea_frozen :: DeepReadonly :: project (__f0) , __f1)"));
        assert!(out.contains("& '__frozen Vec < u8 >"));
    }

    #[test]
    fn test_generic_enum_view_carries_bounds() {
        let out = render(parse_quote! {
            enum Tree<T> { Leaf(T), Node { children: Vec<Tree<T>> } }
        });

        assert!(out.contains(
            "enum TreeView < '__frozen , T > where T : :: tirea_frozen :: DeepReadonly , T : '__frozen ,"
        ));
        assert!(out.contains("type Projection < '__frozen > = TreeView < '__frozen , T >"));
    }
}
