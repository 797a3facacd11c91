//! Code generation for the DeepReadonly derive macro.

mod leaf;
mod utils;
mod view_enum;
mod view_struct;

use crate::field_kind::FieldKind;
use crate::parse::{FieldInput, ProjectionInput};
use darling::{ast, FromDeriveInput};
use proc_macro2::TokenStream;
use std::collections::HashMap;
use syn::DeriveInput;

/// Main entry point for code generation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = ProjectionInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    validate(&parsed)?;

    if parsed.leaf {
        return Ok(leaf::generate(&parsed));
    }

    match &parsed.data {
        ast::Data::Struct(fields) if fields.style.is_struct() => view_struct::generate(&parsed),
        ast::Data::Struct(_) => Err(syn::Error::new_spanned(
            &parsed.ident,
            "DeepReadonly can only generate a view for structs with named fields; \
             use #[frozen(leaf)] to project tuple and unit structs as `&Self`",
        )),
        // Nothing to project out of fieldless enums.
        ast::Data::Enum(variants) if variants.iter().all(|v| v.fields.fields.is_empty()) => {
            Ok(leaf::generate(&parsed))
        }
        ast::Data::Enum(_) => view_enum::generate(&parsed),
    }
}

/// Reject attribute combinations and field types that have no projection.
fn validate(parsed: &ProjectionInput) -> syn::Result<()> {
    parsed.view_ident()?;

    if parsed.leaf {
        if let Some(field) = parsed.all_fields().into_iter().find(|f| f.has_attributes()) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[frozen(leaf)] projects the whole type as `&Self`; \
                 field attributes have no effect and are not allowed",
            ));
        }
        return Ok(());
    }

    if let ast::Data::Enum(variants) = &parsed.data {
        for variant in variants {
            for field in variant.fields.fields.iter() {
                if field.skip {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "#[frozen(skip)] is not supported on enum variant fields; \
                         use #[frozen(opaque)] instead",
                    ));
                }
                if field.ident.is_none() && field.rename.is_some() {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "#[frozen(rename)] requires a named field",
                    ));
                }
            }
        }
    }

    for field in parsed.all_fields() {
        validate_field(field)?;
    }

    if let ast::Data::Struct(fields) = &parsed.data {
        validate_method_names(fields.fields.iter())?;
    }

    Ok(())
}

/// Every method on a struct view needs a distinct name: `get`, one accessor
/// per field, and the `has_*` / `*_len` helpers.
fn validate_method_names<'a>(fields: impl Iterator<Item = &'a FieldInput>) -> syn::Result<()> {
    let mut taken: HashMap<String, &'a FieldInput> = HashMap::new();

    for field in fields.filter(|f| f.is_included()) {
        let Some(accessor) = field.accessor() else {
            continue;
        };
        let kind = FieldKind::from_type(&field.ty);

        let mut names = vec![accessor.to_string()];
        if kind.is_option() {
            names.push(format!("has_{}", accessor));
        }
        if kind.is_collection() {
            names.push(format!("{}_len", accessor));
        }

        for name in names {
            if name == "get" {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "view method `get` is reserved for the underlying value; \
                     use #[frozen(rename = \"...\")] to pick another accessor name",
                ));
            }
            if let Some(other) = taken.insert(name.clone(), field) {
                let mut err = syn::Error::new_spanned(
                    &field.ty,
                    format!(
                        "view method `{}` is generated twice; \
                         use #[frozen(rename = \"...\")] on one of the fields",
                        name
                    ),
                );
                err.combine(syn::Error::new_spanned(
                    &other.ty,
                    format!("`{}` is also generated here", name),
                ));
                return Err(err);
            }
        }
    }

    Ok(())
}

fn validate_field(field: &FieldInput) -> syn::Result<()> {
    if field.skip && (field.opaque || field.rename.is_some()) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "#[frozen(skip)] cannot be combined with #[frozen(opaque)] or #[frozen(rename)]",
        ));
    }

    if let Some(name) = &field.rename {
        if syn::parse_str::<syn::Ident>(name).is_err() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!("#[frozen(rename = \"{}\")] is not a valid identifier", name),
            ));
        }
    }

    if field.skip || field.opaque {
        return Ok(());
    }

    match FieldKind::from_type(&field.ty).unsupported() {
        Some(reason) => Err(syn::Error::new_spanned(
            &field.ty,
            format!("{}; mark the field #[frozen(opaque)] or #[frozen(skip)]", reason),
        )),
        None => Ok(()),
    }
}
