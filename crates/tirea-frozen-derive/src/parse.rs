//! Parsing logic for the DeepReadonly derive macro.

use darling::{ast, FromDeriveInput, FromField, FromVariant};
use quote::format_ident;
use syn::{Generics, Ident, Type, Visibility};

/// Parsed container-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(frozen), supports(struct_any, enum_any))]
pub struct ProjectionInput {
    /// The type identifier.
    pub ident: Ident,

    /// The type visibility; the generated view type shares it.
    pub vis: Visibility,

    /// Generic parameters.
    pub generics: Generics,

    /// Struct fields or enum variants.
    pub data: ast::Data<VariantInput, FieldInput>,

    /// Name of the generated view type (e.g. `#[frozen(view = "ConfigRead")]`).
    #[darling(default)]
    pub view: Option<String>,

    /// Where-predicates replacing the default `T: DeepReadonly` bounds.
    #[darling(default)]
    pub bound: Option<String>,

    /// Project the whole type as an opaque `&'a Self`.
    #[darling(default)]
    pub leaf: bool,
}

impl ProjectionInput {
    /// Identifier of the generated view type.
    pub fn view_ident(&self) -> syn::Result<Ident> {
        match &self.view {
            Some(name) => syn::parse_str::<Ident>(name).map_err(|_| {
                syn::Error::new_spanned(
                    &self.ident,
                    format!("#[frozen(view = \"{}\")] is not a valid type name", name),
                )
            }),
            None => Ok(format_ident!("{}View", self.ident)),
        }
    }

    /// All fields, across variants for enums.
    pub fn all_fields(&self) -> Vec<&FieldInput> {
        match &self.data {
            ast::Data::Struct(fields) => fields.fields.iter().collect(),
            ast::Data::Enum(variants) => variants
                .iter()
                .flat_map(|v| v.fields.fields.iter())
                .collect(),
        }
    }
}

/// Parsed enum variant.
#[derive(Debug, FromVariant)]
#[darling(attributes(frozen))]
pub struct VariantInput {
    pub ident: Ident,
    pub fields: ast::Fields<FieldInput>,
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(frozen))]
pub struct FieldInput {
    /// Field identifier; `None` for tuple fields.
    pub ident: Option<Ident>,

    /// Field visibility; the accessor shares it.
    pub vis: Visibility,

    /// Field type.
    pub ty: Type,

    /// Name of the accessor (or view field) instead of the field name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the field out of the view.
    #[darling(default)]
    pub skip: bool,

    /// Hand the field out as `&'a T` without projecting it.
    #[darling(default)]
    pub opaque: bool,
}

impl FieldInput {
    /// Name used for the accessor method or view field.
    pub fn accessor(&self) -> Option<Ident> {
        match (&self.rename, &self.ident) {
            (Some(name), _) => Some(format_ident!("{}", name)),
            (None, Some(ident)) => Some(ident.clone()),
            (None, None) => None,
        }
    }

    /// Whether the field appears in the generated view.
    pub fn is_included(&self) -> bool {
        !self.skip
    }

    /// Whether any `#[frozen(...)]` option is set on this field.
    pub fn has_attributes(&self) -> bool {
        self.rename.is_some() || self.skip || self.opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_basic_struct() {
        let input: syn::DeriveInput = parse_quote! {
            struct Config {
                server: Server,
                users: Vec<User>,
            }
        };

        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        assert_eq!(parsed.ident.to_string(), "Config");
        assert_eq!(parsed.view_ident().unwrap().to_string(), "ConfigView");

        let fields = parsed.all_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].accessor().unwrap().to_string(), "server");
        assert!(fields.iter().all(|f| f.is_included()));
    }

    #[test]
    fn test_parse_with_attributes() {
        let input: syn::DeriveInput = parse_quote! {
            #[frozen(view = "ConfigRead", bound = "T: Clone")]
            struct Config<T> {
                #[frozen(rename = "listen_port")]
                port: u16,
                #[frozen(skip)]
                secret: String,
                #[frozen(opaque)]
                extra: T,
            }
        };

        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        assert_eq!(parsed.view_ident().unwrap().to_string(), "ConfigRead");
        assert_eq!(parsed.bound.as_deref(), Some("T: Clone"));

        let fields = parsed.all_fields();
        assert_eq!(fields[0].accessor().unwrap().to_string(), "listen_port");
        assert!(!fields[1].is_included());
        assert!(fields[2].opaque);
        assert!(fields.iter().all(|f| f.has_attributes()));
    }

    #[test]
    fn test_parse_enum_variants() {
        let input: syn::DeriveInput = parse_quote! {
            enum Endpoint {
                Local,
                Remote { host: String, port: u16 },
                Socket(std::path::PathBuf),
            }
        };

        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        let variants = parsed.data.as_ref().take_enum().unwrap();
        assert_eq!(variants.len(), 3);
        assert!(variants[0].fields.style.is_unit());
        assert!(variants[1].fields.style.is_struct());
        assert!(variants[2].fields.style.is_tuple());
        assert_eq!(parsed.all_fields().len(), 3);
    }

    #[test]
    fn test_parse_leaf_flag() {
        let input: syn::DeriveInput = parse_quote! {
            #[frozen(leaf)]
            struct Token(u64);
        };

        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        assert!(parsed.leaf);
    }

    #[test]
    fn test_invalid_view_name() {
        let input: syn::DeriveInput = parse_quote! {
            #[frozen(view = "not a name")]
            struct Config { port: u16 }
        };

        let parsed = ProjectionInput::from_derive_input(&input).unwrap();
        assert!(parsed.view_ident().is_err());
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let input: syn::DeriveInput = parse_quote! {
            struct Config {
                #[frozen(readonly)]
                port: u16,
            }
        };

        assert!(ProjectionInput::from_derive_input(&input).is_err());
    }
}
