//! Derive macro for the tirea-frozen `DeepReadonly` trait.
//!
//! This crate provides the `#[derive(DeepReadonly)]` macro that generates:
//! - `{Name}View<'a>`: a `Copy` view with one read-only accessor per field
//! - `impl DeepReadonly for {Name}`: projection into that view
//! - `impl From<Frozen<{Name}>> for {Name}`: unwrap for by-value callers
//!
//! # Usage
//!
//! ```ignore
//! use tirea_frozen::{DeepReadonly, Frozen};
//!
//! #[derive(DeepReadonly)]
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//!     manager: Option<Box<User>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod field_kind;
mod parse;

/// Derive the `DeepReadonly` trait for a struct or enum.
///
/// For a struct, the generated `{Name}View<'a>` has an accessor per field
/// returning that field's projection. `Option` fields also get `has_<field>()`
/// and `Vec`/map fields get `<field>_len()`.
///
/// For an enum, `{Name}View<'a>` is an enum with the same variants whose
/// payloads are projections, so a `match` on the view reads like a `match` on
/// the value. Enums with only unit variants project to `&'a Self`.
///
/// # Attributes
///
/// ## Container Attributes
///
/// - `#[frozen(view = "Name")]`: name of the generated view type
/// - `#[frozen(bound = "T: Trait")]`: where-predicates replacing the default
///   `T: DeepReadonly` bound on each type parameter
/// - `#[frozen(leaf)]`: no view type; project to `&'a Self`
///
/// ## Field Attributes
///
/// - `#[frozen(rename = "name")]`: accessor (or enum view field) name
/// - `#[frozen(skip)]`: leave the field out of the view (structs only)
/// - `#[frozen(opaque)]`: return `&'a T` instead of projecting; needed for
///   field types that do not implement `DeepReadonly`
///
/// # Examples
///
/// ```ignore
/// use tirea_frozen::{DeepReadonly, Frozen};
///
/// #[derive(DeepReadonly)]
/// #[frozen(view = "SessionRead")]
/// struct Session {
///     #[frozen(rename = "user_id")]
///     uid: u64,
///     #[frozen(skip)]
///     token: String,
///     roles: Vec<String>,
/// }
///
/// let session = Frozen::new(Session { uid: 7, token: "t".into(), roles: vec![] });
/// let view: SessionRead<'_> = session.view();
///
/// assert_eq!(view.user_id(), 7);
/// assert_eq!(view.roles_len(), 0);
/// ```
#[proc_macro_derive(DeepReadonly, attributes(frozen))]
pub fn derive_deep_readonly(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
