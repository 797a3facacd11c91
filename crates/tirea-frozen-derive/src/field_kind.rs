//! Field type analysis for code generation.
//!
//! The projection itself is resolved by the trait system; this analysis only
//! drives the convenience accessors (`has_*`, `*_len`) and rejects field
//! types that have no read-only projection at all.

use syn::{GenericArgument, PathArguments, Type, TypeParamBound, TypePath};

/// Highest callable arity with a built-in projection.
pub const MAX_CALLABLE_ARITY: usize = 3;

/// The shape of a field type, as far as it can be told from syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A type with no inner structure (scalars, strings, sets, JSON...).
    Leaf,

    /// `Option<T>`
    Option(Box<FieldKind>),

    /// `Result<T, E>`
    Result(Box<FieldKind>, Box<FieldKind>),

    /// `Vec<T>`, `VecDeque<T>`, `[T]`, `[T; N]`
    Seq(Box<FieldKind>),

    /// `BTreeMap<K, V>` or `HashMap<K, V>`
    Map(Box<FieldKind>),

    /// `Box<T>`, `Rc<T>`, `Arc<T>`, `Cow<T>`, `Frozen<T>`, `&T`
    Pointer(Box<FieldKind>),

    /// Tuples of up to four elements.
    Tuple(Vec<FieldKind>),

    /// `fn(..) -> R` or `dyn Fn(..) -> R`
    Callable { arity: usize },

    /// `Cell`, `RefCell`, `Mutex`... writable through a shared reference.
    InteriorMut,

    /// `&mut T`
    MutRef,

    /// `*const T` / `*mut T`
    RawPtr,

    /// Any other named type; expected to implement `DeepReadonly` itself.
    Nested,
}

impl FieldKind {
    /// Analyze a type and determine its kind.
    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Path(type_path) => Self::from_type_path(type_path),
            Type::Reference(r) if r.mutability.is_some() => FieldKind::MutRef,
            Type::Reference(r) => FieldKind::Pointer(Box::new(Self::from_type(&r.elem))),
            Type::Ptr(_) => FieldKind::RawPtr,
            Type::Slice(s) => FieldKind::Seq(Box::new(Self::from_type(&s.elem))),
            Type::Array(a) => FieldKind::Seq(Box::new(Self::from_type(&a.elem))),
            Type::Tuple(t) if t.elems.is_empty() => FieldKind::Leaf,
            Type::Tuple(t) => FieldKind::Tuple(t.elems.iter().map(Self::from_type).collect()),
            Type::Paren(p) => Self::from_type(&p.elem),
            Type::Group(g) => Self::from_type(&g.elem),
            Type::BareFn(f) => FieldKind::Callable {
                arity: f.inputs.len(),
            },
            Type::TraitObject(obj) => obj
                .bounds
                .iter()
                .find_map(callable_arity)
                .map(|arity| FieldKind::Callable { arity })
                .unwrap_or(FieldKind::Nested),
            _ => FieldKind::Nested,
        }
    }

    fn from_type_path(type_path: &TypePath) -> Self {
        let Some(segment) = type_path.path.segments.last() else {
            return FieldKind::Nested;
        };
        let args = type_args(&segment.arguments);

        match segment.ident.to_string().as_str() {
            "Option" => wrap(&args, 0, FieldKind::Option),
            "Vec" | "VecDeque" => wrap(&args, 0, FieldKind::Seq),
            "BTreeMap" | "HashMap" => wrap(&args, 1, FieldKind::Map),
            "Box" | "Rc" | "Arc" | "Cow" | "Frozen" => wrap(&args, 0, FieldKind::Pointer),
            "Result" => match (args.first(), args.get(1)) {
                (Some(ok), Some(err)) => FieldKind::Result(
                    Box::new(Self::from_type(ok)),
                    Box::new(Self::from_type(err)),
                ),
                _ => FieldKind::Nested,
            },
            "Cell" | "RefCell" | "UnsafeCell" | "OnceCell" | "Mutex" | "RwLock" => {
                FieldKind::InteriorMut
            }
            "String" | "str" | "bool" | "char" | "i8" | "i16" | "i32" | "i64" | "i128"
            | "isize" | "u8" | "u16" | "u32" | "u64" | "u128" | "usize" | "f32" | "f64"
            | "Duration" | "PathBuf" | "PhantomData" | "BTreeSet" | "HashSet" | "Value" => {
                FieldKind::Leaf
            }
            _ => FieldKind::Nested,
        }
    }

    /// Why this type cannot be projected, if it cannot.
    pub fn unsupported(&self) -> Option<String> {
        match self {
            FieldKind::InteriorMut => {
                Some("interior-mutable types cannot be projected read-only".to_string())
            }
            FieldKind::MutRef => Some("`&mut` fields cannot be projected read-only".to_string()),
            FieldKind::RawPtr => Some("raw pointer fields cannot be projected".to_string()),
            FieldKind::Callable { arity } if *arity > MAX_CALLABLE_ARITY => Some(format!(
                "callables with more than {} parameters have no projection",
                MAX_CALLABLE_ARITY
            )),
            FieldKind::Tuple(elems) if elems.len() > 4 => {
                Some("tuples with more than 4 elements have no projection".to_string())
            }
            FieldKind::Option(inner)
            | FieldKind::Seq(inner)
            | FieldKind::Map(inner)
            | FieldKind::Pointer(inner) => inner.unsupported(),
            FieldKind::Result(ok, err) => ok.unsupported().or_else(|| err.unsupported()),
            FieldKind::Tuple(elems) => elems.iter().find_map(FieldKind::unsupported),
            _ => None,
        }
    }

    /// Check if this is an Option type.
    pub fn is_option(&self) -> bool {
        matches!(self, FieldKind::Option(_))
    }

    /// Check if the field owns a collection with a `len()`.
    pub fn is_collection(&self) -> bool {
        matches!(self, FieldKind::Seq(_) | FieldKind::Map(_))
    }
}

fn wrap(args: &[&Type], index: usize, make: fn(Box<FieldKind>) -> FieldKind) -> FieldKind {
    match args.get(index) {
        Some(inner) => make(Box::new(FieldKind::from_type(inner))),
        None => FieldKind::Nested,
    }
}

/// Extract the type arguments (lifetimes and consts skipped).
fn type_args(args: &PathArguments) -> Vec<&Type> {
    match args {
        PathArguments::AngleBracketed(ab) => ab
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Arity of a `Fn(..)` bound; `FnMut`/`FnOnce` cannot be called through `&`.
fn callable_arity(bound: &TypeParamBound) -> Option<usize> {
    let TypeParamBound::Trait(trait_bound) = bound else {
        return None;
    };
    let segment = trait_bound.path.segments.last()?;
    match (&segment.arguments, segment.ident.to_string().as_str()) {
        (PathArguments::Parenthesized(args), "Fn") => Some(args.inputs.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn kind(ty: Type) -> FieldKind {
        FieldKind::from_type(&ty)
    }

    #[test]
    fn test_leaf_types() {
        assert_eq!(kind(parse_quote!(String)), FieldKind::Leaf);
        assert_eq!(kind(parse_quote!(u16)), FieldKind::Leaf);
        assert_eq!(kind(parse_quote!(())), FieldKind::Leaf);
        assert_eq!(kind(parse_quote!(serde_json::Value)), FieldKind::Leaf);
    }

    #[test]
    fn test_containers() {
        assert!(kind(parse_quote!(Option<String>)).is_option());
        assert!(kind(parse_quote!(Vec<User>)).is_collection());
        assert!(kind(parse_quote!(std::collections::VecDeque<u8>)).is_collection());
        assert!(kind(parse_quote!([u8; 4])).is_collection());
        assert!(kind(parse_quote!(BTreeMap<String, User>)).is_collection());
        assert_eq!(
            kind(parse_quote!(HashMap<u32, Vec<User>>)),
            FieldKind::Map(Box::new(FieldKind::Seq(Box::new(FieldKind::Nested))))
        );
        assert_eq!(
            kind(parse_quote!(Cow<'static, str>)),
            FieldKind::Pointer(Box::new(FieldKind::Leaf))
        );
    }

    #[test]
    fn test_callables() {
        assert_eq!(
            kind(parse_quote!(fn(u32, u32) -> Config)),
            FieldKind::Callable { arity: 2 }
        );
        assert_eq!(
            kind(parse_quote!(Box<dyn Fn(String) -> Vec<u8> + Send + Sync>)),
            FieldKind::Pointer(Box::new(FieldKind::Callable { arity: 1 }))
        );
        assert_eq!(kind(parse_quote!(Box<dyn FnMut()>)), FieldKind::Pointer(Box::new(FieldKind::Nested)));
    }

    #[test]
    fn test_unsupported_reasons() {
        assert!(kind(parse_quote!(RefCell<u32>)).unsupported().is_some());
        assert!(kind(parse_quote!(Vec<Mutex<u32>>)).unsupported().is_some());
        assert!(kind(parse_quote!(&'a mut Config)).unsupported().is_some());
        assert!(kind(parse_quote!(*const u8)).unsupported().is_some());
        assert!(kind(parse_quote!(fn(u8, u8, u8, u8))).unsupported().is_some());
        assert!(kind(parse_quote!(Result<u8, Cell<u8>>)).unsupported().is_some());
        assert!(kind(parse_quote!((u8, u8, u8, u8, u8))).unsupported().is_some());

        assert!(kind(parse_quote!(Option<Box<Tree>>)).unsupported().is_none());
        assert!(kind(parse_quote!(&'a str)).unsupported().is_none());
        assert!(kind(parse_quote!((u8, String))).unsupported().is_none());
    }
}
