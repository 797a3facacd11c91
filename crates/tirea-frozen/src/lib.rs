//! Deep read-only views over values that stay fully mutable.
//!
//! `tirea-frozen` lets code mark a value as "treat as immutable" for review
//! and documentation purposes without taking away any capability the value
//! already has.
//!
//! # Core Concepts
//!
//! - **DeepReadonly**: maps a type to its *projection*, a `Copy` borrow that
//!   exposes accessors only. Accessors on structured parts return their own
//!   projection, recursively: sequences come back as [`SeqView`], maps as
//!   [`MapView`], callables as [`FnView`], JSON as [`ValueView`], and derived
//!   structs as a generated `{Name}View`.
//! - **Frozen**: the value itself, wrapped at zero cost. [`Frozen::view`]
//!   hands out the projection, while `Deref`/`DerefMut` keep every read and
//!   write of the inner type available. A `&mut Frozen<T>` is accepted
//!   wherever a `&mut T` is.
//!
//! Read-only here is advisory: nothing is copied, nothing is locked, and a
//! write made through any alias is visible through every other one.
//!
//! # Quick Start
//!
//! ```
//! use tirea_frozen::{DeepReadonly, Frozen};
//!
//! #[derive(Debug, Clone, DeepReadonly)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     flags: Vec<String>,
//! }
//!
//! #[derive(Debug, Clone, DeepReadonly)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug, Clone, DeepReadonly)]
//! struct Config {
//!     server: Server,
//!     users: Vec<User>,
//! }
//!
//! fn update_server_info(config: &mut Config) {
//!     config.server.port = 8080;
//!     config.server.flags.push("secure".into());
//! }
//!
//! fn normalize(mut config: Config) -> Config {
//!     config.server.host = config.server.host.to_lowercase();
//!     config
//! }
//!
//! let mut cfg = Frozen::new(Config {
//!     server: Server { host: "DEV".into(), port: 3000, flags: vec![] },
//!     users: vec![User { id: 1, name: "Admin".into() }],
//! });
//!
//! // Write through directly...
//! cfg.server.flags.push("verbose".into());
//! // ...or hand it to code that takes the mutable type.
//! update_server_info(&mut cfg);
//!
//! // Read through the deep projection.
//! let view = cfg.view();
//! assert_eq!(view.server().port(), 8080);
//! assert_eq!(view.server().flags().len(), 2);
//! assert_eq!(view.users().first().map(|u| u.name()), Some("Admin"));
//!
//! // Move back out to by-value APIs.
//! let plain: Config = normalize(cfg.into());
//! assert_eq!(plain.server.host, "dev");
//! ```
//!
//! # The projection has no setters
//!
//! Field accessors return values, not places:
//!
//! ```compile_fail
//! use tirea_frozen::{DeepReadonly, Frozen};
//!
//! #[derive(DeepReadonly)]
//! struct Server { port: u16 }
//!
//! let server = Frozen::new(Server { port: 3000 });
//! server.view().port() = 8080;
//! ```
//!
//! and sequence projections cannot grow:
//!
//! ```compile_fail
//! use tirea_frozen::{DeepReadonly, Frozen};
//!
//! let flags = Frozen::new(vec![String::from("debug")]);
//! flags.view().push("secure");
//! ```
//!
//! # Derive attributes
//!
//! `#[derive(DeepReadonly)]` accepts `#[frozen(...)]` attributes:
//!
//! - container: `view = "Name"`, `bound = "T: Trait"`, `leaf`
//! - field: `rename = "name"`, `skip`, `opaque`
//!
//! See the `tirea-frozen-derive` crate for details.

mod callable;
mod error;
mod frozen;
mod json;
mod map;
mod path;
mod project;
mod seq;

pub use callable::FnView;
pub use error::{value_type_name, FrozenError, FrozenResult};
pub use frozen::{Freeze, Frozen};
pub use json::ValueView;
pub use map::{HashMapView, MapView};
pub use path::{Path, Seg};
pub use project::DeepReadonly;
pub use seq::{DequeIter, DequeView, SeqIter, SeqView};

// Re-export derive macro when feature is enabled
#[cfg(feature = "derive")]
pub use tirea_frozen_derive::DeepReadonly;
