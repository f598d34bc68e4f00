//! Scopekit DI provides a registry of dependencies keyed by type, with
//! task-scoped overrides.
//!
//! It is split into three major parts:
//! 1. [`Registry`]: a value-semantics snapshot of registered instances, with
//!    a process-wide global default.
//! 2. Scoping: [`with_scope`] and [`with_scope_async`] bind a modified copy
//!    of the current registry to the calling task for the duration of one
//!    call, nesting like a stack and staying invisible to concurrent tasks.
//! 3. Injection handles: [`Injected`] and [`Lazy`] resolve a dependency
//!    eagerly or at first use.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use scopekit_di::{register, resolve, with_scope};
//!
//! trait Mailer: Send + Sync {
//!     fn send(&self, to: &str) -> String;
//! }
//!
//! struct Smtp;
//! impl Mailer for Smtp {
//!     fn send(&self, to: &str) -> String {
//!         format!("smtp -> {to}")
//!     }
//! }
//!
//! struct Recording;
//! impl Mailer for Recording {
//!     fn send(&self, to: &str) -> String {
//!         format!("recorded {to}")
//!     }
//! }
//!
//! register::<Arc<dyn Mailer>>(Arc::new(Smtp));
//!
//! let sent = resolve::<Arc<dyn Mailer>>().send("ops");
//! assert_eq!(sent, "smtp -> ops");
//!
//! let recorded = with_scope(
//!     |registry| registry.insert::<Arc<dyn Mailer>>(Arc::new(Recording)),
//!     || resolve::<Arc<dyn Mailer>>().send("ops"),
//! );
//! assert_eq!(recorded, "recorded ops");
//! ```
//!
//! Resolving a type nobody registered is a misconfiguration and panics; see
//! [`try_resolve`] for the recoverable form.

mod errors;
mod injected;
mod registry;
mod scope;
mod types;

pub use errors::ResolveError;
pub use injected::{Injected, Lazy};
pub use registry::{get, register, resolve, set_global, try_resolve, unregister, Registry};
pub use scope::{with_scope, with_scope_async};
pub use types::{Injectable, TypeInfo};
