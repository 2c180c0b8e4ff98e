//! Procedural macros for opsfactory.
//!
//! - `#[register_ops("Key")]` - Submit a constructor function for
//!   collection by `RegistryBuilder::collect_submitted`

use proc_macro::TokenStream;

mod register;

/// Register a constructor function under a type key at compile time.
///
/// The function must have the `Constructor` signature:
/// `fn(&ConfigBundle) -> Result<Box<dyn Ops>, OpsError>`.
///
/// # Example
///
/// ```rust,ignore
/// #[opsfactory::register_ops("AuditType", description = "Writes audit heartbeats")]
/// fn new_audit_ops(bundle: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
///     Ok(Box::new(AuditOps::try_from(bundle)?))
/// }
/// ```
#[proc_macro_attribute]
pub fn register_ops(attr: TokenStream, item: TokenStream) -> TokenStream {
    register::expand(attr, item)
}
