//! Setter tables and the filler itself.

use tracing::debug;

/// One declared setter: the field name it covers and the function that
/// applies a value to it.
pub struct SetterRef<T> {
    pub name: &'static str,
    pub set: fn(&mut T, String),
}

/// A type whose fields can be populated through a declared setter table.
pub trait Fillable: Sized {
    /// Declaration-order list of setters. Order only affects log output;
    /// setters cover distinct fields.
    fn setters() -> Vec<SetterRef<Self>>;
}

/// Populate `entity` by invoking every declared setter with its own name
/// as the value, e.g. the `"FirstName"` setter receives `"FirstName"`.
pub fn fill_from_setters<T: Fillable>(entity: &mut T) {
    for setter in T::setters() {
        debug!(setter = setter.name, "filling field");
        (setter.set)(entity, setter.name.to_string());
    }
}
