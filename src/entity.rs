//! Entity-name resolution over arbitrary typed values.
//!
//! Derives a short human-readable name for the structural type behind a
//! value, unwrapping however many layers of indirection sit in front of it.
//! Used for things like naming a data collection after the type of object
//! stored in it: a `Widget`, a `&Widget`, a `&&Widget`, and a `Box<Widget>`
//! all resolve to `"Widget"`.
//!
//! Resolution is fully static: it reads the type, never the value, so a
//! null raw pointer or a `None` resolves exactly like a live instance of
//! the same type.

use std::any;

/// Smart-pointer types treated as indirection rather than as the entity
/// itself. `type_name` spells these with their defining module path.
const POINTER_WRAPPERS: &[&str] = &[
    "alloc::boxed::Box",
    "std::boxed::Box",
    "alloc::rc::Rc",
    "std::rc::Rc",
    "alloc::sync::Arc",
    "std::sync::Arc",
];

/// Resolve the short entity name for a value.
///
/// Strips reference and raw-pointer layers, unwraps `Box`/`Rc`/`Arc`
/// payloads, drops generic arguments, and returns the trailing path
/// segment of whatever type remains. Total over every type; never
/// inspects the value itself.
pub fn entity_name<T: ?Sized>(_value: &T) -> &'static str {
    type_label(any::type_name::<T>())
}

/// Resolve the short entity name for a type given directly.
///
/// The turbofish form of [`entity_name`], for call sites that have a type
/// but no instance: `entity_name_of::<&&Widget>()` is `"Widget"`.
pub fn entity_name_of<T: ?Sized>() -> &'static str {
    type_label(any::type_name::<T>())
}

/// Alias of [`entity_name`] for call sites naming a collection.
pub fn collection_name<T: ?Sized>(value: &T) -> &'static str {
    entity_name(value)
}

/// Alias of [`entity_name`] for call sites naming a collection element.
pub fn element_name<T: ?Sized>(value: &T) -> &'static str {
    entity_name(value)
}

fn type_label(full: &str) -> &str {
    let mut name = full.trim();

    loop {
        if let Some(rest) = name.strip_prefix('&') {
            let rest = rest.trim_start();
            name = rest.strip_prefix("mut ").unwrap_or(rest);
            continue;
        }
        if let Some(rest) = name.strip_prefix("*const ") {
            name = rest;
            continue;
        }
        if let Some(rest) = name.strip_prefix("*mut ") {
            name = rest;
            continue;
        }
        if let Some(inner) = unwrap_pointer_wrapper(name) {
            name = inner;
            continue;
        }
        break;
    }

    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Peel one smart-pointer layer: `alloc::boxed::Box<foo::Bar>` -> `foo::Bar`.
fn unwrap_pointer_wrapper(name: &str) -> Option<&str> {
    for wrapper in POINTER_WRAPPERS {
        if let Some(rest) = name.strip_prefix(wrapper) {
            if let Some(inner) = rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
                return Some(inner);
            }
        }
    }
    None
}
