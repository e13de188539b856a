//! Unqualified type names
//!
//! Members are conventionally declared beside the type they wrap, so
//! module paths only add noise to rendered names.

use std::any;

/// Name of `T` with every module path reduced to its final segment.
///
/// Paths inside generic arguments are shortened too:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name<T: ?Sized>() -> String {
    shorten(any::type_name::<T>())
}

fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path_start = None;

    for (i, c) in full.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = path_start.take() {
            out.push_str(last_segment(&full[start..i]));
        }
        out.push(c);
    }
    if let Some(start) = path_start {
        out.push_str(last_segment(&full[start..]));
    }

    out
}

#[inline]
fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
