//! Miscellaneous utility functionality.
//!
//! Nothing in here is HASM-specific, it only helps building the
//! fixed lookup tables of the other modules.
use macro_pub::macro_pub;

/// Creates a simple `HashMap` from the given key-value expressions.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = HashMap::new();
        $(map.insert($key, $value);)*
        map
    }}
}
