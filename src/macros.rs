/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use toon_codec::{toon, Value};
///
/// let data = toon!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "toon"]
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ToonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression with a From<T> conversion into Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
