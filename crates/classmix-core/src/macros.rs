//! The `classes!` macro — variadic front door over [`crate::join`].

/// Join any number of class-name arguments into one string.
///
/// Each argument is converted through `ClassValue::from`, so anything with a
/// `From` conversion works directly: `&str`, `String`, integers, floats,
/// `bool`, `Option<T>`, `Vec<T>`. Richer shapes (mappings, callables, custom
/// renderers) are built explicitly via the [`ClassValue`](crate::ClassValue)
/// constructors.
///
/// # Examples
///
/// ```rust
/// use classmix_core::classes;
///
/// assert_eq!(classes!(), "");
/// assert_eq!(classes!["foo", "bar"], "foo bar");
///
/// let menu_open = false;
/// assert_eq!(classes!["menu", menu_open.then_some("menu-open")], "menu");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::join(&[$($crate::ClassValue::from($value)),+])
    };
}
