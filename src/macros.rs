/// Collect commands and sets into a `Vec<Unit>`.
///
/// ```ignore
/// let tool = Set::new("tool", "", units![
///     Command::new("list", "list entries", list),
///     Set::new("user", "manage users", units![Command::without_handler("add", "")]),
/// ]);
/// ```
#[macro_export]
macro_rules! units {
    () => {
        ::std::vec::Vec::<$crate::Unit>::new()
    };
    ($($unit:expr),+ $(,)?) => {
        ::std::vec![$($crate::Unit::from($unit)),+]
    };
}
