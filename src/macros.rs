//! 宏集合：为 builder 提供 Go 式的可变参数调用封装。
//! 通过 `wheref!` / `selectf!` 等宏，可以直接在模板后面列出参数，而无需手动拼 `Vec<Arg>`。

/// 把一组任意类型的值收集成 `Vec<Arg>`。
#[macro_export]
macro_rules! sql_args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}
pub use crate::sql_args;

#[doc(hidden)]
#[macro_export]
macro_rules! __builder_with_args {
    ($builder:expr, $method:ident, $template:expr $(, $arg:expr)* $(,)?) => {
        $builder.$method($template, $crate::sql_args!($($arg),*))
    };
}

/// 为所有 `where_` 调用提供 Go 风格的可变参数调用（Select/Update/Delete）。
#[macro_export]
macro_rules! wheref {
    ($builder:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__builder_with_args!($builder, where_, $template $(, $arg)*)
    };
}
pub use crate::wheref;

/// 为 `SelectStatement::select` 提供 Go 风格的可变参数调用。
#[macro_export]
macro_rules! selectf {
    ($builder:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__builder_with_args!($builder, select, $template $(, $arg)*)
    };
}
pub use crate::selectf;

/// 为 `SelectStatement::order` 提供 Go 风格的可变参数调用。
#[macro_export]
macro_rules! orderf {
    ($builder:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__builder_with_args!($builder, order, $template $(, $arg)*)
    };
}
pub use crate::orderf;

/// 为所有 `returning` 调用提供 Go 风格的可变参数调用。
#[macro_export]
macro_rules! returningf {
    ($builder:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__builder_with_args!($builder, returning, $template $(, $arg)*)
    };
}
pub use crate::returningf;
