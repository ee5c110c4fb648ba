// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Status-slot shorthand: `status!(Failure, "Error fetching clients: {}", e)`.
#[macro_export]
macro_rules! status {
    ($tone:ident, $($arg:tt)+) => {
        $crate::state::status::Status::new(
            $crate::state::status::Tone::$tone,
            ::std::format!($($arg)+),
        )
    };
}
