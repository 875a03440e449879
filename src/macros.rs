// src/macros.rs

/// Owned-string shorthand. `s!()` is an empty `String`; `s!(expr)` is
/// `String::from(expr)` — geo codes, labels and consts all pass through
/// here when the pipeline needs an owned copy.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-likes into one owned `String` (path stems,
/// extensions) without going through `format!`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
