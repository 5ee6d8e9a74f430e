mod path_string_ext;

pub use path_string_ext::PathStringExt;
