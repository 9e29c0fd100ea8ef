/// Text that must contain something other than whitespace.
///
/// The original value is preserved, only the emptiness check trims.
macro_rules! nutype_required_text {
    ($(#[$meta:meta])* $ident:ident) => {
        $(#[$meta])*
        #[::nutype::nutype(
            validate(predicate = |s: &str| !s.trim().is_empty()),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_required_text;
