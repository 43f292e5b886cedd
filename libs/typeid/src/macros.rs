//! Macros for defining typed ID types.

/// Declares an entity kind and a typed ID alias for it.
///
/// This generates:
/// - a marker type implementing [`IdKind`](crate::IdKind) with the given prefix
/// - a compile-time check that the prefix is valid
/// - `pub type $id = TypedId<$kind>`
///
/// # Example
///
/// ```
/// typeid::define_id!(UserId, User, "user");
///
/// let id = UserId::new();
/// assert!(id.to_string().starts_with("user_"));
/// let parsed: UserId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[macro_export]
macro_rules! define_id {
    ($id:ident, $kind:ident, $prefix:literal) => {
        #[doc = concat!("Kind marker for identifiers prefixed with `", $prefix, "`.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $kind {}

        impl $crate::IdKind for $kind {
            const PREFIX: &'static str = $prefix;
        }

        const _: () = assert!(
            $crate::prefix::is_valid($prefix),
            concat!("invalid typeid prefix: ", $prefix)
        );

        #[doc = concat!("A typed ID with the `", $prefix, "` prefix.")]
        pub type $id = $crate::TypedId<$kind>;
    };
}
