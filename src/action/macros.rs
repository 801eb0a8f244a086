//! Declarative helpers for action enums.

/// Declares an action enum together with its kind enum and the
/// [`Action`](crate::Action) impl.
///
/// Every variant must be a one-field tuple variant; use `()` for actions
/// without data. Attributes written above the enum are forwarded to the
/// action enum only, so `#[derive(Serialize)]` and friends work as usual.
/// `Debug`, `Clone` and `PartialEq` are always derived.
///
/// ```
/// immuto::actions! {
///     /// Operations on a to-do list entry.
///     pub enum TodoAction => TodoKind {
///         Rename(String),
///         Toggle(()),
///     }
/// }
///
/// use immuto::Action;
/// assert_eq!(TodoAction::Toggle(()).kind(), TodoKind::Toggle);
/// ```
#[macro_export]
macro_rules! actions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $payload:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        #[doc = concat!("Kind discriminator for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $(
                #[doc = concat!("[`", stringify!($name), "::", stringify!($variant), "`]")]
                $variant,
            )+
        }

        impl $crate::Action for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $( Self::$variant(_) => $kind::$variant, )+
                }
            }
        }
    };
}

/// Builds a [`Variant`](crate::Variant) from an action enum variant and its
/// kind.
///
/// ```
/// immuto::actions! {
///     pub enum LampAction => LampKind {
///         Switch(bool),
///     }
/// }
///
/// let switch = immuto::variant!(LampAction::Switch => LampKind::Switch);
/// assert_eq!(switch.extract(LampAction::Switch(true)), Some(true));
/// ```
#[macro_export]
macro_rules! variant {
    ($variant:path => $kind:expr $(,)?) => {
        $crate::Variant::new($kind, $variant, |action| match action {
            $variant(payload) => ::core::option::Option::Some(payload),
            #[allow(unreachable_patterns)]
            _ => ::core::option::Option::None,
        })
    };
}
