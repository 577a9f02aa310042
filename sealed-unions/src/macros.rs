/// Defines a union type with one payload per variant together with its
/// factory.
///
/// Every variant is described by its name, its payload type parameter, the
/// name of its factory constructor and handler argument, its predicate and its
/// 1-based slot. Payload type parameters must not be named `O`.
macro_rules! define_union {
    (
        $(#[$attribute:meta])*
        $name:ident, $factory:ident {
            $($variant:ident($type:ident), $constructor:ident, $predicate:ident, $slot:literal;)+
        }
    ) => {
        $(#[$attribute])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name<$($type),+> {
            $($variant($type)),+
        }

        impl<$($type),+> $name<$($type),+> {
            /// Calls the handler of the active variant with its payload.
            #[allow(clippy::too_many_arguments)]
            pub fn continued(&self, $($constructor: impl FnOnce(&$type)),+) {
                match self {
                    $(Self::$variant(value) => $constructor(value)),+
                }
            }

            /// Maps the payload of the active variant into a common type.
            #[allow(clippy::too_many_arguments)]
            pub fn join<O>(&self, $($constructor: impl FnOnce(&$type) -> O),+) -> O {
                match self {
                    $(Self::$variant(value) => $constructor(value)),+
                }
            }

            /// Maps the payload of the active variant into a common type, consuming
            /// the union.
            #[allow(clippy::too_many_arguments)]
            pub fn into_join<O>(self, $($constructor: impl FnOnce($type) -> O),+) -> O {
                match self {
                    $(Self::$variant(value) => $constructor(value)),+
                }
            }

            $(
                pub fn $predicate(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }
            )+

            pub fn as_ref(&self) -> $name<$(&$type),+> {
                match self {
                    $(Self::$variant(value) => $name::$variant(value)),+
                }
            }
        }

        impl<$($type),+> $crate::Union for $name<$($type),+> {
            const VARIANTS: usize = [$($slot),+].len();

            type Factory = $factory<$($type),+>;

            fn slot(&self) -> usize {
                match self {
                    $(Self::$variant(_) => $slot),+
                }
            }
        }

        impl<$($type: ::std::fmt::Display),+> ::std::fmt::Display for $name<$($type),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant(value) => write!(formatter, "{}", value)),+
                }
            }
        }

        #[doc = concat!("Stateless constructor of [`", stringify!($name), "`] values.")]
        #[derive(Debug)]
        pub struct $factory<$($type),+>(::std::marker::PhantomData<fn() -> ($($type,)+)>);

        impl<$($type),+> $factory<$($type),+> {
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }

            $(
                pub fn $constructor(&self, value: $type) -> <Self as $crate::Factory>::Union {
                    $name::$variant(value)
                }
            )+
        }

        impl<$($type),+> $crate::Factory for $factory<$($type),+> {
            type Union = $name<$($type),+>;
        }

        impl<$($type),+> Clone for $factory<$($type),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($type),+> Copy for $factory<$($type),+> {}

        impl<$($type),+> Default for $factory<$($type),+> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Defines a union type holding either a single payload or nothing, together
/// with its factory.
macro_rules! define_optional_union {
    (
        $(#[$attribute:meta])*
        $name:ident<$type:ident>, $factory:ident {
            $variant:ident, $constructor:ident, $predicate:ident;
            $empty_variant:ident, $empty_constructor:ident, $empty_predicate:ident;
        }
    ) => {
        $(#[$attribute])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name<$type> {
            $variant($type),
            $empty_variant,
        }

        impl<$type> $name<$type> {
            /// Calls the handler of the active variant.
            pub fn continued(
                &self,
                $constructor: impl FnOnce(&$type),
                $empty_constructor: impl FnOnce(),
            ) {
                match self {
                    Self::$variant(value) => $constructor(value),
                    Self::$empty_variant => $empty_constructor(),
                }
            }

            /// Maps the active variant into a common type.
            pub fn join<O>(
                &self,
                $constructor: impl FnOnce(&$type) -> O,
                $empty_constructor: impl FnOnce() -> O,
            ) -> O {
                match self {
                    Self::$variant(value) => $constructor(value),
                    Self::$empty_variant => $empty_constructor(),
                }
            }

            /// Maps the active variant into a common type, consuming the union.
            pub fn into_join<O>(
                self,
                $constructor: impl FnOnce($type) -> O,
                $empty_constructor: impl FnOnce() -> O,
            ) -> O {
                match self {
                    Self::$variant(value) => $constructor(value),
                    Self::$empty_variant => $empty_constructor(),
                }
            }

            pub fn $predicate(&self) -> bool {
                matches!(self, Self::$variant(_))
            }

            pub fn $empty_predicate(&self) -> bool {
                matches!(self, Self::$empty_variant)
            }

            pub fn as_ref(&self) -> $name<&$type> {
                match self {
                    Self::$variant(value) => $name::$variant(value),
                    Self::$empty_variant => $name::$empty_variant,
                }
            }
        }

        impl<$type> $crate::Union for $name<$type> {
            const VARIANTS: usize = 2;

            type Factory = $factory<$type>;

            fn slot(&self) -> usize {
                match self {
                    Self::$variant(_) => 1,
                    Self::$empty_variant => 2,
                }
            }
        }

        impl<$type: ::std::fmt::Display> ::std::fmt::Display for $name<$type> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match self {
                    Self::$variant(value) => write!(formatter, "{}", value),
                    Self::$empty_variant => Ok(()),
                }
            }
        }

        impl<$type> From<Option<$type>> for $name<$type> {
            fn from(option: Option<$type>) -> Self {
                match option {
                    Some(value) => Self::$variant(value),
                    None => Self::$empty_variant,
                }
            }
        }

        impl<$type> From<$name<$type>> for Option<$type> {
            fn from(union: $name<$type>) -> Self {
                match union {
                    $name::$variant(value) => Some(value),
                    $name::$empty_variant => None,
                }
            }
        }

        #[doc = concat!("Stateless constructor of [`", stringify!($name), "`] values.")]
        #[derive(Debug)]
        pub struct $factory<$type>(::std::marker::PhantomData<fn() -> $type>);

        impl<$type> $factory<$type> {
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }

            pub fn $constructor(&self, value: $type) -> $name<$type> {
                $name::$variant(value)
            }

            pub fn $empty_constructor(&self) -> $name<$type> {
                $name::$empty_variant
            }
        }

        impl<$type> $crate::Factory for $factory<$type> {
            type Union = $name<$type>;
        }

        impl<$type> Clone for $factory<$type> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$type> Copy for $factory<$type> {}

        impl<$type> Default for $factory<$type> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
