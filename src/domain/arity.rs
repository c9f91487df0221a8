//! Construction-arity families
//!
//! A family is one base shape plus sibling types that carry exactly the
//! same fields but are built differently:
//!
//! - the base is built with `Default` and then every field is assigned;
//!   serde reads it with every field optional.
//! - each sibling takes some fields through `new(..)` and gets the rest
//!   assigned afterwards. Constructor fields are private, come first in
//!   the serialized payload, and are required when deserializing.
//!
//! `arity_family!` generates all of this from one field table, and
//! `From<Sibling> for Base` lists every base field, so a sibling that
//! drifts from the base does not compile.

/// Build a value through its own construction protocol, copying every
/// field from a canonical instance of the family's base shape
pub trait Construct<Base> {
    fn construct(seed: &Base) -> Self;
}

macro_rules! arity_family {
    (
        $(#[$base_meta:meta])*
        pub struct $base:ident {
            $( $(#[$field_meta:meta])* pub $field:ident : $fty:ty ),* $(,)?
        }
        $(
            $(#[$var_meta:meta])*
            pub struct $variant:ident {
                new( $( $arg:ident : $aty:ty ),* $(,)? );
                set( $( $set:ident : $sty:ty ),* $(,)? );
            }
        )*
    ) => {
        $(#[$base_meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $base {
            $( $(#[$field_meta])* pub $field: $fty, )*
        }

        impl $crate::domain::arity::Construct<$base> for $base {
            #[allow(clippy::clone_on_copy, clippy::field_reassign_with_default)]
            fn construct(seed: &$base) -> Self {
                let mut value = Self::default();
                $( value.$field = seed.$field.clone(); )*
                value
            }
        }

        $(
            $(#[$var_meta])*
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $variant {
                $( $arg: $aty, )*
                $( #[serde(default)] pub $set: $sty, )*
            }

            impl $variant {
                #[allow(clippy::too_many_arguments)]
                pub fn new($( $arg: $aty ),*) -> Self {
                    Self {
                        $( $arg, )*
                        $( $set: ::core::default::Default::default(), )*
                    }
                }

                $(
                    pub fn $arg(&self) -> &$aty {
                        &self.$arg
                    }
                )*
            }

            impl $crate::domain::arity::Construct<$base> for $variant {
                #[allow(clippy::clone_on_copy, unused_mut)]
                fn construct(seed: &$base) -> Self {
                    let mut value = Self::new($( seed.$arg.clone() ),*);
                    $( value.$set = seed.$set.clone(); )*
                    value
                }
            }

            impl From<$variant> for $base {
                fn from(value: $variant) -> Self {
                    Self {
                        $( $arg: value.$arg, )*
                        $( $set: value.$set, )*
                    }
                }
            }
        )*
    };
}

pub(crate) use arity_family;
