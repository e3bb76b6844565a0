//! Typed placeholder tuples.
//!
//! A template's placeholder types are a tuple `P` of up to ten
//! [`PathParam`] types. [`Params`] decodes raw segments into that tuple and
//! [`Push`] computes the tuple type after one more placeholder is added.
//! Both are implemented by macro for every supported arity; there is no
//! `Push` for ten-element tuples, which caps templates at ten placeholders.

use crate::codec::PathParam;
use crate::error::MatchError;

/// Maximum number of placeholders in a template.
pub const MAX_ARITY: usize = 10;

/// A tuple of placeholder values.
pub trait Params: Sized + 'static {
    /// Number of placeholders.
    const ARITY: usize;

    /// Short type names, in declaration order.
    fn type_names() -> Vec<&'static str>;

    /// Decode raw placeholder segments, in declaration order.
    ///
    /// `raw.len()` must equal `ARITY`.
    fn decode(raw: &[&str]) -> Result<Self, MatchError>;

    /// Encode each value, in declaration order.
    fn encode(&self) -> Vec<String>;
}

/// Appends placeholder type `T` to a parameter tuple.
pub trait Push<T: PathParam>: Params {
    type Output: Params;
}

macro_rules! impl_params {
    ($arity:expr; $($idx:tt => $ty:ident),*) => {
        impl<$($ty: PathParam),*> Params for ($($ty,)*) {
            const ARITY: usize = $arity;

            fn type_names() -> Vec<&'static str> {
                vec![$(<$ty as PathParam>::type_name()),*]
            }

            fn decode(raw: &[&str]) -> Result<Self, MatchError> {
                if raw.len() != Self::ARITY {
                    return Err(MatchError::SegmentCount {
                        expected: Self::ARITY,
                        actual: raw.len(),
                    });
                }
                Ok(($(
                    <$ty as PathParam>::decode(raw[$idx])
                        .map_err(|source| MatchError::Decode { index: $idx, source })?,
                )*))
            }

            fn encode(&self) -> Vec<String> {
                vec![$(PathParam::encode(&self.$idx)),*]
            }
        }
    };
}

impl_params!(0;);
impl_params!(1; 0 => A);
impl_params!(2; 0 => A, 1 => B);
impl_params!(3; 0 => A, 1 => B, 2 => C);
impl_params!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_params!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_params!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_params!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_params!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
impl_params!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
impl_params!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);

macro_rules! impl_push {
    ($($ty:ident),*) => {
        impl<$($ty: PathParam,)* Next: PathParam> Push<Next> for ($($ty,)*) {
            type Output = ($($ty,)* Next,);
        }
    };
}

impl_push!();
impl_push!(A);
impl_push!(A, B);
impl_push!(A, B, C);
impl_push!(A, B, C, D);
impl_push!(A, B, C, D, E);
impl_push!(A, B, C, D, E, F);
impl_push!(A, B, C, D, E, F, G);
impl_push!(A, B, C, D, E, F, G, H);
impl_push!(A, B, C, D, E, F, G, H, I);
