//! Route actions.

/// An action invoked with the decoded placeholder tuple `P`.
///
/// Implemented for every `Fn(T1, .., Tn) -> R` closure or function with
/// n in 0..=10, so handlers take the placeholder values as plain arguments.
/// When the template is given as a string, the handler's argument types
/// select the placeholder types; annotate closure parameters
/// (`|id: u64| ..`) so they can be inferred.
pub trait Handler<P, R>: Send + Sync + 'static {
    fn call(&self, params: P) -> R;
}

macro_rules! impl_handler {
    ($($idx:tt => $ty:ident),*) => {
        impl<Func, Ret, $($ty,)*> Handler<($($ty,)*), Ret> for Func
        where
            Func: Fn($($ty),*) -> Ret + Send + Sync + 'static,
        {
            #[allow(unused_variables)]
            fn call(&self, params: ($($ty,)*)) -> Ret {
                (self)($(params.$idx),*)
            }
        }
    };
}

impl_handler!();
impl_handler!(0 => A);
impl_handler!(0 => A, 1 => B);
impl_handler!(0 => A, 1 => B, 2 => C);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
impl_handler!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke<P, R, H: Handler<P, R>>(handler: H, params: P) -> R {
        handler.call(params)
    }

    fn join(a: String, b: u32) -> String {
        format!("{}-{}", a, b)
    }

    #[test]
    fn test_closures_and_fns() {
        assert_eq!(invoke(|| 1, ()), 1);
        assert_eq!(invoke(|x: u8| x + 1, (1,)), 2);
        assert_eq!(invoke(join, ("a".to_string(), 3)), "a-3");
    }
}
