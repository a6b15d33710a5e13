/// Implements the `approx` comparison traits for a container of `T`s.
///
/// `$elems` is evaluated with `$v` bound to `&Self` and has to produce an iterator over `&T`.
/// Two values compare equal if all corresponding elements do.
macro_rules! impl_approx {
    ([$($gen:tt)*] $ty:ty, |$v:ident| $elems:expr) => {
        impl<$($gen)*> approx::AbsDiffEq for $ty
        where
            T: approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> T::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                let lhs = { let $v = self; $elems };
                let rhs = { let $v = other; $elems };
                lhs.zip(rhs).all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<$($gen)*> approx::RelativeEq for $ty
        where
            T: approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> T::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: T::Epsilon,
                max_relative: T::Epsilon,
            ) -> bool {
                let lhs = { let $v = self; $elems };
                let rhs = { let $v = other; $elems };
                lhs.zip(rhs)
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<$($gen)*> approx::UlpsEq for $ty
        where
            T: approx::UlpsEq,
            T::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
                let lhs = { let $v = self; $elems };
                let rhs = { let $v = other; $elems };
                lhs.zip(rhs).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}
