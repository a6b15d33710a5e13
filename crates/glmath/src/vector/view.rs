//! Named component access (`v.x`, `v.y`, `v.z`, `v.w`) for 2-, 3- and 4-element vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $view:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            /// Named components of a vector, reached through `Deref`.
            #[repr(C)]
            pub struct $view<T> {
                $( pub $field: T, )+
                // Keeps the struct from being constructed or destructured outside this module.
                _priv: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &$view<T> {
                    // Safety: `Vector<T, N>` is `#[repr(transparent)]` over `[T; N]`, and the view
                    // is a `#[repr(C)]` struct of `N` fields of type `T` followed by a ZST, so
                    // they have identical size, alignment and field offsets.
                    unsafe { mem::transmute::<&Self, &$view<T>>(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut $view<T> {
                    // Safety: see `deref`.
                    unsafe { mem::transmute::<&mut Self, &mut $view<T>>(self) }
                }
            }
        )+
    };
}
views! {
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
