//! Named component access (`q.w`, `q.x`, ...) for quaternions.

use std::ops::{Deref, DerefMut};

use crate::{vector::view::XYZW, Quat};

// Reuses the vector view, since a quaternion is stored as its `[x, y, z, w]` vector.

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}
