//! Named field access (`v.x`, `v.y`, ...) for 2, 3 and 4 element vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// Field view of a [`Vec2`][crate::Vec2].
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// Field view of a [`Vec3`][crate::Vec3].
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// Field view of a [`Vec4`][crate::Vec4] or a [`Quat`][crate::Quat].
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! field_view {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `Vector` is a transparent `[T; N]`, and the view is a `repr(C)`
                    // struct of `N` consecutive `T` fields followed by a ZST.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref` above.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

field_view!(2 => XY, 3 => XYZ, 4 => XYZW);
