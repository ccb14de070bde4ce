use std::{array, fmt};

use crate::{
    traits::{Float, Number, Sqrt},
    Mat2, Mat3, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// Every operation returns a new vector and leaves `self` untouched, except for the explicit
/// reset methods [`Vector::set_zero`] and [`Vector::set_one`].
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, [`Vector::ONE`] one with all-ones.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing along the
///   respective axis.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Degenerate inputs
///
/// Operations that divide by a length ([`Vector::normalize`], [`Vector::project`]) are not guarded:
/// a zero-length vector produces `NaN` or infinite elements, and the caller is responsible for
/// avoiding that case.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Resets every element of `self` to 0, in place.
    ///
    /// Unlike [`Vector::ZERO`], this modifies an existing vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mut v = vec2(3.0, -4.0);
    /// v.set_zero();
    /// assert_eq!(v, Vec2d::ZERO);
    /// ```
    pub fn set_zero(&mut self)
    where
        T: Zero,
    {
        self.0.iter_mut().for_each(|elem| *elem = T::ZERO);
    }

    /// Resets every element of `self` to 1, in place.
    pub fn set_one(&mut self)
    where
        T: One,
    {
        self.0.iter_mut().for_each(|elem| *elem = T::ONE);
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector has no direction; normalizing it yields `NaN` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if cfg!(debug_assertions) && length == T::ZERO {
            log::debug!("normalizing a zero-length vector");
        }
        self / length
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the Euclidean distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let v = vec3(-1.0, 0.5, 7.0).clamp(Vec3d::ZERO, Vec3d::ONE);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Element-wise absolute value.
    pub fn abs(self) -> Self
    where
        T: Float,
    {
        self.map(Float::abs)
    }

    /// Rounds each element towards negative infinity.
    pub fn floor(self) -> Self
    where
        T: Float,
    {
        self.map(Float::floor)
    }

    /// Rounds each element towards positive infinity.
    pub fn ceil(self) -> Self
    where
        T: Float,
    {
        self.map(Float::ceil)
    }

    /// Rounds each element to the nearest integer, with halfway cases rounded away from zero.
    pub fn round(self) -> Self
    where
        T: Float,
    {
        self.map(Float::round)
    }

    /// Snaps each element down onto a grid whose cell size is given per axis by `grid`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let v = vec2(7.5, -0.5).snap(vec2(2.0, 1.0));
    /// assert_eq!(v, vec2(6.0, -1.0));
    /// ```
    pub fn snap(self, grid: Self) -> Self
    where
        T: Float,
    {
        Self::from_fn(|i| (self[i] / grid[i]).floor() * grid[i])
    }

    /// Snaps each element down onto a uniform grid with cell size `step`.
    pub fn snap_uniform(self, step: T) -> Self
    where
        T: Float,
    {
        self.snap(Self::splat(step))
    }

    /// Linearly interpolates between `self` and `target`.
    ///
    /// `t` is not clamped: values outside of `0.0..=1.0` extrapolate along the line through both
    /// points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(5.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(20.0, 30.0));
    /// ```
    pub fn lerp(self, target: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (target - self) * t
    }

    /// Evaluates the quadratic Bézier curve from `self` to `end` with control point `control` at
    /// `t`.
    pub fn bezier3(self, control: Self, end: Self, t: T) -> Self
    where
        T: Number,
    {
        let a = self.lerp(control, t);
        let b = control.lerp(end, t);
        a.lerp(b, t)
    }

    /// Evaluates the cubic Bézier curve from `self` to `end` with control points `c1` and `c2` at
    /// `t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let p = vec2(0.0, 0.0).bezier4(vec2(0.0, 1.0), vec2(1.0, 1.0), vec2(1.0, 0.0), 0.5);
    /// assert_eq!(p, vec2(0.5, 0.75));
    /// ```
    pub fn bezier4(self, c1: Self, c2: Self, end: Self, t: T) -> Self
    where
        T: Number,
    {
        let a = self.lerp(c1, t);
        let b = c1.lerp(c2, t);
        let c = c2.lerp(end, t);
        a.lerp(b, t).lerp(b.lerp(c, t), t)
    }

    /// Projects `self` onto the line spanned by `onto`.
    ///
    /// `onto` does not need to be normalized, but must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let p = vec3(2.0, 3.0, 4.0).project(vec3(0.0, 2.0, 0.0));
    /// assert_eq!(p, vec3(0.0, 3.0, 0.0));
    /// ```
    pub fn project(self, onto: Self) -> Self
    where
        T: Number,
    {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Removes the component of `self` along `normal`, leaving the part that slides along the
    /// surface.
    ///
    /// `normal` must be of unit length.
    pub fn slide(self, normal: Self) -> Self
    where
        T: Number,
    {
        self - normal * self.dot(normal)
    }

    /// Mirrors `self` about the line spanned by `normal`.
    ///
    /// `normal` must be of unit length. The component along `normal` is kept, the perpendicular
    /// component is flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let r = vec2(1.0, 1.0).reflect(Vec2d::Y);
    /// assert_eq!(r, vec2(-1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let d = self.dot(normal);
        normal * (d + d) - self
    }

    /// Returns whether every element is closer to zero than [`Float::EPSILON`].
    pub fn is_zero(&self) -> bool
    where
        T: Float,
    {
        self.0.iter().all(|elem| elem.abs() < T::EPSILON)
    }

    /// Returns whether every element differs from the corresponding one in `other` by less than
    /// [`Float::EPSILON`].
    pub fn nearly_equal(&self, other: &Self) -> bool
    where
        T: Float,
    {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| (a - b).abs() < T::EPSILON)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use std::f64::consts::TAU;
    ///
    /// let v = Vec2d::X.rotate_counterclockwise(TAU / 4.0);
    /// assert!(v.distance(Vec2d::Y) < 1e-12);
    /// ```
    #[doc(alias = "rotate")]
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_z(radians) * self
    }

    /// Computes the 2D cross product of `self` and `other`.
    ///
    /// This is the Z coordinate of the 3D cross product of both vectors extended with Z=0 (the only
    /// non-zero coordinate of that product).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// assert_eq!(Vec2d::X.cross(Vec2d::Y), 1.0);
    /// assert_eq!(Vec2d::Y.cross(Vec2d::X), -1.0);
    /// ```
    #[doc(alias = "perp_dot")]
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [x1, y1] = self.into_array();
        let [x2, y2] = other.into_array();
        x1 * y2 - y1 * x2
    }

    /// Returns `self` rotated a quarter turn clockwise, `(y, -x)`.
    pub fn tangent(self) -> Self
    where
        T: Number,
    {
        let [x, y] = self.into_array();
        vec2(y, -x)
    }

    /// Returns the angle of `self` relative to the positive X axis, in radians (`atan2(y, x)`).
    pub fn angle(self) -> T
    where
        T: Trig,
    {
        let [x, y] = self.into_array();
        y.atan2(x)
    }

    /// Returns whether `self` and `other` are linearly independent (not collinear).
    pub fn is_linearly_independent(self, other: Self) -> bool
    where
        T: Number,
    {
        self.cross(other) != T::ZERO
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let x = Vec3d::X;
    /// let y = Vec3d::Y;
    /// let z = Vec3d::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Rotates `self` by `radians` around `axis` (Rodrigues' rotation formula).
    ///
    /// `axis` is normalized before use, so it only needs to be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vec3d::X.rotate(vec3(0.0, 0.0, 3.0), FRAC_PI_2);
    /// assert!(v.distance(Vec3d::Y) < 1e-12);
    /// ```
    pub fn rotate(self, axis: Self, radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_axis(axis.normalize(), radians) * self
    }

    /// Returns whether `self`, `b` and `c` are linearly independent (span all of 3D space).
    pub fn is_linearly_independent(self, b: Self, c: Self) -> bool
    where
        T: Number,
    {
        Mat3::from_columns([self, b, c]).determinant() != T::ZERO
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
