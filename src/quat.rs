use std::fmt;

use crate::{vec4, Float, Mat3, Mat4, MinMax, Number, One, Sqrt, Trig, Vec3, Vector, Zero};

mod ops;
mod view;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Nothing enforces unit length: quaternions built from rotations are normalized, but arithmetic
/// on them can drift, and [`Quat::normalize`] has to be called explicitly.
///
/// Quaternions are stored like a 4-dimensional vector with the fields `x`, `y` and `z` holding the
/// vector (imaginary) part and `w` holding the scalar (real) part.
///
/// # Rotation Order
///
/// The product `a * b` describes the rotation `b` followed by the rotation `a`, matching the
/// behavior of rotation matrices.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, `(0, 0, 0, 1)`.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T: Zero> Quat<T> {
    /// The quaternion with every component set to 0.
    pub const ZERO: Self = Self {
        vec: Vector::ZERO,
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its components.
    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components of this quaternion as a [`Vector`] `(x, y, z, w)`.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the vector (imaginary) part `(x, y, z)`.
    pub fn xyz(self) -> Vec3<T> {
        self.vec.truncate()
    }

    /// Resets every component of `self` to 0, in place.
    pub fn set_zero(&mut self)
    where
        T: Zero,
    {
        self.vec.set_zero();
    }

    /// Resets `self` to [`Quat::IDENTITY`], in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let mut q = Quatd::from_rotation_x(1.0);
    /// q.set_identity();
    /// assert_eq!(q, Quat::IDENTITY);
    /// ```
    pub fn set_identity(&mut self)
    where
        T: Zero + One,
    {
        self.vec = vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    }

    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` has to be of unit length for the result to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3d::Z, FRAC_PI_2);
    /// assert_abs_diff_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-15);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        let [x, y, z] = (axis * sin).into_array();
        Self::from_components(x, y, z, cos)
    }

    /// Creates the shortest rotation that turns the direction of `from` into the direction of `to`.
    ///
    /// Neither vector needs to be normalized. If they point in exactly opposite directions, the
    /// rotation axis is undefined and the result is a zero quaternion with `NaN` components.
    pub fn from_rotation_arc(from: Vec3<T>, to: Vec3<T>) -> Self
    where
        T: Float,
    {
        let [x, y, z] = from.cross(to).into_array();
        let w = from.dot(to) + (from.length2() * to.length2()).sqrt();
        Self::from_components(x, y, z, w).normalize()
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion rotating around the X, Y, and Z axis, in that sequence.
    ///
    /// The result is equivalent to `Mat3::rotation_z(z) * Mat3::rotation_y(y) *
    /// Mat3::rotation_x(x)`.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// Picks the numerically stable formula based on the trace and the largest diagonal element.
    /// `m` is expected to be a pure rotation; scaled or sheared matrices give meaningless results.
    pub fn from_rotation_matrix(m: Mat3<T>) -> Self
    where
        T: Float,
    {
        let half = Self::one_half();
        let [m11, m22, m33] = m.into_diagonal().into_array();
        let trace = m11 + m22 + m33;

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt();
            let h = half / s;
            Self::from_components(
                (m[(2, 1)] - m[(1, 2)]) * h,
                (m[(0, 2)] - m[(2, 0)]) * h,
                (m[(1, 0)] - m[(0, 1)]) * h,
                half * s,
            )
        } else if m11 >= m22 && m11 >= m33 {
            let s = (T::ONE + m11 - m22 - m33).sqrt();
            let h = half / s;
            Self::from_components(
                half * s,
                (m[(0, 1)] + m[(1, 0)]) * h,
                (m[(0, 2)] + m[(2, 0)]) * h,
                (m[(2, 1)] - m[(1, 2)]) * h,
            )
        } else if m22 > m33 {
            let s = (T::ONE + m22 - m11 - m33).sqrt();
            let h = half / s;
            Self::from_components(
                (m[(1, 0)] + m[(0, 1)]) * h,
                half * s,
                (m[(2, 1)] + m[(1, 2)]) * h,
                (m[(0, 2)] - m[(2, 0)]) * h,
            )
        } else {
            let s = (T::ONE + m33 - m11 - m22).sqrt();
            let h = half / s;
            Self::from_components(
                (m[(2, 0)] + m[(0, 2)]) * h,
                (m[(2, 1)] + m[(1, 2)]) * h,
                half * s,
                (m[(1, 0)] - m[(0, 1)]) * h,
            )
        }
    }

    /// Converts this quaternion into a 3x3 rotation matrix.
    ///
    /// `self` should be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quatd::from_rotation_y(0.4);
    /// assert_abs_diff_eq!(q.to_rotation_matrix(), Mat3d::rotation_y(0.4), epsilon = 1e-15);
    /// ```
    pub fn to_rotation_matrix(self) -> Mat3<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        #[rustfmt::skip]
        let m = Mat3::from_rows([
            [T::ONE - two * (yy + zz), two * (xy - zw),          two * (xz + yw)],
            [two * (xy + zw),          T::ONE - two * (xx + zz), two * (yz - xw)],
            [two * (xz - yw),          two * (yz + xw),          T::ONE - two * (xx + yy)],
        ]);
        m
    }

    /// Converts this quaternion into a 4x4 rotation matrix without translation.
    pub fn to_rotation_matrix4(self) -> Mat4<T>
    where
        T: Number,
    {
        Mat4::from_mat3(self.to_rotation_matrix())
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A zero quaternion yields `NaN` components.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion, which negates the vector part.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse, `conjugate() / length2()`.
    ///
    /// The inverse of a zero quaternion has `NaN` components.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() / self.length2()
    }

    /// Raises this unit quaternion to the power `exponent`, scaling the rotation angle it
    /// represents by `exponent`.
    ///
    /// Quaternions with `|w|` within [`Float::EPSILON`] of 1 (no rotation) are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quatd::from_rotation_z(0.5);
    /// assert_abs_diff_eq!(q.power(3.0), Quatd::from_rotation_z(1.5), epsilon = 1e-14);
    /// ```
    #[doc(alias = "pow")]
    pub fn power(self, exponent: T) -> Self
    where
        T: Float,
    {
        let [x, y, z, w] = self.vec.into_array();
        if w.abs() >= T::ONE - T::EPSILON {
            return self;
        }

        let alpha = w.acos();
        let new_alpha = alpha * exponent;
        let scale = new_alpha.sin() / alpha.sin();
        Self::from_components(x * scale, y * scale, z * scale, new_alpha.cos())
    }

    /// Linearly interpolates each component between `self` and `target`.
    ///
    /// `t` is not clamped and the result is not normalized. Prefer [`Quat::slerp`] for rotations.
    pub fn lerp(self, target: Self, t: T) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.vec.lerp(target.vec, t),
        }
    }

    /// Spherically interpolates between the unit quaternions `self` and `target`, along the
    /// shortest path.
    ///
    /// Interpolating between nearly identical rotations falls back to a normalized linear
    /// interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let a = Quatd::from_rotation_x(0.0);
    /// let b = Quatd::from_rotation_x(2.0);
    /// assert_abs_diff_eq!(a.slerp(b, 0.25), Quatd::from_rotation_x(0.5), epsilon = 1e-14);
    /// ```
    pub fn slerp(self, target: Self, t: T) -> Self
    where
        T: Float,
    {
        let mut target = target;
        let mut dot = self.dot(target);
        if dot < T::ZERO {
            target = -target;
            dot = -dot;
        }

        if dot > T::from_f64(0.9995) {
            return self.lerp(target, t).normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        self * a + target * b
    }

    /// Returns the angle between `self` and `other` interpreted as 4-dimensional vectors.
    ///
    /// For unit quaternions, this is half of the angle of the rotation between them.
    pub fn angle(self, other: Self) -> T
    where
        T: Float,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        MinMax::clamp(cos, -T::ONE, T::ONE).acos()
    }

    /// Returns whether every component is closer to zero than [`Float::EPSILON`].
    pub fn is_zero(&self) -> bool
    where
        T: Float,
    {
        self.vec.is_zero()
    }

    /// Returns whether every component differs from the one in `other` by less than
    /// [`Float::EPSILON`].
    pub fn nearly_equal(&self, other: &Self) -> bool
    where
        T: Float,
    {
        self.vec.nearly_equal(&other.vec)
    }

    /// Rotates the vector `v` by this quaternion, computing `self * v * self⁻¹`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z] = v.into_array();
        (self * Self::from_components(x, y, z, T::ZERO) * self.inverse()).xyz()
    }
}

impl<T: Default> Default for Quat<T> {
    fn default() -> Self {
        Self {
            vec: Vector::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}

/// Shorthand for [`Quat::from_components`].
pub const fn quat<T>(x: T, y: T, z: T, w: T) -> Quat<T> {
    Quat::from_components(x, y, z, w)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use crate::{vec3, Mat3d, Vec3d};

    use super::*;

    /// Quaternions `q` and `-q` describe the same rotation.
    fn assert_same_rotation(a: Quatd, b: Quatd) {
        let same = approx::abs_diff_eq!(a, b, epsilon = 1e-12);
        let flipped = approx::abs_diff_eq!(a, -b, epsilon = 1e-12);
        assert!(same || flipped, "{a:?} and {b:?} differ");
    }

    #[test]
    fn fields() {
        let mut q = quat(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
        q.w = 5.0;
        assert_eq!(q.into_vec(), vec4(1.0, 2.0, 3.0, 5.0));
        assert_eq!(q.xyz(), vec3(1.0, 2.0, 3.0));
        assert_eq!(
            format!("{:?}", Quatd::IDENTITY),
            "Quat { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }"
        );
    }

    #[test]
    fn resets() {
        let mut q = quat(1.0, 2.0, 3.0, 4.0);
        q.set_zero();
        assert_eq!(q, Quatd::ZERO);
        assert!(q.is_zero());
        q.set_identity();
        assert_eq!(q, Quatd::IDENTITY);
        assert!(q.nearly_equal(&quat(0.0, 0.0, 1e-17, 1.0)));
        assert!(!q.nearly_equal(&quat(0.0, 0.0, 1e-9, 1.0)));
    }

    #[test]
    fn hamilton_product() {
        let i = quat(1.0, 0.0, 0.0, 0.0);
        let j = quat(0.0, 1.0, 0.0, 0.0);
        let k = quat(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, quat(0.0, 0.0, 0.0, -1.0));

        let q = quat(1.0, -2.0, 0.5, 3.0);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
    }

    #[test]
    fn dot_uses_every_product() {
        let a = quat(1.0, 2.0, 3.0, 4.0);
        let b = quat(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 5.0 + 12.0 + 21.0 + 32.0);
        assert_eq!(Quatd::IDENTITY.dot(Quatd::ZERO), 0.0);
    }

    #[test]
    fn inverse() {
        let q = quat(1.0, -2.0, 0.5, 3.0);
        assert_abs_diff_eq!(q * q.inverse(), Quatd::IDENTITY, epsilon = 1e-15);
        assert_abs_diff_eq!(q.inverse() * q, Quatd::IDENTITY, epsilon = 1e-15);

        let unit = Quatd::from_rotation_xyz(0.3, -1.2, 2.0);
        assert_abs_diff_eq!(unit.inverse(), unit.conjugate(), epsilon = 1e-15);
        assert_abs_diff_eq!((q * unit) / unit, q, epsilon = 1e-14);
    }

    #[test]
    fn axis_rotations_match_matrices() {
        for angle in [0.0, 0.4, -1.3, 3.0] {
            assert_abs_diff_eq!(
                Quatd::from_rotation_x(angle).to_rotation_matrix(),
                Mat3d::rotation_x(angle),
                epsilon = 1e-14
            );
            assert_abs_diff_eq!(
                Quatd::from_rotation_y(angle).to_rotation_matrix(),
                Mat3d::rotation_y(angle),
                epsilon = 1e-14
            );
            assert_abs_diff_eq!(
                Quatd::from_rotation_z(angle).to_rotation_matrix(),
                Mat3d::rotation_z(angle),
                epsilon = 1e-14
            );
        }

        assert_abs_diff_eq!(
            Quatd::from_rotation_xyz(0.3, -1.2, 2.0).to_rotation_matrix(),
            Mat3d::rotation_z(2.0) * Mat3d::rotation_y(-1.2) * Mat3d::rotation_x(0.3),
            epsilon = 1e-14
        );
        assert_abs_diff_eq!(
            Quatd::from_rotation_x(1.0).to_rotation_matrix4(),
            Mat4::rotation_x(1.0),
            epsilon = 1e-14
        );
    }

    #[test]
    fn matrix_round_trip() {
        // Covers the positive-trace branch and each largest-diagonal branch.
        let cases = [
            Quatd::IDENTITY,
            Quatd::from_rotation_x(0.5),
            Quatd::from_rotation_x(3.0),
            Quatd::from_rotation_y(3.0),
            Quatd::from_rotation_z(3.0),
            Quatd::from_rotation_x(PI),
            Quatd::from_rotation_xyz(2.5, 0.2, -2.9),
            Quatd::from_axis_angle(vec3(1.0, 1.0, 1.0).normalize(), 2.0),
        ];
        for q in cases {
            let m = q.to_rotation_matrix();
            assert_same_rotation(m.to_quat(), q);
            assert_same_rotation(Mat3d::to_quat(m), q);
        }

        assert_same_rotation(Mat3d::rotation_x(0.8).to_quat(), Quatd::from_rotation_x(0.8));
        assert_same_rotation(Mat3d::rotation_y(2.8).to_quat(), Quatd::from_rotation_y(2.8));
        assert_same_rotation(Mat3d::rotation_z(-2.8).to_quat(), Quatd::from_rotation_z(-2.8));
    }

    #[test]
    fn rotate_vectors() {
        let q = Quatd::from_rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(q * Vec3d::X, Vec3d::Y, epsilon = 1e-15);
        assert_abs_diff_eq!(q.rotate(Vec3d::Y), -Vec3d::X, epsilon = 1e-15);

        // Scaling a quaternion does not scale the rotated vector.
        let scaled = q * 3.0;
        assert_abs_diff_eq!(scaled * Vec3d::X, Vec3d::Y, epsilon = 1e-15);

        let q = Quatd::from_rotation_xyz(0.3, -1.2, 2.0);
        let v = vec3(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(q * v, q.to_rotation_matrix() * v, epsilon = 1e-14);
    }

    #[test]
    fn rotation_arc() {
        let q = Quatd::from_rotation_arc(Vec3d::X, vec3(0.0, 5.0, 0.0));
        assert_abs_diff_eq!(q, Quatd::from_rotation_z(FRAC_PI_2), epsilon = 1e-14);

        let from = vec3(1.0, 2.0, -1.0);
        let to = vec3(-3.0, 0.5, 2.0);
        let q = Quatd::from_rotation_arc(from, to);
        assert_abs_diff_eq!((q * from).normalize(), to.normalize(), epsilon = 1e-14);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn power() {
        let q = Quatd::from_rotation_y(0.8);
        assert_abs_diff_eq!(q.power(1.0), q, epsilon = 1e-14);
        assert_abs_diff_eq!(q.power(2.0), q * q, epsilon = 1e-14);
        assert_abs_diff_eq!(q.power(0.5), Quatd::from_rotation_y(0.4), epsilon = 1e-14);
        // The identity has no rotation axis and is returned as-is.
        assert_eq!(Quatd::IDENTITY.power(7.0), Quatd::IDENTITY);
    }

    #[test]
    fn slerp() {
        let a = Quatd::from_rotation_z(0.2);
        let b = Quatd::from_rotation_z(1.8);
        assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-14);
        assert_abs_diff_eq!(a.slerp(b, 1.0), b, epsilon = 1e-14);
        assert_abs_diff_eq!(a.slerp(b, 0.5), Quatd::from_rotation_z(1.0), epsilon = 1e-14);

        // Takes the short way around when the target is in the opposite hemisphere.
        assert_abs_diff_eq!(a.slerp(-b, 0.5), Quatd::from_rotation_z(1.0), epsilon = 1e-14);

        for t in [0.0, 0.3, 1.0, 2.0] {
            assert_abs_diff_eq!(a.slerp(a, t), a, epsilon = 1e-14);
        }
    }

    #[test]
    fn lerp_and_angle() {
        let a = Quatd::from_rotation_z(0.0);
        let b = Quatd::from_rotation_z(1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_abs_diff_eq!(a.angle(b), 0.5, epsilon = 1e-14);
        // Rounding may push the cosine past 1, which must not produce NaN.
        assert!(b.angle(b) < 1e-7);
    }
}
