//! Scaling, rotation, translation, view and projection matrix builders.
//!
//! All builders assume column vectors multiplied from the left, and a right-handed coordinate
//! system. Projection matrices map to OpenGL-style clip space (depth in `-1..=1`).

use crate::{vec4, Float, Mat2, Mat3, Mat4, Number, Quat, Trig, Vec2, Vec3};

impl<T: Number> Mat2<T> {
    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane (a rotation
    /// around the Z axis).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Mat2d::rotation_z(FRAC_PI_2) * Vec2d::X;
    /// assert!(v.distance(Vec2d::Y) < 1e-15);
    /// ```
    #[doc(alias = "rotation_counterclockwise")]
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_z(-radians)
    }

    /// Creates a matrix that scales the X and Y axes by the elements of `v`.
    pub fn scaling(v: Vec2<T>) -> Self {
        Self::from_diagonal(v)
    }

    /// Returns `self` followed by a scale of `v` applied first (`self * Mat2::scaling(v)`).
    pub fn scale(self, v: Vec2<T>) -> Self {
        self * Self::scaling(v)
    }
}

impl<T: Number> Mat3<T> {
    /// Creates a matrix that scales each axis by the corresponding element of `v`.
    pub fn scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal(v)
    }

    /// Returns `self * Mat3::scaling(v)`.
    pub fn scale(self, v: Vec3<T>) -> Self {
        self * Self::scaling(v)
    }

    /// Creates a rotation of `radians` around the X axis.
    ///
    /// Positive angles rotate counterclockwise when looking from the positive X axis towards the
    /// origin (Y turns towards Z).
    #[rustfmt::skip]
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [l, o,  o],
            [o, c, -s],
            [o, s,  c],
        ])
    }

    /// Creates a rotation of `radians` around the Y axis (Z turns towards X).
    #[rustfmt::skip]
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [ c, o, s],
            [ o, l, o],
            [-s, o, c],
        ])
    }

    /// Creates a rotation of `radians` around the Z axis (X turns towards Y).
    #[rustfmt::skip]
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [c, -s, o],
            [s,  c, o],
            [o,  o, l],
        ])
    }

    /// Creates a rotation of `radians` around an arbitrary `axis`.
    ///
    /// `axis` does not need to be normalized, but must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let a = Mat3d::rotation_axis(vec3(2.0, 0.0, 0.0), 0.3);
    /// assert_abs_diff_eq!(a, Mat3d::rotation_x(0.3), epsilon = 1e-15);
    /// ```
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        let [x, y, z] = axis.into_array();
        let (s, c) = radians.sin_cos();
        let one_c = T::ONE - c;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let l = xx + yy + zz;
        let sq = l.sqrt();

        #[rustfmt::skip]
        let m = Self::from_rows([
            [xx + (yy + zz) * c,      xy * one_c - z * sq * s, xz * one_c + y * sq * s],
            [xy * one_c + z * sq * s, yy + (xx + zz) * c,      yz * one_c - x * sq * s],
            [xz * one_c - y * sq * s, yz * one_c + x * sq * s, zz + (xx + yy) * c],
        ]);
        m * (T::ONE / l)
    }

    /// Returns `self * Mat3::rotation_axis(axis, radians)`.
    pub fn rotate_axis(self, axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        self * Self::rotation_axis(axis, radians)
    }

    /// Converts this rotation matrix into a quaternion.
    ///
    /// `self` is expected to be a pure rotation (orthonormal with determinant 1); this is not
    /// checked.
    pub fn to_quat(self) -> Quat<T>
    where
        T: Float,
    {
        Quat::from_rotation_matrix(self)
    }
}

impl<T: Number> Mat4<T> {
    /// Embeds a 3x3 linear transform in the upper-left corner of a 4x4 identity matrix.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let mut out = m.resize::<4, 4>();
        out[(3, 3)] = T::ONE;
        out
    }

    /// Creates a matrix that scales X, Y and Z by the elements of `v` (W is left unchanged).
    pub fn scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal(v.extend(T::ONE))
    }

    /// Returns `self * Mat4::scaling(v)`.
    pub fn scale(self, v: Vec3<T>) -> Self {
        self * Self::scaling(v)
    }

    /// Creates a translation by `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// let m = Mat4d::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// // Directions (W = 0) are not affected.
    /// assert_eq!(m * Vec4d::X, Vec4d::X);
    /// ```
    pub fn translation(v: Vec3<T>) -> Self {
        Self::IDENTITY.translate(v)
    }

    /// Adds `v` to the translation column of `self`.
    pub fn translate(mut self, v: Vec3<T>) -> Self {
        for row in 0..3 {
            self[(row, 3)] = self[(row, 3)] + v[row];
        }
        self
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        Self::from_mat3(Mat3::rotation_x(radians))
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        Self::from_mat3(Mat3::rotation_y(radians))
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        Self::from_mat3(Mat3::rotation_z(radians))
    }

    /// Creates a rotation of `radians` around an arbitrary, non-zero `axis`.
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        Self::from_mat3(Mat3::rotation_axis(axis, radians))
    }

    /// Returns `self * Mat4::rotation_axis(axis, radians)`.
    pub fn rotate_axis(self, axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        self * Self::rotation_axis(axis, radians)
    }

    /// Converts the rotation in the upper-left 3x3 part of this matrix into a quaternion.
    pub fn to_quat(self) -> Quat<T>
    where
        T: Float,
    {
        self.resize::<3, 3>().to_quat()
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// The camera looks down its local -Z axis, with `up` roughly pointing along local +Y. `up`
    /// must not be parallel to the viewing direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let view = Mat4d::look_at(vec3(0.0, 0.0, 5.0), Vec3d::ZERO, Vec3d::Y);
    /// assert_abs_diff_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
    /// ```
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Self::from_rows([
            side.extend(-side.dot(eye)),
            up.extend(-up.dot(eye)),
            (-forward).extend(forward.dot(eye)),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ])
    }

    /// Creates an orthographic projection mapping the box `left..right`, `bottom..top`,
    /// `-near..-far` onto the `[-1, 1]` clip cube.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [two / w, o,       o,        -(right + left) / w],
            [o,       two / h, o,        -(top + bottom) / h],
            [o,       o,       -two / d, -(far + near) / d],
            [o,       o,       o,        T::ONE],
        ]);
        m
    }

    /// Creates a perspective projection with a vertical field of view of `fov_y` radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathkit::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let proj = Mat4d::perspective(1.0, 16.0 / 9.0, 0.1, 100.0);
    /// // Points on the near plane land at depth -1, on the far plane at +1.
    /// let near = proj * vec4(0.0, 0.0, -0.1, 1.0);
    /// let far = proj * vec4(0.0, 0.0, -100.0, 1.0);
    /// assert_abs_diff_eq!(near.z / near.w, -1.0, epsilon = 1e-12);
    /// assert_abs_diff_eq!(far.z / far.w, 1.0, epsilon = 1e-12);
    /// ```
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let f = T::ONE / (fov_y / two).tan();
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [f / aspect, o, o,                           o],
            [o,          f, o,                           o],
            [o,          o, (far + near) / (near - far), two * far * near / (near - far)],
            [o,          o, -T::ONE,                     o],
        ]);
        m
    }

    /// Creates a perspective projection from a field of view of `fov` radians and the viewport
    /// dimensions `width` and `height`.
    pub fn perspective_fov(fov: T, width: T, height: T, near: T, far: T) -> Self
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let (s, c) = (fov / two).sin_cos();
        let h = c / s;
        let w = h * height / width;
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [w, o, o,                            o],
            [o, h, o,                            o],
            [o, o, -(far + near) / (far - near), -two * far * near / (far - near)],
            [o, o, -T::ONE,                      o],
        ]);
        m
    }

    /// Creates a perspective projection whose far plane is infinitely far away.
    ///
    /// Depth precision drops off with distance.
    pub fn perspective_infinite(fov_y: T, aspect: T, near: T) -> Self
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let range = (fov_y / two).tan() * near;
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [near / (range * aspect), o,            o,       o],
            [o,                       near / range, o,       o],
            [o,                       o,            -T::ONE, -two * near],
            [o,                       o,            -T::ONE, o],
        ]);
        m
    }
}
