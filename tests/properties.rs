//! Randomized checks of the algebraic identities the library relies on.

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastrand::Rng;
use mathkit::{
    ease::{self, Easing},
    *,
};

const ITERATIONS: usize = 500;

fn init() -> Rng {
    env_logger::builder()
        .is_test(true)
        .filter_module("mathkit", log::LevelFilter::Debug)
        .try_init()
        .ok();
    Rng::with_seed(0x6d61_7468)
}

fn scalar(rng: &mut Rng) -> f64 {
    rng.f64() * 20.0 - 10.0
}

fn vector<const N: usize>(rng: &mut Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| scalar(rng))
}

fn unit_quat(rng: &mut Rng) -> Quatd {
    loop {
        let q = Quatd::from_vec(vector(rng));
        if q.length() > 0.1 {
            return q.normalize();
        }
    }
}

fn invertible<const N: usize>(rng: &mut Rng) -> Matrix<f64, N, N>
where
    Matrix<f64, N, N>: Invertible,
{
    loop {
        let m = Matrix::from_fn(|_, _| scalar(rng));
        if m.det().abs() > 1.0 {
            return m;
        }
    }
}

/// `q` and `-q` encode the same rotation.
#[track_caller]
fn assert_same_rotation(actual: Quatd, expected: Quatd) {
    let actual = if actual.dot(expected) < 0.0 {
        -actual
    } else {
        actual
    };
    assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
}

/// Lets the property tests treat every square size uniformly.
trait Invertible: Sized {
    fn det(&self) -> f64;
    fn inv(&self) -> Self;
}

macro_rules! invertible {
    ($($n:literal),+) => {
        $(
            impl Invertible for Matrix<f64, $n, $n> {
                fn det(&self) -> f64 {
                    self.determinant()
                }
                fn inv(&self) -> Self {
                    self.inverse()
                }
            }
        )+
    };
}

invertible!(2, 3, 4);

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = vector::<3>(&mut rng);
        if v.length() < 1e-3 {
            continue;
        }
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);

        let v = vector::<2>(&mut rng);
        if v.length() > 1e-3 {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn inverse_matrix_cancels() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let m2 = invertible::<2>(&mut rng);
        assert_abs_diff_eq!(m2 * m2.inv(), Mat2d::IDENTITY, epsilon = 1e-9);

        let m3 = invertible::<3>(&mut rng);
        assert_abs_diff_eq!(m3 * m3.inv(), Mat3d::IDENTITY, epsilon = 1e-9);
        assert_abs_diff_eq!(m3.inv() * m3, Mat3d::IDENTITY, epsilon = 1e-9);

        let m4 = invertible::<4>(&mut rng);
        assert_abs_diff_eq!(m4 * m4.inv(), Mat4d::IDENTITY, epsilon = 1e-9);
    }
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let a = Mat3d::from_fn(|_, _| scalar(&mut rng));
        let b = Mat3d::from_fn(|_, _| scalar(&mut rng));
        assert_relative_eq!(
            (a * b).determinant(),
            a.determinant() * b.determinant(),
            epsilon = 1e-6,
            max_relative = 1e-9
        );
    }
}

#[test]
fn inverse_quat_cancels() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        assert_abs_diff_eq!(q * q.inverse(), Quatd::IDENTITY, epsilon = 1e-12);
        assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = 1e-12);
    }
}

#[test]
fn quat_rotation_matches_matrix() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        let v = vector::<3>(&mut rng);
        let m = q.to_rotation_matrix();
        assert_abs_diff_eq!(q.rotate(v), m * v, epsilon = 1e-9);
        assert_relative_eq!(q.rotate(v).length(), v.length(), epsilon = 1e-9);
    }
}

#[test]
fn quat_composition_matches_matrix_product() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let a = unit_quat(&mut rng);
        let b = unit_quat(&mut rng);
        assert_abs_diff_eq!(
            (a * b).to_rotation_matrix(),
            a.to_rotation_matrix() * b.to_rotation_matrix(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn matrix_quat_round_trip() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        assert_same_rotation(q.to_rotation_matrix().to_quat(), q);

        let angle = rng.f64() * 2.0 * PI - PI;
        assert_same_rotation(Mat3d::rotation_x(angle).to_quat(), Quatd::from_rotation_x(angle));
        assert_same_rotation(Mat4d::rotation_y(angle).to_quat(), Quatd::from_rotation_y(angle));
        assert_same_rotation(Mat3d::rotation_z(angle).to_quat(), Quatd::from_rotation_z(angle));
    }
}

#[test]
fn slerp_fixed_point_and_endpoints() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        let r = unit_quat(&mut rng);
        let t = rng.f64();
        assert_abs_diff_eq!(q.slerp(q, t), q, epsilon = 1e-12);
        assert_abs_diff_eq!(q.slerp(r, 0.0), q, epsilon = 1e-9);

        // Slerp takes the short way, so it may land on `-r`.
        assert_same_rotation(q.slerp(r, 1.0), r);
        assert_relative_eq!(q.slerp(r, t).length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn lerp_endpoints() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let a = vector::<4>(&mut rng);
        let b = vector::<4>(&mut rng);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_abs_diff_eq!(a.lerp(b, 1.0), b, epsilon = 1e-12);

        let m = Mat2d::from_fn(|_, _| scalar(&mut rng));
        let n = Mat2d::from_fn(|_, _| scalar(&mut rng));
        assert_eq!(m.lerp(n, 0.0), m);
        assert_abs_diff_eq!(m.lerp(n, 1.0), n, epsilon = 1e-12);

        let q = unit_quat(&mut rng);
        let r = unit_quat(&mut rng);
        assert_eq!(q.lerp(r, 0.0), q);
        assert_abs_diff_eq!(q.lerp(r, 1.0), r, epsilon = 1e-12);
    }
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let a = vector::<3>(&mut rng);
        let b = vector::<3>(&mut rng);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-9);
        assert!(a.is_linearly_independent(b, c), "{a:?} x {b:?} = {c:?}");
    }
}

#[test]
fn bounce_in_mirrors_out() {
    let mut rng = init();
    assert_eq!(ease::bounce_ease_out(0.0), 0.0);
    assert_eq!(ease::bounce_ease_out(1.0), 1.0);
    for _ in 0..ITERATIONS {
        let t = rng.f64();
        assert_eq!(ease::bounce_ease_in(t), 1.0 - ease::bounce_ease_out(1.0 - t));
    }
}

#[test]
fn easing_curves_stay_finite() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let easing = Easing::ALL[rng.usize(..Easing::ALL.len())];
        let t = rng.f64();
        let v = easing.apply(t);
        assert!(v.is_finite(), "{easing:?}({t}) = {v}");
        // Even the overshooting curves stay well within this band.
        assert!((-0.5..=1.5).contains(&v), "{easing:?}({t}) = {v}");
    }
}

#[test]
fn reference_values() {
    init();

    assert_eq!(Mat2d::from_rows([[1.0, 0.0], [0.0, 1.0]]).determinant(), 1.0);
    assert_eq!(
        Mat2d::from_diagonal([2.0, 2.0]).inverse(),
        Mat2d::from_diagonal([0.5, 0.5])
    );
    assert_eq!(
        vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
        vec3(0.0, 0.0, 1.0)
    );
    assert_eq!(to_radians(180.0), PI);
    assert_eq!(clamp(50, 10, 20), 20);
    assert_eq!(clamp(5, 10, 20), 10);
}

#[test]
fn degenerate_input_does_not_panic() {
    init();

    let n = Vec3d::ZERO.normalize();
    assert!(n.into_array().iter().all(|c| c.is_nan()));

    let inv = Mat3d::ZERO.inverse();
    assert!((0..3).all(|i| inv.column(i).into_array().iter().all(|c| !c.is_finite())));

    let q = Quatd::ZERO.normalize();
    assert!(q.into_vec().into_array().iter().all(|c| c.is_nan()));
}
