//! Prints a table for every easing curve, followed by a camera orbiting the origin.
//!
//! Usage: `curves [steps]` (default: 10 samples per curve).

use anyhow::{bail, Context};
use log::LevelFilter;
use mathkit::{
    ease::{self, Easing},
    to_degrees, vec3, vec4, Mat4d, Quatd, Vec3d,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("mathkit"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let steps = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid step count '{arg}'"))?,
        None => 10,
    };
    if steps == 0 {
        bail!("usage: curves [steps], with steps > 0");
    }

    print_curves(steps);
    orbit(steps)?;

    Ok(())
}

fn print_curves(steps: usize) {
    print!("{:<18}", "t");
    for i in 0..=steps {
        print!(" {:>6.3}", i as f64 / steps as f64);
    }
    println!();

    for easing in Easing::ALL {
        print!("{:<18}", format!("{easing:?}"));
        for i in 0..=steps {
            print!(" {:>6.3}", easing.apply(i as f64 / steps as f64));
        }
        println!();
    }
}

/// Moves a camera from one orientation to another, checking that the resulting view matrix keeps
/// the origin centered on screen.
fn orbit(steps: usize) -> anyhow::Result<()> {
    let start = Quatd::IDENTITY;
    let end = Quatd::from_rotation_xyz(0.4, 2.5, 0.0);
    let distance = 5.0;
    let projection = Mat4d::perspective(std::f64::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);

    println!();
    println!("{:>6} {:>28} {:>8} {:>10}", "t", "eye", "angle", "depth");
    for i in 0..=steps {
        let t = ease::cubic_ease_in_out(i as f64 / steps as f64);
        let rotation = start.slerp(end, t);
        let eye = rotation.rotate(vec3(0.0, 0.0, distance));
        let up = rotation.rotate(Vec3d::Y);

        let view = Mat4d::look_at(eye, Vec3d::ZERO, up);
        let clip = projection * view * vec4(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        if ndc.truncate().length() > 1e-9 {
            bail!("origin drifted off-center at t={t}: {ndc:?}");
        }

        log::debug!("view matrix at t={t}: {view:?}");
        println!(
            "{:>6.3} {:>8.3} {:>9.3} {:>9.3} {:>7.1}° {:>10.6}",
            t,
            eye.x,
            eye.y,
            eye.z,
            to_degrees(rotation.angle(start) * 2.0),
            ndc.z,
        );
    }

    Ok(())
}
