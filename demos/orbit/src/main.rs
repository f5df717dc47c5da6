use std::env;
use std::f64::consts::TAU;

use vector3d::log::{debug, error, info, Level};
use vector3d::Vector3;

static STEPS: usize = 8;
static DEFAULT_START: Vector3 = Vector3 {
    x: 3.0,
    y: 1.0,
    z: 0.0,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    vector3d::init_logger(if verbose { Level::Debug } else { Level::Info });

    let start = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(literal) => literal.parse::<Vector3>().unwrap_or_else(|err| {
            error!("invalid start vector {:?}: {}", literal, err);
            DEFAULT_START
        }),
        None => DEFAULT_START,
    };

    info!("start {} radius {}", start.inspect(), start.to_fixed(3));

    let axis = Vector3::new(0.0, 1.0, 0.0);
    let mut position = start;
    for step in 1..=STEPS {
        position = rotate_about_y(start, TAU * step as f64 / STEPS as f64);

        let tangent = axis.cross(position).normalize();
        debug!(
            "step {} theta {:.3} phi {:.3} tangent {}",
            step,
            position.theta(),
            position.phi(),
            tangent.to_fixed(3)
        );
        info!(
            "step {} at {} distance from start {:.3}",
            step,
            position.to_fixed(3),
            start.distance(position)
        );
    }

    let midpoint = start.lerp(position, 0.5).round();
    info!(
        "final {} midpoint {} same magnitude as start: {}",
        position,
        midpoint,
        position.gte(start) && position.lte(start)
    );
}

fn rotate_about_y(v: Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos + v.z * sin, v.y, v.z * cos - v.x * sin)
}
