#![warn(clippy::all)]

use log::{info, warn};
use sla::math::{
    matrix::{Matrix4f, SquareMatrix},
    quaternion::Quaternionf,
    scalar::deg2rad,
    vector::{Vector, Vector3f, Vector4f},
    MathError,
};

const STEPS: u16 = 8;

fn main() -> Result<(), MathError> {
    env_logger::init();

    let target = Vector3f::new(0.0, 0.0, 0.0);
    let up = Vector3f::new(0.0, 1.0, 0.0);
    let start = Vector3f::new(0.0, 2.0, 6.0);
    let projection = Matrix4f::perspective_lh(deg2rad(60.0), 16.0 / 9.0, 0.1, 100.0);
    let marker = Vector4f::new(1.0, 0.5, 0.0, 1.0);

    for step in 0..STEPS {
        let angle = 360.0 * f32::from(step) / f32::from(STEPS);
        let orbit = Quaternionf::make_rotation(deg2rad(angle), up);
        let eye = orbit.rotate(&start)?;

        let view = Matrix4f::look_at_lh(&eye, &target, &up)?;
        let clip = projection * view * marker;
        if clip.w <= 0.0 {
            warn!("marker is behind the camera at {angle}°");
            continue;
        }

        let ndc = clip / clip.w;
        info!(
            "{angle:>5.1}° eye {eye} -> marker at ({:.3}, {:.3}), depth {:.4}",
            ndc.x, ndc.y, ndc.z
        );
    }

    match Matrix4f::look_at_lh(&Vector3f::new(0.0, 5.0, 0.0), &target, &up) {
        Ok(_) => info!("top-down view accepted"),
        Err(error) => warn!("top-down view rejected: {error}"),
    }

    let view = Matrix4f::look_at_lh(&start, &target, &up)?;
    if let Some(inverse) = view.inverse() {
        let eye = inverse.transform_point(&Vector3f::zero());
        info!("camera position recovered from the view matrix: {eye}");
    }

    Ok(())
}
