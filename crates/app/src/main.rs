//! Entry point for the Svarog3D matrix tool.
//! Builds transform, view and projection matrices from command line flags
//! and prints them.

mod config;

use anyhow::{Context, Result};
use config::AppConfig;
use svarog_math::gpu::MatrixUniform;
use svarog_math::{
    Matrix4, look_at_matrix, normal_to_euler, perspective_matrix, scalar::to_degrees, view_matrix,
};

fn report(name: &str, matrix: &Matrix4, precision: usize) {
    if !matrix.is_finite() {
        log::warn!("{} has non-finite elements; check for degenerate input.", name);
    }
    println!("{name}:\n{matrix:.precision$}\n");
}

fn run(config: &AppConfig) {
    let (rotation, camera_rotation, punch) = config.rotations_in_radians();
    let precision = config.precision;

    let transform = Matrix4::make_transform(config.position, rotation, config.scale);
    report("transform", &transform, precision);
    log::debug!("transform determinant = {}", transform.determinant());

    let view = view_matrix(
        config.position,
        rotation,
        config.camera_position,
        camera_rotation,
        punch,
    );
    report("view", &view, precision);

    let look_at = look_at_matrix(config.eye, config.target, config.up);
    report("look_at", &look_at, precision);

    let projection = perspective_matrix(config.fov_degrees, config.aspect, config.z_near, config.z_far);
    report("perspective", &projection, precision);

    let view_proj = look_at * projection;
    report("look_at * perspective", &view_proj, precision);
    let uniform = MatrixUniform::from(&view_proj);
    log::debug!("view-projection uniform: {} bytes", uniform.as_bytes().len());

    let euler = normal_to_euler(config.normal, config.up);
    println!(
        "normal_to_euler (degrees): pitch={:.p$}, yaw={:.p$}, roll={:.p$}",
        to_degrees(euler.x),
        to_degrees(euler.y),
        to_degrees(euler.z),
        p = precision
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config =
        AppConfig::from_args(std::env::args().skip(1)).context("Invalid command line arguments")?;
    log::info!(
        "Starting Svarog3D matrix tool. fov={}, aspect={:.3}, near={}, far={}, degrees={}",
        config.fov_degrees,
        config.aspect,
        config.z_near,
        config.z_far,
        config.degrees
    );

    run(&config);

    log::info!("Done.");
    Ok(())
}
