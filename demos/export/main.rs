//! Writes a small sample scene as OBJ.
//!
//! Usage:
//! ```text
//! cargo run --example export                  # print to stdout
//! cargo run --example export -- scene.obj     # write to a file
//! RUST_LOG=sfobj=trace cargo run --example export
//! ```

use std::io;

use sfobj::export::{save, save_to_file};
use sfobj::geometry::{
    Geometry, GeometryCollection, LineString, MultiPoint, MultiSolid, Point, Polygon,
    PolyhedralSurface, Solid,
};
use sfobj::SfobjError;

fn main() -> Result<(), SfobjError> {
    // Default: WARN for everything, INFO for sfobj.
    // Override with RUST_LOG env var (e.g. RUST_LOG=sfobj=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sfobj=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let scene = Geometry::from(build_scene()?);

    match std::env::args().nth(1) {
        Some(path) => {
            save_to_file(&scene, &path)?;
            tracing::info!(%path, "scene exported");
        }
        None => save(&scene, &mut io::stdout().lock())?,
    }
    Ok(())
}

fn build_scene() -> Result<GeometryCollection, SfobjError> {
    let mut scene = GeometryCollection::new();

    scene.push(MultiPoint::from(vec![
        Point::new(-1.0, -1.0),
        Point::new(-1.0, 2.0),
    ]))?;
    scene.push(LineString::new(vec![
        Point::new(-1.0, -1.0),
        Point::new_3d(0.0, 0.0, 0.5),
        Point::new_3d(1.0, 1.0, 1.0),
    ])?)?;

    let mut solids = MultiSolid::new();
    solids.push(unit_cube(0.0)?)?;
    solids.push(unit_cube(2.0)?)?;
    scene.push(solids)?;

    Ok(scene)
}

/// An axis-aligned unit cube shifted by `dx` along X.
fn unit_cube(dx: f64) -> Result<Solid, SfobjError> {
    let corner = |x: f64, y: f64, z: f64| Point::new_3d(x + dx, y, z);
    let quad = |a: Point, b: Point, c: Point, d: Point| Polygon::from_exterior(vec![a, b, c, d, a]);

    let p000 = corner(0.0, 0.0, 0.0);
    let p100 = corner(1.0, 0.0, 0.0);
    let p110 = corner(1.0, 1.0, 0.0);
    let p010 = corner(0.0, 1.0, 0.0);
    let p001 = corner(0.0, 0.0, 1.0);
    let p101 = corner(1.0, 0.0, 1.0);
    let p111 = corner(1.0, 1.0, 1.0);
    let p011 = corner(0.0, 1.0, 1.0);

    let shell = PolyhedralSurface::new(vec![
        quad(p000, p010, p110, p100)?,
        quad(p001, p101, p111, p011)?,
        quad(p000, p100, p101, p001)?,
        quad(p100, p110, p111, p101)?,
        quad(p110, p010, p011, p111)?,
        quad(p010, p000, p001, p011)?,
    ]);
    Ok(Solid::new(shell))
}
