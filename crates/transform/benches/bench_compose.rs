use std::hint::black_box;
use std::time::Instant;

use glam::Vec3;
use tetraview_common::CameraPose;
use tetraview_transform::{Perspective, Pipeline};

fn bench_transform(iterations: usize) {
    let pose = CameraPose {
        position: Vec3::new(0.0, 1.0, -2.0),
        target: Vec3::new(0.0, -0.3, 1.0).normalize(),
        up: Vec3::Y,
    };
    let perspective = Perspective {
        fov_degrees: 60.0,
        width: 1024.0,
        height: 768.0,
        near: 1.0,
        far: 100.0,
    };

    let start = Instant::now();
    let mut angle = 0.0_f32;
    for _ in 0..iterations {
        angle += 0.1;
        let mut p = Pipeline::new();
        p.rotate(0.0, angle, 0.0)
            .world_pos(0.0, 0.0, 3.0)
            .set_camera(pose)
            .set_perspective(perspective);
        black_box(p.transform());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  transform ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Transform Composition Benchmarks ===\n");
    bench_transform(10_000);
    bench_transform(100_000);
    bench_transform(1_000_000);
}
