use criterion::{criterion_group, criterion_main, Criterion};
use glmath::math::scalar::mul_4x4_scalar;
use glmath::math::{Matrix4x4d, Matrix4x4f, SquareMatrix, Vertex4f};
use std::hint::black_box;

fn bench_products(c: &mut Criterion) {
    let a = Matrix4x4f::translated(1.0, 2.0, 3.0) * Matrix4x4f::rotated_y(30.0);
    let b = Matrix4x4f::scaled(2.0, 0.5, 1.0) * Matrix4x4f::rotated_x(15.0);
    let v = Vertex4f::new(1.0, -2.0, 0.5, 1.0);

    let mut group = c.benchmark_group("4x4 Products");

    group.bench_function("Scalar kernel (f32)", |bench| {
        bench.iter(|| mul_4x4_scalar(black_box(&a.cols), black_box(&b.cols)));
    });

    // Dispatches to the SSE kernel when the `simd` feature is on.
    group.bench_function("Matrix operator (f32)", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    group.bench_function("SSE kernel (f32)", |bench| {
        bench.iter(|| glmath::math::simd::mul_mat4(black_box(&a.cols), black_box(&b.cols)));
    });

    group.bench_function("Matrix * Vertex (f32)", |bench| {
        bench.iter(|| black_box(a) * black_box(v));
    });

    let ad = Matrix4x4d::from(a);
    let bd = Matrix4x4d::from(b);
    group.bench_function("Matrix operator (f64)", |bench| {
        bench.iter(|| black_box(ad) * black_box(bd));
    });

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let m = Matrix4x4d::translated(1.0, 2.0, 3.0) * Matrix4x4d::rotated(40.0, [1.0, 1.0, 0.0].into());

    let mut group = c.benchmark_group("4x4 Inverse");

    group.bench_function("Determinant (f64)", |bench| {
        bench.iter(|| black_box(m).determinant());
    });

    group.bench_function("Inverse (f64)", |bench| {
        bench.iter(|| black_box(m).inverse());
    });

    group.finish();
}

criterion_group!(benches, bench_products, bench_inverse);
criterion_main!(benches);
