use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fractal::config::{DEFAULT_MAX, DEFAULT_MIN};
use fractal::{render, Fractal, RenderConfig};
use num::Complex;
use std::io;

fn mandelbrot(c: &mut Criterion) {
    let config =
        RenderConfig::new(160, 120, 2, DEFAULT_MAX, DEFAULT_MIN, Fractal::Mandelbrot).unwrap();
    c.bench_function("mandelbrot 160x120", |b| b.iter(|| render(black_box(&config), io::sink())));
}

fn julia_degree_four(c: &mut Criterion) {
    let julia = Fractal::Julia(Complex::new(-0.3, 0.7));
    let config = RenderConfig::new(160, 120, 4, DEFAULT_MAX, DEFAULT_MIN, julia).unwrap();
    c.bench_function("julia d4 160x120", |b| b.iter(|| render(black_box(&config), io::sink())));
}

criterion_group!(benches, mandelbrot, julia_degree_four);
criterion_main!(benches);
