#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};
use vector3d::Vector3;

fn points() -> Vec<Vector3> {
    (0..1000)
        .map(|i| {
            let i = i as f64;
            Vector3::new(i.sin(), i.cos(), i * 0.001)
        })
        .collect()
}

fn mutating_add(bench: &mut Bencher) {
    let points = points();
    bench.iter(|| {
        let mut sum = Vector3::zero();
        for p in &points {
            sum.madd(*p);
        }
        black_box(sum)
    });
}

fn cross_normalize(bench: &mut Bencher) {
    let points = points();
    let axis = Vector3::new(0.0, 1.0, 0.0);
    bench.iter(|| {
        points
            .iter()
            .map(|p| axis.cross(*p).normalize())
            .fold(Vector3::zero(), |acc, n| acc.add(n))
    });
}

fn angle(bench: &mut Bencher) {
    let points = points();
    bench.iter(|| {
        points
            .windows(2)
            .map(|pair| pair[0].angle(pair[1]))
            .sum::<f64>()
    });
}

fn to_fixed(bench: &mut Bencher) {
    let points = points();
    bench.iter(|| {
        points
            .iter()
            .map(|p| p.to_fixed(4).len())
            .sum::<usize>()
    });
}

fn parse(bench: &mut Bencher) {
    let rendered: Vec<String> = points().iter().map(|p| p.to_string()).collect();
    bench.iter(|| {
        rendered
            .iter()
            .filter_map(|s| s.parse::<Vector3>().ok())
            .count()
    });
}

benchmark_group!(benches, mutating_add, cross_normalize, angle, to_fixed, parse);
benchmark_main!(benches);
