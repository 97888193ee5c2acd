#[macro_use]
extern crate bencher;

use arcblend::geom::vertex_arc;
use arcblend::math::{point, Point};
use arcblend::tessellation::geometry_builder::{simple_builder, VertexBuffers};
use arcblend::tessellation::{CurveOptions, CurveTessellator, EndMode, NoOutput};

use bencher::Bencher;

const N: usize = 100;

// A wavy closed loop with a mix of gentle and sharp turns.
fn build_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * std::f32::consts::PI * 2.0;
            let r = if i % 3 == 0 { 100.0 } else { 300.0 };
            point(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn vertex_arcs(bench: &mut Bencher) {
    let points = build_points(64);

    bench.iter(|| {
        for _ in 0..N {
            for i in 0..points.len() {
                bencher::black_box(vertex_arc(&points, i));
            }
        }
    })
}

fn tessellate_no_output(bench: &mut Bencher) {
    let points = build_points(64);
    let mut tess = CurveTessellator::new();
    let options = CurveOptions::DEFAULT;

    bench.iter(|| {
        for _ in 0..N {
            tess.tessellate(&points, &options, &mut NoOutput::new()).unwrap();
        }
    })
}

fn tessellate_buffers(bench: &mut Bencher) {
    let points = build_points(64);
    let mut tess = CurveTessellator::new();
    let options = CurveOptions::DEFAULT;

    bench.iter(|| {
        for _ in 0..N {
            let mut buffers: VertexBuffers<Point, u32> = VertexBuffers::with_capacity(8192, 16384);
            tess.tessellate(&points, &options, &mut simple_builder(&mut buffers)).unwrap();
        }
    })
}

fn tessellate_open_few_segments(bench: &mut Bencher) {
    let points = build_points(64);
    let mut tess = CurveTessellator::new();
    let options = CurveOptions::segments(8).with_end_mode(EndMode::ShowEnds);

    bench.iter(|| {
        for _ in 0..N {
            let mut buffers: VertexBuffers<Point, u32> = VertexBuffers::new();
            tess.tessellate(&points, &options, &mut simple_builder(&mut buffers)).unwrap();
        }
    })
}

fn segment_parameters(bench: &mut Bencher) {
    let points = build_points(64);
    let mut tess = CurveTessellator::new();
    let options = CurveOptions::DEFAULT;

    bench.iter(|| {
        for _ in 0..N {
            bencher::black_box(tess.segment_parameters(&points, &options).unwrap());
        }
    })
}

benchmark_group!(arcs,
  vertex_arcs
);

benchmark_group!(curve_tess,
  tessellate_no_output,
  tessellate_buffers,
  tessellate_open_few_segments,
  segment_parameters
);

benchmark_main!(arcs, curve_tess);
