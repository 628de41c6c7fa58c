use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use filterkit_image::RasterImage;
use filterkit_imgproc::Filter;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_data = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        let image = RasterImage::new([*width, *height].into(), image_data).unwrap();

        for filter in Filter::ALL {
            group.bench_with_input(
                BenchmarkId::new(filter.name(), &parameter_string),
                &image,
                |b, src| b.iter(|| black_box(filter.apply(black_box(src)))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
