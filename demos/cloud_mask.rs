use cloudseg::{segment, Image, KmeansConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Synthetic 48x32 sky: dark gradient background with two bright
    // cloud blobs. Stands in for a decoded RGB frame.
    let (width, height) = (48, 32);
    let mut image = Image::from_fn(width, height, 3, |x, y| {
        let blob = |cx: f64, cy: f64, r: f64| {
            let (dx, dy) = (x as f64 - cx, y as f64 - cy);
            dx * dx + dy * dy < r * r
        };
        if blob(12.0, 10.0, 6.0) || blob(34.0, 20.0, 8.0) {
            235
        } else {
            (20 + y) as u8
        }
    })?;

    let config = KmeansConfig::default()
        .with_k(5)
        .with_cloud_percent(0.6)
        .with_max_iterations(50);
    let seg = segment(&mut image, &config)?;

    println!(
        "image={}x{} clusters={} iterations={} termination={:?}",
        width,
        height,
        config.k,
        seg.outcome.iterations,
        seg.outcome.termination
    );
    println!("centroids={:?}", seg.outcome.centroids);
    println!("occurrences={:?}", seg.outcome.occurrences);
    println!("cloud cover={:.2}%", seg.foreground_percent);

    // Coarse ASCII preview of the mask.
    for y in (0..height).step_by(2) {
        let row: String = (0..width)
            .map(|x| match image.get(x, y, 0) {
                Some(255) => '#',
                _ => '.',
            })
            .collect();
        println!("{row}");
    }

    Ok(())
}
