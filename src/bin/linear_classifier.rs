use anyhow::Result;
use rand::thread_rng;
use toy_classifiers::generator::SyntheticClassDataGenerator;
use toy_classifiers::report::plots::plot_class_scatter;

fn main() -> Result<()> {
    env_logger::init();

    let num_samples_per_class = 1000;

    // Unseeded on purpose: each run shows a fresh cloud of the same shape
    let generator = SyntheticClassDataGenerator::default();
    let mut rng = thread_rng();
    let dataset = generator.generate(&mut rng, num_samples_per_class)?;

    dataset.log_summary();
    println!("Inputs shape: {:?}", dataset.x.shape());
    println!("Targets shape: {:?}", dataset.y.shape());

    let plot = plot_class_scatter(&dataset.x, &dataset.y, "Two Gaussian clusters")
        .map_err(anyhow::Error::msg)?;
    plot.write_html("linear_classifier.html");
    println!("Wrote scatter plot to linear_classifier.html");

    Ok(())
}
