use std::path::Path;

use cytosim::config::{DatasetConfig, DEFAULT_BINS, DEFAULT_HISTOGRAM_RECORDS};
use cytosim::generation::{create_rng, Distribution};
use cytosim::{plot, Dataset, Describe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the bundled panel and show what was read
    let dataset = Dataset::load(&DatasetConfig::default())?;
    let (rows, cols) = dataset.table().shape();
    println!("Data Dimension: {rows} rows and {cols} columns.");
    print!("{}", dataset.table().head(5));

    println!("\nSummary statistics");
    print!("{}", dataset.get_summary(None)?);

    // Simulate every column with each family and compare the means
    let mut rng = create_rng(Some(2024));
    let columns = dataset.table().columns().to_vec();
    let families = [
        Distribution::Poisson,
        Distribution::Normal,
        Distribution::negative_binomial(0.5)?,
    ];
    let observed = dataset.get_mean(None)?;
    for family in families {
        let generated = dataset.generate_records(&columns, 500, family, &mut rng)?;
        println!("\n{family}: observed mean vs. generated mean");
        for ((name, obs), (_, summary)) in observed.iter().zip(generated.describe().iter()) {
            println!("  {name:>8}: {obs:>8.2} {:>8.2}", summary.mean);
        }
    }

    // Correlation is not carried over into generated records
    println!("\nObserved correlation");
    print!("{}", dataset.correlation(&columns)?);
    let generated = dataset.generate_records(&columns, 500, Distribution::Normal, &mut rng)?;
    println!("\nGenerated correlation (normal)");
    print!("{}", generated.correlation());

    // Charts
    let first = &columns[0];
    let (obs_hist, gen_hist) = dataset.compare_histograms(
        first,
        DEFAULT_HISTOGRAM_RECORDS,
        Distribution::Normal,
        DEFAULT_BINS,
        &mut rng,
    )?;
    plot::render_histogram_comparison(Path::new("histogram_comparison.png"), first, &obs_hist, &gen_hist)?;
    plot::render_correlation_heatmap(Path::new("correlation_heatmap.png"), &dataset.correlation(&columns)?)?;

    println!("\nResults saved to:");
    println!("- histogram_comparison.png");
    println!("- correlation_heatmap.png");

    Ok(())
}
