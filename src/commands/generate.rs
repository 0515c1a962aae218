//! Generate static files

use anyhow::Result;

use crate::generator::{GenerateReport, Generator};
use crate::source::ContentSource;
use crate::Site;

/// Generate the static site from the configured repository
pub async fn run(site: &Site) -> Result<()> {
    let client = site.connect().await?;
    run_with_source(site, &client).await?;
    Ok(())
}

/// Generate the static site from any content source
pub async fn run_with_source<S: ContentSource + ?Sized>(
    site: &Site,
    source: &S,
) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site, source)?;
    let report = generator.generate().await?;

    tracing::info!(
        "Listed {} posts, generated {} pages",
        report.listed,
        report.generated
    );
    if !report.skipped.is_empty() {
        tracing::warn!("Skipped posts: {}", report.skipped.join(", "));
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
