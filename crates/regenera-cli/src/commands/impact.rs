use anyhow::Result;
use tokio::sync::mpsc;

use regenera_core::content::{impact_metrics, ImpactMetric};
use regenera_core::motion::{CounterAnimator, Metric};
use regenera_core::AppConfig;

/// Run the impact counters headless, one line per frame
pub async fn run(config: &AppConfig) -> Result<()> {
    let metrics = impact_metrics();

    let header: Vec<String> = metrics
        .iter()
        .map(|m| {
            let label = ImpactMetric::find(&m.id).map(|info| info.label).unwrap_or(m.id.as_str());
            format!("{:>18}", label)
        })
        .collect();
    println!("{}", header.join(" "));

    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Metric>>();
    let animator = CounterAnimator::new(&config.motion);
    let handle = animator.start(metrics, move |frame: &[Metric]| {
        let _ = tx.send(frame.to_vec());
    });

    // The sender lives in the animation task; the channel closes after the last frame
    while let Some(frame) = rx.recv().await {
        let row: Vec<String> = frame
            .iter()
            .map(|m| format!("{:>18}", format!("{} {}", m.display_value(), m.unit)))
            .collect();
        println!("{}", row.join(" "));
    }

    handle.join().await;
    Ok(())
}
