//! Search load generator.
//!
//! Spawns a fixed number of workers that hammer `GET /search` with popular terms and no
//! think time between requests, then reports throughput, errors and mean latency.

use rand::seq::SliceRandom;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

const SEARCH_TERMS: [&str; 7] = [
    "alpha",
    "beta",
    "electronics",
    "books",
    "product",
    "gamma",
    "delta",
];

struct LoadConfig {
    target: String,
    workers: usize,
    duration: Duration,
}

#[derive(Default)]
struct LoadStats {
    requests: AtomicU64,
    errors: AtomicU64,
    latency_micros: AtomicU64,
    total_found: AtomicU64,
}

impl LoadStats {
    /// Accounts a 2xx response; a body that does not decode counts as an error.
    fn record_reply<E: std::fmt::Display>(&self, term: &str, reply: Result<SearchReply, E>) {
        match reply {
            Ok(reply) => {
                self.total_found.fetch_add(reply.total_found, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::debug!("Search '{}' returned an unreadable body: {}", term, e);
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn report(&self, elapsed: Duration) {
        let requests = self.requests.load(Ordering::Relaxed);
        let errors = self.errors.load(Ordering::Relaxed);
        let mean_ms = if requests == 0 {
            0.0
        } else {
            self.latency_micros.load(Ordering::Relaxed) as f64 / requests as f64 / 1000.0
        };
        let rps = requests as f64 / elapsed.as_secs_f64().max(f64::EPSILON);

        tracing::info!(
            "{} requests ({} errors), {:.1} req/s, mean latency {:.3}ms, {} matches seen",
            requests,
            errors,
            rps,
            mean_ms,
            self.total_found.load(Ordering::Relaxed)
        );
    }
}

#[derive(Deserialize)]
struct SearchReply {
    total_found: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    tracing::info!(
        "Sending search load to {} with {} workers for {:?}",
        config.target,
        config.workers,
        config.duration
    );

    let client = reqwest::Client::new();
    let stats = Arc::new(LoadStats::default());
    let started = Instant::now();
    let deadline = started + config.duration;

    let mut workers = Vec::with_capacity(config.workers);
    for _ in 0..config.workers {
        let client = client.clone();
        let stats = stats.clone();
        let url = format!("{}/search", config.target);
        workers.push(tokio::spawn(async move {
            while Instant::now() < deadline {
                let term = pick_term();
                let sent = Instant::now();
                let result = client.get(&url).query(&[("q", term)]).send().await;

                match result {
                    Ok(resp) if resp.status().is_success() => {
                        stats.record_reply(term, resp.json::<SearchReply>().await);
                    }
                    Ok(resp) => {
                        tracing::debug!("Search '{}' returned {}", term, resp.status());
                        stats.errors.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        tracing::debug!("Search '{}' failed: {}", term, e);
                        stats.errors.fetch_add(1, Ordering::Relaxed);
                    }
                }

                stats
                    .latency_micros
                    .fetch_add(sent.elapsed().as_micros() as u64, Ordering::Relaxed);
                stats.requests.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    // Periodic reporter:
    let reporter_stats = stats.clone();
    let reporter = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(5));
        interval.tick().await;
        loop {
            interval.tick().await;
            reporter_stats.report(started.elapsed());
        }
    });

    for worker in workers {
        worker.await?;
    }
    reporter.abort();

    tracing::info!("Load finished");
    stats.report(started.elapsed());

    Ok(())
}

fn pick_term() -> &'static str {
    SEARCH_TERMS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SEARCH_TERMS[0])
}

fn parse_args(args: &[String]) -> anyhow::Result<LoadConfig> {
    let mut target =
        std::env::var("TARGET_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut workers = 50usize;
    let mut duration_secs = 30u64;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--target" => {
                target = flag_value(args, i)?;
                i += 2;
            }
            "--workers" => {
                workers = flag_value(args, i)?.parse()?;
                i += 2;
            }
            "--duration-secs" => {
                duration_secs = flag_value(args, i)?.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    if workers == 0 {
        anyhow::bail!("--workers must be at least 1");
    }

    Ok(LoadConfig {
        target: normalize_target(&target),
        workers,
        duration: Duration::from_secs(duration_secs),
    })
}

fn flag_value(args: &[String], i: usize) -> anyhow::Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}

fn normalize_target(candidate: &str) -> String {
    let trimmed = candidate.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_target_adds_scheme() {
        assert_eq!(normalize_target("localhost:8080"), "http://localhost:8080");
        assert_eq!(normalize_target("https://host/"), "https://host");
        assert_eq!(normalize_target(" http://host:1 "), "http://host:1");
    }

    #[test]
    fn test_parse_args() {
        let config = parse_args(&args(&[
            "--target",
            "127.0.0.1:9000",
            "--workers",
            "8",
            "--duration-secs",
            "3",
        ]))
        .unwrap();

        assert_eq!(config.target, "http://127.0.0.1:9000");
        assert_eq!(config.workers, 8);
        assert_eq!(config.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_parse_args_rejects_zero_workers() {
        assert!(parse_args(&args(&["--workers", "0"])).is_err());
        assert!(parse_args(&args(&["--workers"])).is_err());
    }

    #[test]
    fn test_record_reply_counts_matches() {
        let stats = LoadStats::default();

        stats.record_reply::<String>("alpha", Ok(SearchReply { total_found: 7 }));
        stats.record_reply::<String>("beta", Ok(SearchReply { total_found: 3 }));

        assert_eq!(stats.total_found.load(Ordering::Relaxed), 10);
        assert_eq!(stats.errors.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_reply_undecodable_body_is_an_error() {
        let stats = LoadStats::default();

        stats.record_reply("alpha", Err("expected value at line 1 column 1"));

        assert_eq!(stats.errors.load(Ordering::Relaxed), 1);
        assert_eq!(stats.total_found.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_pick_term_is_from_list() {
        for _ in 0..100 {
            assert!(SEARCH_TERMS.contains(&pick_term()));
        }
    }
}
