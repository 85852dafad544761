/// Top-level synthesis loop: compose, render, save, one seed at a time.
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assets;
use crate::composer;
use crate::constants::DEFAULT_DATABASE_FILE;
use crate::error::SynthesisError;
use crate::metadata::MetadataStore;
use crate::providers::{RenderProvider, SceneGraphProvider};
use crate::serializer;

pub struct SynthesisConfig {
    pub output_dir: PathBuf,
    /// Number of scenes to produce; `None` runs until cancelled.
    pub count: Option<u64>,
    pub start_seed: u64,
    pub database_path: Option<PathBuf>,
    pub human_visible: bool,
}

/// Cooperative stop flag, checked between iterations so an embedder can end
/// an unbounded run cleanly without killing the process mid-write.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Current UTC unix timestamp, the default starting seed.
pub fn timestamp_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn progress_bar(count: Option<u64>) -> ProgressBar {
    let pb = match count {
        Some(count) => {
            let pb = ProgressBar::new(count);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{bar:40.green/blue}] {pos}/{len} scenes ({percent}%) {msg}")
                    .unwrap()
                    .progress_chars("▉▊▋▌▍▎▏ "),
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };
    pb.set_message("Synthesizing scenes");
    pb
}

/// Run the synthesis loop: for each seed, compose the scene, invoke the
/// renderer and serialize the output triple. Strictly sequential; a failure
/// at any stage ends the run.
pub fn run<E>(
    engine: &mut E,
    config: &SynthesisConfig,
    token: &CancellationToken,
) -> Result<(), SynthesisError>
where
    E: SceneGraphProvider + RenderProvider,
{
    std::fs::create_dir_all(&config.output_dir)?;

    let database_path = config
        .database_path
        .clone()
        .unwrap_or_else(|| config.output_dir.join(DEFAULT_DATABASE_FILE));
    let _metadata = MetadataStore::open(&database_path)?;

    let catalog = assets::locate_assets(engine)?;
    log::info!(
        "assets: {} vehicles, {} buildings",
        catalog.vehicles.len(),
        catalog.buildings.len()
    );

    let pb = progress_bar(config.count);
    let mut seed = config.start_seed;
    while config.count.is_none_or(|n| seed < config.start_seed + n) {
        if token.is_cancelled() {
            log::info!("synthesis cancelled before seed {seed}");
            break;
        }

        let scene = composer::compose(seed, &catalog, engine)?;
        let result = engine.render()?;
        let composite = if config.human_visible {
            Some(engine.render_composite()?)
        } else {
            None
        };
        serializer::save(&result, &seed.to_string(), &config.output_dir, composite.as_ref())?;

        log::debug!(
            "scene {seed}: vehicle '{}', {} buildings",
            scene.vehicle.asset,
            scene.buildings.len()
        );
        pb.inc(1);
        seed += 1;
    }
    pb.finish_with_message("Synthesis complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessEngine;
    use std::collections::BTreeSet;
    use std::fs;

    fn temp_output(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scene-synthesis-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config(output_dir: PathBuf, count: Option<u64>, start_seed: u64) -> SynthesisConfig {
        SynthesisConfig {
            output_dir,
            count,
            start_seed,
            database_path: None,
            human_visible: false,
        }
    }

    fn file_names(dir: &PathBuf) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn one_iteration_writes_exactly_one_triple() {
        let dir = temp_output("driver-single");
        let mut engine = HeadlessEngine::new();
        run(&mut engine, &config(dir.clone(), Some(1), 42), &CancellationToken::new()).unwrap();

        let expected: BTreeSet<String> = [
            "42_rgb.jpg".to_string(),
            "42_inst.png".to_string(),
            "42_depth.png".to_string(),
            "meta_data.db".to_string(),
        ]
        .into();
        assert_eq!(file_names(&dir), expected);
    }

    #[test]
    fn seeds_advance_by_one_per_iteration() {
        let dir = temp_output("driver-range");
        let mut engine = HeadlessEngine::new();
        run(&mut engine, &config(dir.clone(), Some(3), 42), &CancellationToken::new()).unwrap();

        let names = file_names(&dir);
        for id in ["42", "43", "44"] {
            assert!(names.contains(&conventions::rgb_file_name(id)));
            assert!(names.contains(&conventions::instance_file_name(id)));
            assert!(names.contains(&conventions::depth_file_name(id)));
        }
        // Three triples plus the metadata store, nothing else.
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn human_visible_adds_the_composite() {
        let dir = temp_output("driver-vis");
        let mut engine = HeadlessEngine::new();
        let mut cfg = config(dir.clone(), Some(1), 7);
        cfg.human_visible = true;
        run(&mut engine, &cfg, &CancellationToken::new()).unwrap();

        assert!(dir.join("7_vis(inst_rgb_depth).jpg").exists());
    }

    #[test]
    fn cancelled_token_stops_an_unbounded_run_before_any_work() {
        let dir = temp_output("driver-cancel");
        let mut engine = HeadlessEngine::new();
        let token = CancellationToken::new();
        token.cancel();
        run(&mut engine, &config(dir.clone(), None, 0), &token).unwrap();

        // Only the metadata store was prepared.
        let names = file_names(&dir);
        assert_eq!(names.len(), 1);
        assert!(names.contains("meta_data.db"));
    }
}
