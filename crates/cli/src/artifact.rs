use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use melkman::prelude::*;
use serde::Serialize;

/// Flat JSON view of one engine run, consumable by plotting scripts.
#[derive(Serialize)]
struct RunDoc {
    seed: u64,
    chain: Vec<PointDoc>,
    hull: Vec<PointDoc>,
    /// Orientation sign fixed at hull initialization; absent for degenerate
    /// (never-initialized) runs.
    rotation: Option<i8>,
    valid: bool,
}

#[derive(Serialize)]
struct PointDoc {
    index: usize,
    x: f64,
    y: f64,
}

impl From<&Vertex> for PointDoc {
    fn from(v: &Vertex) -> Self {
        Self {
            index: v.index,
            x: v.p.x,
            y: v.p.y,
        }
    }
}

/// Write the run artifact to `out`, creating parent directories as needed.
pub fn write_run(out: &str, engine: &Melkman, seed: u64) -> Result<PathBuf> {
    let doc = RunDoc {
        seed,
        chain: engine.chain().vertices().iter().map(PointDoc::from).collect(),
        hull: engine.hull().iter().map(PointDoc::from).collect(),
        rotation: engine.rotation().map(|r| r.sign()),
        valid: engine.check(),
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating artifact dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(out_path.to_path_buf())
}
