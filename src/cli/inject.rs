//! `inject` command: splice rendered markup into HTML documents.
//!
//! The page is rendered once with host-managed placement, then every
//! document is processed in parallel.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::args::InjectArgs;
use super::common::read_data;
use crate::config::SeomaticConfig;
use crate::document::{RenderedPage, inject_rendered};
use crate::logger::ProgressLine;
use crate::seo::Renderer;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute inject command
pub fn run_inject(args: &InjectArgs, config: &SeomaticConfig) -> Result<()> {
    let data = read_data(Some(&args.data))?;
    let page = Renderer::native()
        .with_body_script_style(config.render.body_script_style.as_str())
        .page(&data)
        .context("failed to render SEOmatic data")?;
    if page.is_empty() {
        log!("inject"; "no SEOmatic output, documents are written unchanged");
    }
    let rendered = RenderedPage::render(&page, config.render_options());

    let out_dir = args.out_dir.clone().or_else(|| config.out_dir());
    let targets = plan_targets(&args.documents, out_dir.as_deref())?;

    log!("inject"; "injecting into {}", plural_count(args.documents.len(), "document"));
    let total = args.documents.len();
    let progress = ProgressLine::new("inject", &[("done", total), ("failed", total)]);

    let failures: Vec<(PathBuf, anyhow::Error)> = args
        .documents
        .par_iter()
        .zip(targets.par_iter())
        .filter_map(|(doc, target)| match inject_file(doc, target, &rendered) {
            Ok(()) => {
                progress.inc("done");
                debug!("inject"; "wrote {}", target.display());
                None
            }
            Err(err) => {
                progress.inc("failed");
                Some((doc.clone(), err))
            }
        })
        .collect();
    progress.finish();

    for (path, err) in &failures {
        log!("error"; "{}: {:#}", path.display(), err);
    }
    if !failures.is_empty() {
        bail!("{} of {} failed", failures.len(), plural_count(total, "document"));
    }
    Ok(())
}

/// Inject into one document and write the result to `target`.
fn inject_file(doc: &Path, target: &Path, page: &RenderedPage) -> Result<()> {
    let html =
        fs::read_to_string(doc).with_context(|| format!("failed to read `{}`", doc.display()))?;
    let injected = inject_rendered(&html, page)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, injected)
        .with_context(|| format!("failed to write `{}`", target.display()))?;
    Ok(())
}

/// Output path of every document, in input order.
///
/// Without an output directory documents are rewritten in place. With one,
/// each document keeps its path relative to the deepest directory shared by
/// all inputs. Two documents mapping to the same output is an error.
fn plan_targets(documents: &[PathBuf], out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let targets = match out_dir {
        None => documents.to_vec(),
        Some(dir) => {
            let cwd =
                std::env::current_dir().context("Failed to get current working directory")?;
            let absolute: Vec<PathBuf> = documents
                .iter()
                .map(|doc| normalize_path(&cwd.join(doc)))
                .collect();
            let base = common_parent(&absolute);

            absolute
                .iter()
                .map(|path| {
                    path.strip_prefix(&base)
                        .map(|rel| dir.join(rel))
                        .with_context(|| {
                            format!("`{}` is outside `{}`", path.display(), base.display())
                        })
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    let mut seen = HashSet::with_capacity(targets.len());
    for (doc, target) in documents.iter().zip(&targets) {
        if !seen.insert(target) {
            bail!(
                "`{}` maps to `{}`, which another document already writes",
                doc.display(),
                target.display()
            );
        }
    }
    Ok(targets)
}

/// Resolve `.` and `..` lexically.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Deepest directory containing every path.
fn common_parent(paths: &[PathBuf]) -> PathBuf {
    let mut iter = paths.iter();
    let Some(first) = iter.next() else {
        return PathBuf::new();
    };

    let mut base = first.parent().map(Path::to_path_buf).unwrap_or_default();
    for path in iter {
        while !path.starts_with(&base) {
            if !base.pop() {
                break;
            }
        }
    }
    base
}
