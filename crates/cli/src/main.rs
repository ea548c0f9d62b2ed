use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planarity::generate::{self, RandomGraphCfg, ReplayToken};
use planarity::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "planarity")]
#[command(about = "Planarity testing and rotation-system embedding")]
struct Cmd {
    /// Log every cycle, segment split and repair (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the planarity verdict for each graph file
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Re-check every intermediate rotation system
        #[arg(long)]
        verify: bool,
    },
    /// Embed a planar graph and write its rotation system as JSON
    Embed {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        verify: bool,
    },
    /// Write a generated graph in edge-list format
    Generate {
        #[arg(long, value_enum)]
        family: Family,
        #[arg(long)]
        nodes: usize,
        /// Second size: grid columns, right side of `bipartite`
        #[arg(long)]
        second: Option<usize>,
        /// Edge count for `gnm`
        #[arg(long)]
        edges: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    Complete,
    Bipartite,
    Cycle,
    Wheel,
    Grid,
    Petersen,
    Stacked,
    Gnm,
}

/// On-disk rotation system.
#[derive(Serialize)]
struct RotationFile {
    nodes: usize,
    edges: usize,
    faces: usize,
    rotation: Vec<Vec<usize>>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Check { files, verify } => check(&files, verify, cmd.verbose),
        Action::Embed { input, out, verify } => embed_to_file(&input, &out, verify, cmd.verbose),
        Action::Generate {
            family,
            nodes,
            second,
            edges,
            seed,
            index,
            out,
        } => {
            let tok = ReplayToken { seed, index };
            let graph = generated(family, nodes, second, edges, tok)?;
            write_graph(&graph, &out)?;
            tracing::info!(family = ?family, nodes = graph.size(), edges = graph.edge_count(), out = %out.display(), "generate");
            Ok(())
        }
        Action::Report => report(),
    }
}

/// Run the embedder with or without the tracing observer.
fn run_embedder(graph: &Graph, verify: bool, verbose: bool) -> Result<Embedding, EmbedError> {
    let cfg = EmbedCfg {
        verify_rotations: verify,
    };
    if verbose {
        Embedder::with_observer(cfg, TracingObserver).embed(graph)
    } else {
        Embedder::with_observer(cfg, NoopObserver).embed(graph)
    }
}

fn check(files: &[PathBuf], verify: bool, verbose: bool) -> Result<()> {
    for file in files {
        let graph = load_graph(file).with_context(|| format!("loading {}", file.display()))?;
        let planar = run_embedder(&graph, verify, verbose).is_ok();
        tracing::info!(
            file = %file.display(),
            nodes = graph.size(),
            edges = graph.edge_count(),
            planar,
            "check"
        );
        println!("{}: planar: {planar}", file.display());
    }
    Ok(())
}

fn rotation_file(embedding: Embedding) -> Result<RotationFile> {
    let faces = embedding
        .faces()
        .context("embedder produced an inconsistent rotation system")?
        .len();
    Ok(RotationFile {
        nodes: embedding.size(),
        edges: embedding.edge_count(),
        faces,
        rotation: embedding.into_rotations(),
    })
}

fn embed_to_file(input: &Path, out: &Path, verify: bool, verbose: bool) -> Result<()> {
    let graph = load_graph(input).with_context(|| format!("loading {}", input.display()))?;
    let embedding = match run_embedder(&graph, verify, verbose) {
        Ok(e) => e,
        Err(err) => bail!("{}: {err}", input.display()),
    };
    let doc = rotation_file(embedding)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let run = provenance::EmbedRun {
        input: input.to_string_lossy().into_owned(),
        nodes: doc.nodes,
        edges: doc.edges,
        planar: true,
        faces: doc.faces,
        verify_rotations: verify,
    };
    let prov = provenance::write_sidecar(out, &run)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), faces = doc.faces, "embed");
    Ok(())
}

fn generated(
    family: Family,
    nodes: usize,
    second: Option<usize>,
    edges: Option<usize>,
    tok: ReplayToken,
) -> Result<Graph> {
    let min_nodes = match family {
        Family::Cycle | Family::Wheel => 3,
        _ => 0,
    };
    if nodes < min_nodes {
        bail!("{family:?} needs --nodes >= {min_nodes}");
    }
    let cfg = RandomGraphCfg {
        nodes,
        edges: edges.unwrap_or(RandomGraphCfg::default().edges),
    };
    Ok(match family {
        Family::Complete => generate::complete(nodes),
        Family::Bipartite => generate::complete_bipartite(nodes, second.unwrap_or(nodes)),
        Family::Cycle => generate::cycle(nodes),
        Family::Wheel => generate::wheel(nodes),
        Family::Grid => generate::grid(nodes, second.unwrap_or(nodes)),
        Family::Petersen => generate::petersen(),
        Family::Stacked => generate::random_stacked_triangulation(cfg, tok),
        Family::Gnm => generate::random_gnm(cfg, tok),
    })
}

fn write_graph(graph: &Graph, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, generate::to_edge_list_text(graph))
        .with_context(|| format!("writing {}", out.display()))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": planarity::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
