//! village: a small colony on the homestead settler core.
//!
//! Builds a hamlet of houses, fields, and food stores, settles a dozen
//! colonists of mixed professions, runs an hour of colony time, and writes
//! CSV snapshots to `output/village`.
//!
//! ```text
//! cargo run --release -p village [-- path/to/settings.toml]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `village=info,hs_sim=info`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hs_agent::ProfessionKind;
use hs_core::Position;
use hs_output::{CsvWriter, SimOutputObserver};
use hs_sim::{ProductionTally, Settings, Sim, SimBuilder};
use hs_spatial::LinearPlanner;
use hs_world::BuildingKind;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SETTINGS: &str = include_str!("../village.toml");
const OUTPUT_DIR:       &str = "output/village";

const BUILDINGS: &[(BuildingKind, f32, f32)] = &[
    (BuildingKind::House,       -6.0,  4.0),
    (BuildingKind::House,       -2.0,  6.0),
    (BuildingKind::House,        2.0,  6.0),
    (BuildingKind::Farm,       -18.0, -4.0),
    (BuildingKind::Farm,       -14.0,-12.0),
    (BuildingKind::LumberMill,  20.0, 10.0),
    (BuildingKind::Mine,        26.0,-18.0),
    (BuildingKind::Bakery,       4.0, -2.0),
    (BuildingKind::Granary,     -4.0, -6.0),
];

const SETTLERS: &[(&str, ProfessionKind)] = &[
    ("Alma",   ProfessionKind::Farmer),
    ("Bram",   ProfessionKind::Farmer),
    ("Cora",   ProfessionKind::Farmer),
    ("Dov",    ProfessionKind::Lumberjack),
    ("Edda",   ProfessionKind::Lumberjack),
    ("Finn",   ProfessionKind::Miner),
    ("Greta",  ProfessionKind::Miner),
    ("Hale",   ProfessionKind::Baker),
    ("Ines",   ProfessionKind::Baker),
    ("Jory",   ProfessionKind::Blacksmith),
    ("Kesh",   ProfessionKind::None),
    ("Liv",    ProfessionKind::None),
];

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    match path {
        Some(p) => Settings::load(&p).with_context(|| format!("loading {}", p.display())),
        None => Settings::from_toml_str(DEFAULT_SETTINGS).context("parsing built-in settings"),
    }
}

fn populate(sim: &mut Sim<ProductionTally, LinearPlanner>) {
    for &(kind, x, z) in BUILDINGS {
        sim.add_building(kind, Position::new(x, z));
    }
    // Settlers start around the village square.
    for (i, &(name, kind)) in SETTLERS.iter().enumerate() {
        let angle = i as f32 / SETTLERS.len() as f32 * std::f32::consts::TAU;
        let id = sim.spawn_agent(name, kind, Position::ORIGIN.offset_polar(angle, 3.0));
        if sim.agents.get(id).is_some_and(|a| a.home.is_none()) {
            warn!(settler = name, "no free house; sleeping rough");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("village=info,hs_sim=info")),
        )
        .init();

    let settings = load_settings(std::env::args_os().nth(1).map(PathBuf::from))?;
    let config = settings.sim.clone();

    let mut sim = SimBuilder::from_settings(settings, ProductionTally::new(), LinearPlanner)
        .build()
        .context("building simulation")?;
    populate(&mut sim);
    info!(
        settlers = sim.agents.len(),
        buildings = sim.registry.len(),
        "village founded"
    );

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR)).context("opening CSV output")?;
    let mut observer = SimOutputObserver::new(writer, &config);

    let started = Instant::now();
    sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        warn!(error = %e, "output incomplete");
    }
    let wall = started.elapsed();

    // ── Report ────────────────────────────────────────────────────────────
    println!();
    println!("=== village: {} ({} ticks in {:.2?}) ===", sim.clock, sim.clock.current_tick.0, wall);
    println!();
    println!("{:<10} {:>5}", "state", "count");
    for (state, count) in sim.state_counts() {
        if count > 0 {
            println!("{:<10} {:>5}", state.as_str(), count);
        }
    }
    println!();
    println!("{:<12} {:>8}", "workplace", "output");
    for (kind, amount) in sim.work.totals() {
        println!("{:<12} {:>8.1}", kind.as_str(), amount);
    }
    println!("work cycles: {}", sim.work.cycles());
    println!();
    for agent in sim.agents.iter() {
        println!(
            "{:<6} {:<11} {:<9} xp {:>3}  {}",
            agent.name,
            agent.profession.kind.as_str(),
            sim.state_name(agent.id).unwrap_or("-"),
            agent.experience,
            agent.position,
        );
    }
    println!();
    println!("snapshots written to {OUTPUT_DIR}/");
    Ok(())
}
