//! citywide — end-to-end demonstration of the dispatch workspace.
//!
//! Runs a phased scenario over a UK city network: initial incident
//! response, strategy comparison, adaptive-weight training with write-back
//! into live congestion factors, dynamic network changes, predictive
//! hotspot analysis with repositioning advice, and a seeded high-load
//! burst.  Every timestamp derives from a fixed base epoch and the load
//! generator is seeded, so repeat runs are identical.

mod network;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use erd_core::{IncidentId, IncidentKind, LocationId, Timestamp, UnitId, UnitKind};
use erd_dispatch::{Dispatcher, Incident, ResponseUnit, Strategy};
use erd_learn::AdaptiveWeightLearner;
use erd_metrics::MetricsRecorder;
use erd_network::{AStarPathfinder, DijkstraPathfinder, Pathfinder};
use erd_predict::PredictiveAnalyzer;

use network::*;

// ── Constants ─────────────────────────────────────────────────────────────────

/// 2024-01-01 00:00 UTC — a Monday.
const BASE: Timestamp = Timestamp(1_704_067_200);
const SEED: u64 = 42;
const LEARNING_RATE: f64 = 0.3;
const WINDOW_SIZE: usize = 50;
const OUTPUT_DIR: &str = "out";

fn main() -> Result<()> {
    println!("=== citywide — emergency response dispatch demo ===\n");

    // ── Phase 1: system setup ─────────────────────────────────────────────
    let mut dispatch = Dispatcher::new(
        build_network(),
        PredictiveAnalyzer::new(),
        MetricsRecorder::new(),
    );
    register_fleet(&mut dispatch);
    let mut learner = AdaptiveWeightLearner::new(LEARNING_RATE, WINDOW_SIZE)?;
    println!("{dispatch}\n");

    // ── Phase 2: initial incident response ────────────────────────────────
    println!("--- phase 2: initial incidents ---");
    let mut next_id = 1u32;
    let mut clock = BASE.plus_hours(8); // Monday 08:00

    for (site, kind, severity) in [
        (STADIUM, IncidentKind::Medical, 4),
        (INDUSTRIAL_ESTATE, IncidentKind::Fire, 5),
        (LONDON, IncidentKind::Police, 2),
        (LEEDS, IncidentKind::Rescue, 5),
        (INDUSTRIAL_ESTATE, IncidentKind::Hazmat, 3),
    ] {
        report(&mut dispatch, &mut next_id, site, kind, severity, &mut clock);
    }
    println!("{dispatch}");

    // Free the fleet for the next phases.
    resolve_all_assigned(&mut dispatch);
    println!("after resolution: {dispatch}\n");

    // ── Phase 3: strategy comparison ──────────────────────────────────────
    println!("--- phase 3: strategy comparison (London -> Manchester) ---");
    let started = Instant::now();
    let via_dijkstra = DijkstraPathfinder.shortest_path(&dispatch.network, LONDON, MANCHESTER);
    let dijkstra_elapsed = started.elapsed();
    let started = Instant::now();
    let via_astar = AStarPathfinder.shortest_path(&dispatch.network, LONDON, MANCHESTER);
    let astar_elapsed = started.elapsed();

    if let (Some(d), Some(a)) = (via_dijkstra, via_astar) {
        println!("dijkstra: {d}  ({dijkstra_elapsed:?})");
        println!("astar:    {a}  ({astar_elapsed:?})");
    }
    dispatch.set_strategy(Strategy::Dijkstra);
    println!("active dispatch strategy: {}\n", dispatch.strategy());

    // ── Phase 4: adaptive learning ────────────────────────────────────────
    println!("--- phase 4: training the adaptive weight learner ---");
    train_learner(&mut learner);
    let morning = BASE.plus_hours(8);
    println!(
        "morning congestion estimate London -> Birmingham: {:.3}",
        learner.congestion_factor(LONDON, BIRMINGHAM, morning)
    );
    println!(
        "night congestion estimate London -> Birmingham:   {:.3}",
        learner.congestion_factor(LONDON, BIRMINGHAM, BASE.plus_hours(22))
    );

    // ── Phase 5: write learned factors back into the live network ─────────
    println!("\n--- phase 5: applying learned congestion ---");
    for (from, to) in [(LONDON, BIRMINGHAM), (BIRMINGHAM, MANCHESTER)] {
        let factor = learner.congestion_factor(from, to, morning);
        dispatch.network.update_congestion(from, to, factor);
        if let Some(weight) = learner.predicted_weight(from, to) {
            println!("{from} -> {to}: learned {weight:.1} min, live factor {factor:.3}");
        }
    }

    // ── Phase 6: dynamic network changes ──────────────────────────────────
    println!("\n--- phase 6: dynamic changes ---");
    println!("accident on Birmingham -> Manchester: congestion 2.2x");
    dispatch.network.update_congestion(BIRMINGHAM, MANCHESTER, 2.2);
    if let Some(rerouted) = DijkstraPathfinder.shortest_path(&dispatch.network, LONDON, MANCHESTER) {
        println!("London -> Manchester now: {rerouted}");
    }
    dispatch.network.update_congestion(BIRMINGHAM, MANCHESTER, 1.0);

    // ── Phase 7: operations under adaptive routing ────────────────────────
    println!("\n--- phase 7: operations with adaptive weights ---");
    dispatch.set_strategy(Strategy::AStar); // takes effect on the next dispatch
    clock = clock.plus_hours(2);
    for (site, kind, severity) in [
        (MOTORWAY_JUNCTION, IncidentKind::Police, 3),
        (STADIUM, IncidentKind::Medical, 5),
        (INDUSTRIAL_ESTATE, IncidentKind::Fire, 4),
    ] {
        report(&mut dispatch, &mut next_id, site, kind, severity, &mut clock);
    }
    resolve_all_assigned(&mut dispatch);

    // ── Phase 8: predictive analysis & repositioning ──────────────────────
    println!("\n--- phase 8: predictive analysis ---");
    print!("{}", dispatch.analyzer);
    for advice in dispatch.reposition_recommendations(3) {
        match advice.nearest_center {
            Some(center) => println!("hotspot {} -> stage units at {center}", advice.hotspot),
            None => println!("hotspot {} -> no reachable dispatch center", advice.hotspot),
        }
    }
    let p = dispatch
        .analyzer
        .predict_incident_probability(INDUSTRIAL_ESTATE, 4, clock);
    println!("incident probability at the industrial estate in 4 h: {:.1}%", p * 100.0);
    for (location, units) in dispatch.analyzer.suggest_resource_allocation(6) {
        println!("allocate {units} unit(s) near {location}");
    }

    // ── Phase 9: seeded high-load burst ───────────────────────────────────
    println!("\n--- phase 9: high-load burst ---");
    let mut rng = SmallRng::seed_from_u64(SEED);
    high_load_burst(&mut dispatch, &mut rng, &mut next_id, &mut clock);
    println!("{dispatch}");

    // ── Phase 10: final reports & export ──────────────────────────────────
    println!("\n--- phase 10: reports ---");
    print!("{learner}");
    print!("{}", dispatch.observer);

    fs::create_dir_all(OUTPUT_DIR)?;
    let csv_path = Path::new(OUTPUT_DIR).join("dispatch_log.csv");
    dispatch.observer.export_csv_path(&csv_path)?;
    println!("dispatch log exported to {}", csv_path.display());

    Ok(())
}

// ── Fleet & incident helpers ──────────────────────────────────────────────────

fn register_fleet(dispatch: &mut Dispatcher<MetricsRecorder>) {
    let fleet = [
        (1, "AMB-ALPHA", UnitKind::Ambulance, DC_LONDON),
        (2, "AMB-BRAVO", UnitKind::Ambulance, DC_MANCHESTER),
        (3, "FIRE-ONE", UnitKind::FireTruck, DC_BIRMINGHAM),
        (4, "FIRE-TWO", UnitKind::FireTruck, DC_LONDON),
        (5, "POL-ONE", UnitKind::PoliceCar, DC_LONDON),
        (6, "POL-TWO", UnitKind::PoliceCar, DC_MANCHESTER),
        (7, "HAZ-ONE", UnitKind::HazmatTeam, DC_BIRMINGHAM),
        (8, "HELI-ONE", UnitKind::RescueHelicopter, DC_MANCHESTER),
    ];
    for (id, call_sign, kind, base) in fleet {
        dispatch.register_unit(ResponseUnit::new(UnitId(id), call_sign, kind, base));
    }
}

fn report(
    dispatch: &mut Dispatcher<MetricsRecorder>,
    next_id: &mut u32,
    location: LocationId,
    kind: IncidentKind,
    severity: i32,
    clock: &mut Timestamp,
) {
    let incident = Incident::new(IncidentId(*next_id), location, kind, severity, *clock);
    println!("reported {incident}");
    dispatch.report_incident(incident);
    *next_id += 1;
    *clock = clock.plus_minutes(7);
}

/// Resolve every currently assigned incident, oldest id first.
fn resolve_all_assigned(dispatch: &mut Dispatcher<MetricsRecorder>) {
    let mut assigned: Vec<IncidentId> = dispatch
        .units()
        .filter_map(|u| u.current_incident)
        .collect();
    assigned.sort_unstable();
    for id in assigned {
        dispatch.resolve_incident(id);
    }
}

// ── Learner training ──────────────────────────────────────────────────────────

/// Feed a week of commute patterns: slow mornings, nominal afternoons, fast
/// nights on the two main corridors.
fn train_learner(learner: &mut AdaptiveWeightLearner) {
    for day in 0..7 {
        let base = BASE.plus_hours(day * 24);
        for run in 0..3 {
            let jitter = run as i64 * 10;
            let morning = base.plus_hours(8).plus_minutes(jitter);
            learner.record_travel_time(LONDON, BIRMINGHAM, 145.0, morning);
            learner.record_travel_time(BIRMINGHAM, MANCHESTER, 105.0, morning);

            let afternoon = base.plus_hours(14).plus_minutes(jitter);
            learner.record_travel_time(LONDON, BIRMINGHAM, 120.0, afternoon);
            learner.record_travel_time(BIRMINGHAM, MANCHESTER, 90.0, afternoon);

            let night = base.plus_hours(22).plus_minutes(jitter);
            learner.record_travel_time(LONDON, BIRMINGHAM, 100.0, night);
            learner.record_travel_time(BIRMINGHAM, MANCHESTER, 75.0, night);
        }
    }
}

// ── High load ─────────────────────────────────────────────────────────────────

const BURST_SITES: [LocationId; 6] =
    [LONDON, MANCHESTER, BIRMINGHAM, INDUSTRIAL_ESTATE, STADIUM, MOTORWAY_JUNCTION];
const BURST_KINDS: [IncidentKind; 5] = [
    IncidentKind::Fire,
    IncidentKind::Medical,
    IncidentKind::Police,
    IncidentKind::Hazmat,
    IncidentKind::Rescue,
];

/// Twenty randomized incidents in quick succession; every third round
/// resolves the backlog to free units.
fn high_load_burst(
    dispatch: &mut Dispatcher<MetricsRecorder>,
    rng: &mut SmallRng,
    next_id: &mut u32,
    clock: &mut Timestamp,
) {
    for round in 0..20u32 {
        let site = BURST_SITES[rng.gen_range(0..BURST_SITES.len())];
        let kind = BURST_KINDS[rng.gen_range(0..BURST_KINDS.len())];
        let severity = rng.gen_range(1..=5);

        dispatch.report_incident(Incident::new(IncidentId(*next_id), site, kind, severity, *clock));
        *next_id += 1;

        *clock = clock.plus_minutes(11);
        if round % 3 == 2 {
            resolve_all_assigned(dispatch);
        }
    }
    resolve_all_assigned(dispatch);
}
