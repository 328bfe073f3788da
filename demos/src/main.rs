//! Command-line demo: load or generate a tile map, search it, print the
//! route over the map.
//!
//! Run: cargo run --bin tilepath-demo -- --seed 7
//! Set `RUST_LOG=debug` to see the search log.

mod config;

use std::collections::HashSet;
use std::fs;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::{FLOOR, Point, TileMap, WALL};
use tilepath_paths::{Pathfinder, path_cost};

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = Config::parse();

    let map = match &config.map {
        Some(path) => {
            log::info!("loading map from {}", path.display());
            TileMap::from_ascii(&fs::read_to_string(path)?)?
        }
        None => {
            let seed = config.seed.unwrap_or_else(rand::random);
            log::info!(
                "generating {}x{} map, wall chance {}, seed {seed}",
                config.width,
                config.height,
                config.wall_chance
            );
            random_map(&config, seed)
        }
    };

    let mut floors = map.iter().filter(|&(_, passable)| passable).map(|(p, _)| p);
    let first = floors.next();
    let last = floors.last().or(first);
    let (Some(start), Some(target)) = (config.start.or(first), config.target.or(last)) else {
        return Err("map has no floor tiles".into());
    };

    let pathfinder = Pathfinder::new(&map);
    if !pathfinder.is_eligible_destination(target) {
        return Err(format!("can't make a path to a wall at {target}").into());
    }

    let path = pathfinder.find_path(start, target)?;
    if !config.quiet {
        println!("{}", render(&map, start, &path));
        println!();
    }
    println!(
        "{start} -> {target}: {} steps, cost {}",
        path.len(),
        path_cost(start, &path)
    );
    if config.quiet {
        let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("{}", steps.join(" "));
    }
    Ok(())
}

/// Scatter walls uniformly at random.
fn random_map(config: &Config, seed: u64) -> TileMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = TileMap::new(config.width, config.height);
    for p in map.bounds() {
        if rng.random_bool(config.wall_chance) {
            map.set_passable(p, false);
        }
    }
    map
}

/// The map as ASCII with the route drawn over it.
fn render(map: &TileMap, start: Point, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let target = path.last().copied().unwrap_or(start);
    let mut out = String::new();
    for y in map.bounds().min.y..map.bounds().max.y {
        if !out.is_empty() {
            out.push('\n');
        }
        for x in map.bounds().min.x..map.bounds().max.x {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == target {
                'T'
            } else if on_path.contains(&p) {
                '*'
            } else if map.passable(p) == Some(true) {
                FLOOR
            } else {
                WALL
            };
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_route() {
        let map = TileMap::from_ascii("....\n.##.\n....").unwrap();
        let start = Point::new(0, 1);
        let path = Pathfinder::new(&map).find_path(start, Point::new(3, 1)).unwrap();
        let out = render(&map, start, &path);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.lines().nth(1), Some("S##T"));
        assert_eq!(out.matches('*').count(), 2);
    }

    #[test]
    fn random_map_is_seeded() {
        let cfg = Config::try_parse_from(["tilepath-demo", "--width", "10", "--height", "6"]).unwrap();
        let a = random_map(&cfg, 42);
        let b = random_map(&cfg, 42);
        assert_eq!(a, b);
        assert_eq!(a.bounds().len(), 60);
    }
}
