use std::path::PathBuf;

use clap::Parser;
use tilepath_core::Point;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Find a path across a tile map", long_about = None)]
pub struct Config {
    /// ASCII map to load ('#' wall, '.' floor). A random map is generated
    /// when omitted.
    #[arg(long)]
    pub map: Option<PathBuf>,

    #[arg(long, default_value_t = 40)]
    pub width: i32,

    #[arg(long, default_value_t = 20)]
    pub height: i32,

    /// Probability that a generated tile is a wall.
    #[arg(long, default_value_t = 0.3, value_parser = parse_probability)]
    pub wall_chance: f64,

    /// Seed for map generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as `x,y`. Defaults to the first floor tile.
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Destination cell as `x,y`. Defaults to the last floor tile.
    #[arg(long, value_parser = parse_point)]
    pub target: Option<Point>,

    /// Print only the path coordinates, without the map.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p = s.trim().parse::<f64>().map_err(|e| format!("bad probability {s:?}: {e}"))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("probability must be between 0 and 1, got {s}"));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1 , 7"), Ok(Point::new(-1, 7)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn wall_chance_must_be_a_probability() {
        assert_eq!(parse_probability("0.25"), Ok(0.25));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("inf").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("1.5").is_err());
        assert!(Config::try_parse_from(["tilepath-demo", "--wall-chance", "NaN"]).is_err());
    }

    #[test]
    fn parses_arguments() {
        let cfg = Config::try_parse_from(["tilepath-demo", "--start", "1,2", "--seed", "9"]).unwrap();
        assert_eq!(cfg.start, Some(Point::new(1, 2)));
        assert_eq!(cfg.target, None);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.width, 40);
    }
}
