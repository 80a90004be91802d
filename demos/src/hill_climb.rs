//! Climb a height map read from stdin.
//!
//! Prints the fewest steps from `S` to `E`, then the fewest steps from any
//! lowest cell. `--draw` also prints the first climb traced over the map.

use gridwalk_core::input;
use gridwalk_worlds::HeightMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let draw = std::env::args().skip(1).any(|a| a == "--draw");

    let text = input::read_stdin()?;
    let map = HeightMap::parse(&text)?;
    log::info!("hill-climb: {} map", map.range());

    match map.climb_path() {
        Some(path) => {
            println!("{}", path.cost);
            if draw {
                print!("{}", map.render(&path.steps));
            }
        }
        None => println!("unreachable"),
    }
    match map.best_trailhead() {
        Some((p, cost)) => {
            log::info!("hill-climb: best trailhead {p}");
            println!("{cost}");
        }
        None => println!("unreachable"),
    }
    Ok(())
}
