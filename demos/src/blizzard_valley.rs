//! Cross a blizzard valley read from stdin.
//!
//! Prints the fastest crossing, then the fastest entry-exit-entry-exit
//! round trip. `--draw` also prints the valley at every tick of the
//! crossing with the walker marked `E`.

use gridwalk_core::input;
use gridwalk_paths::GrowthPolicy;
use gridwalk_worlds::Valley;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let draw = std::env::args().skip(1).any(|a| a == "--draw");

    let text = input::read_stdin()?;
    let valley = Valley::parse(&text)?;
    log::info!(
        "blizzard-valley: {} interior, cycle {}",
        valley.interior(),
        valley.cycle()
    );

    let policy = GrowthPolicy::crossing();
    if draw {
        let path = valley.crossing_path(&policy)?;
        for step in &path.steps {
            let frame = valley.render_at(step.t);
            let width = valley.range().width() as usize + 1;
            let at = step.y as usize * width + step.x as usize;
            let mut frame: Vec<char> = frame.chars().collect();
            frame[at] = 'E';
            println!("Minute {}:", step.t);
            println!("{}", frame.into_iter().collect::<String>());
        }
        println!("{}", path.cost);
    } else {
        println!("{}", valley.crossing(&policy)?);
    }

    let route = valley.round_trip(&GrowthPolicy::round_trip())?;
    log::info!("blizzard-valley: legs {:?}", route.legs);
    println!("{}", route.total);
    Ok(())
}
