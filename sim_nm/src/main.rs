use anyhow::Context;
use clap::Parser;
use core_nm::flood_fill::SolverKind;
use core_nm::grid::standard_maze::StandardMaze;
use core_nm::settings::MazeSettings;
use core_nm::Location;
use log::info;
use sim_nm::Simulation;
use std::path::PathBuf;

/// Drives a simulated NanoMouse through one of the standard mazes
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with settings; flags below override it
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Maze layout: nanomouse, blank, or serpentine
    #[arg(long)]
    maze: Option<StandardMaze>,
    #[arg(long, requires = "target_column")]
    target_row: Option<usize>,
    #[arg(long, requires = "target_row")]
    target_column: Option<usize>,
    /// relaxation or queue
    #[arg(long)]
    solver: Option<SolverKind>,
    /// Let the mouse know every wall from the start
    #[arg(long)]
    preload: bool,
    /// Only print warnings and the final maze
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        })
        .init();

    info!("NanoMouse simulation starting up");

    let settings = settings_from_args(&args)?;
    info!(
        "Running {:?} from {:?} to {:?}",
        settings.standard_maze, settings.start, settings.target
    );

    let mut simulation = Simulation::new(&settings)?;
    let result = simulation.run();

    println!("What the mouse knows:\n{}", simulation.known_view());
    println!("The maze:\n{}", simulation.world_view());

    let summary = result?;
    println!(
        "{} after {} steps, {} turns and {} bumps",
        if summary.arrived {
            "Arrived"
        } else {
            "Gave up"
        },
        summary.steps,
        summary.turns,
        summary.bumps
    );
    Ok(())
}

fn settings_from_args(args: &Args) -> anyhow::Result<MazeSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Couldn't read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Couldn't parse {}", path.display()))?
        }
        None => MazeSettings::default(),
    };

    if let Some(maze) = args.maze {
        settings = MazeSettings {
            preload_walls: settings.preload_walls,
            solver: settings.solver,
            max_steps: settings.max_steps,
            ..MazeSettings::for_maze(maze)
        };
    }
    if let (Some(row), Some(column)) = (args.target_row, args.target_column) {
        settings.target = Location::new(row, column);
    }
    if let Some(solver) = args.solver {
        settings.solver = solver;
    }
    settings.preload_walls |= args.preload;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "sim_nm",
            "--maze",
            "serpentine",
            "--target-row",
            "2",
            "--target-column",
            "5",
            "--solver",
            "queue",
        ]);
        let settings = settings_from_args(&args).unwrap();
        assert_eq!(settings.standard_maze, StandardMaze::Serpentine);
        assert_eq!(settings.start, StandardMaze::Serpentine.default_start());
        assert_eq!(settings.target, Location::new(2, 5));
        assert_eq!(settings.solver, SolverKind::Queue);
        assert!(!settings.preload_walls);
    }

    #[test]
    fn target_needs_both_coordinates() {
        assert!(Args::try_parse_from(["sim_nm", "--target-row", "2"]).is_err());
        assert!(Args::try_parse_from(["sim_nm", "--maze", "labyrinth"]).is_err());
    }
}
