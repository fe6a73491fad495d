use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use roomplan::catalog::StaticCatalog;
use roomplan::config::LayoutConfig;
use roomplan::engine::{EngineCore, EngineError, RoomAxis};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Engine(#[from] EngineError),
}

#[derive(Parser, Debug)]
#[command(name = "roomplan", about = "Room layout engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the stock catalog.
    Catalog,
    /// Seed the default room, add objects, optionally resize, and print the layout.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Catalog type to add; repeat to add several.
    #[arg(long = "add", value_name = "TYPE")]
    add: Vec<String>,

    /// Room width to apply after placing objects.
    #[arg(long, env = "ROOMPLAN_PLAN_WIDTH")]
    width: Option<String>,

    /// Room height to apply after placing objects.
    #[arg(long, env = "ROOMPLAN_PLAN_HEIGHT")]
    height: Option<String>,

    /// Seed for the spawn jitter.
    #[arg(long, env = "ROOMPLAN_SEED", default_value_t = 0)]
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Catalog => {
            print_catalog(&StaticCatalog::stock());
            Ok(())
        }
        Command::Plan(args) => run_plan(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "plan failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_catalog(catalog: &StaticCatalog) {
    for entry in catalog.entries() {
        println!(
            "{:<14} {:<18} {:<28} {}x{}",
            entry.key,
            entry.name,
            format!("{:?}", entry.class),
            entry.default_dimensions.width,
            entry.default_dimensions.height
        );
    }
}

fn run_plan(args: &PlanArgs) -> Result<(), CliError> {
    let config = LayoutConfig::from_env();
    let mut engine = EngineCore::with_seed(Box::new(StaticCatalog::stock()), config, args.seed);
    engine.seed_default_scene();

    for type_ref in &args.add {
        engine.add_object(type_ref)?;
    }
    if let Some(width) = &args.width {
        engine.set_room_dimension_from_input(RoomAxis::Width, width)?;
    }
    if let Some(height) = &args.height {
        engine.set_room_dimension_from_input(RoomAxis::Height, height)?;
    }

    print_layout(&engine);
    Ok(())
}

fn print_layout(engine: &EngineCore) {
    println!("room {}x{} (wall {})", engine.room.width, engine.room.height, engine.room.wall_thickness);
    for id in engine.draw_order() {
        let Some(object) = engine.object(&id) else {
            continue;
        };
        let class = engine
            .catalog
            .class_of(&object.type_ref)
            .map_or_else(|| "inert".to_string(), |c| format!("{c:?}"));
        let flag = if engine.collisions().contains(&id) { "  COLLIDES" } else { "" };
        println!(
            "{:<14} x={:>8.1} y={:>8.1} rot={:>5.1} {:<24} {}{}",
            object.type_ref,
            object.position.x,
            object.position.y,
            object.rotation,
            class,
            object.group_id.map_or_else(String::new, |g| format!("group={g}")),
            flag
        );
    }
}
