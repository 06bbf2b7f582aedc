use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plant_care::seed::{self, SAMPLE_LIGHT};
use plant_care::{PlantCareRegistry, Task};

mod cli;
use cli::{Cli, Commands, Format};

fn main() -> Result<()> {
    // Logs a stderr, stdout queda para los listados
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut registry = seed::sample_registry().context("Error al cargar los datos de ejemplo")?;
    tracing::info!(
        plants = registry.plant_count(),
        users = registry.users().len(),
        tasks = registry.pending_tasks(),
        "registro cargado"
    );

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo(&mut registry, cli.format)?,
        Commands::Plants => {
            if cli.format == Format::Json {
                print_json(registry.plants())?;
            } else {
                for plant in registry.plants() {
                    println!("{}", plant);
                }
            }
        }
        Commands::Find { name } => {
            let plant = registry.find_plant_by_name(&name);
            match (cli.format, plant) {
                (Format::Json, plant) => print_json(&plant)?,
                (Format::Text, Some(plant)) => println!("{}", plant),
                (Format::Text, None) => println!("No se encontró planta con nombre '{}'", name),
            }
        }
        Commands::Recommend { light } => {
            let picks = registry.recommend_plants(&light);
            if cli.format == Format::Json {
                print_json(&picks)?;
            } else if picks.is_empty() {
                println!("No se encontraron plantas para '{}'", light);
            } else {
                for plant in picks {
                    println!("{}", plant);
                }
            }
        }
        Commands::Tasks { add } => {
            for task in add {
                if let Err(e) = registry.schedule_task(task.description, &task.due) {
                    eprintln!("Error al agregar tarea: {}", e);
                    return Err(e.into());
                }
            }
            let tasks: Vec<Task> = registry.drain_tasks().collect();
            if cli.format == Format::Json {
                print_json(&tasks)?;
            } else {
                for task in tasks {
                    println!("{}", task);
                }
            }
        }
        Commands::Users => {
            if cli.format == Format::Json {
                print_json(registry.users())?;
            } else {
                for user in registry.users() {
                    println!("{}", user);
                }
            }
        }
        Commands::Profiles { assign } => {
            for assignment in assign {
                if let Err(e) = registry.add_plant_to_profile(&assignment.profile, &assignment.plant) {
                    eprintln!("Error al asignar planta: {}", e);
                    return Err(e.into());
                }
            }
            if cli.format == Format::Json {
                print_json(registry.profiles())?;
            } else {
                for profile in registry.profiles() {
                    println!("{}", profile);
                    for plant in profile.plants() {
                        println!("  {}", plant);
                    }
                }
            }
        }
    }

    Ok(())
}

fn demo(registry: &mut PlantCareRegistry, format: Format) -> Result<()> {
    if format == Format::Json {
        let tasks: Vec<Task> = registry.drain_tasks().collect();
        return print_json(&serde_json::json!({
            "plants": registry.plants(),
            "tasks": tasks,
            "recommended": {
                "light": SAMPLE_LIGHT,
                "plants": registry.recommend_plants(SAMPLE_LIGHT),
            },
            "users": registry.users(),
        }));
    }

    println!("Registered Plants:");
    for plant in registry.plants() {
        println!("{}", plant);
    }

    println!("\nScheduled Tasks:");
    for task in registry.drain_tasks() {
        println!("{}", task);
    }

    println!("\nRecommended plants for '{}':", SAMPLE_LIGHT);
    for plant in registry.recommend_plants(SAMPLE_LIGHT) {
        println!("{}", plant);
    }

    println!("\nRegistered Users:");
    for user in registry.users() {
        println!("{}", user);
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Error al serializar la salida JSON")?;
    println!("{}", out);
    Ok(())
}
