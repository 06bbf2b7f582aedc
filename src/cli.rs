use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "plant-care")]
#[command(about = "Una CLI para consultar plantas, usuarios y tareas de cuidado")]
pub struct Cli {
    /// Formato de salida
    #[arg(long, value_enum, env = "PLANT_CARE_FORMAT", default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Recorrido completo: plantas, tareas, recomendaciones y usuarios
    Demo,
    /// Ver todas las plantas registradas
    Plants,
    /// Buscar una planta por nombre exacto
    Find {
        /// Nombre de la planta
        #[arg(short = 'n', long = "name")]
        name: String,
    },
    /// Recomendar plantas según su requerimiento de luz
    Recommend {
        /// Requerimiento de luz (coincidencia exacta)
        #[arg(short = 'l', long = "light")]
        light: String,
    },
    /// Ver (y vaciar) la cola de tareas ordenada por fecha
    Tasks {
        /// Tarea extra con formato DESCRIPCION@AAAA-MM-DD
        #[arg(long = "add", value_parser = parse_task)]
        add: Vec<NewTask>,
    },
    /// Ver usuarios registrados
    Users,
    /// Ver perfiles de usuario
    Profiles {
        /// Asignar una planta a un perfil, con formato PERFIL=PLANTA
        #[arg(long = "assign", value_parser = parse_assignment)]
        assign: Vec<Assignment>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub due: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub profile: String,
    pub plant: String,
}

fn parse_task(raw: &str) -> Result<NewTask, String> {
    match raw.rsplit_once('@') {
        Some((description, due)) if !description.trim().is_empty() => Ok(NewTask {
            description: description.trim().to_string(),
            due: due.trim().to_string(),
        }),
        _ => Err(format!("se esperaba DESCRIPCION@AAAA-MM-DD, se recibió '{}'", raw)),
    }
}

fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    match raw.split_once('=') {
        Some((profile, plant)) if !profile.is_empty() && !plant.is_empty() => Ok(Assignment {
            profile: profile.to_string(),
            plant: plant.to_string(),
        }),
        _ => Err(format!("se esperaba PERFIL=PLANTA, se recibió '{}'", raw)),
    }
}
