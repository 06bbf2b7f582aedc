use crate::error::RegistryResult;
use crate::models::{Plant, User};
use crate::registry::PlantCareRegistry;

pub const SAMPLE_PROFILE: &str = "PlantLover";

/// The light requirement the demo asks recommendations for.
pub const SAMPLE_LIGHT: &str = "Bright, indirect light";

pub fn sample_plants() -> Vec<Plant> {
    vec![
        Plant::new("Snowdonia Buttercup")
            .with_family("Ranunculaceae")
            .with_native_habitat("Alpine meadows in Snowdonia, Wales")
            .with_light("Full sun to partial shade")
            .with_soil_type("Regular watering; keep soil moist but not soggy")
            .with_humidity("Moderate")
            .with_temperature("Warm")
            .with_watering_needs("Water regularly")
            .with_fertilization_schedule("Light fertilization during growing season")
            .with_pruning_requirements("Remove dead flowers")
            .with_pest_info("Susceptible to root rot; monitor for aphids"),
        Plant::new("Attenborough's Pitcher Plant")
            .with_family("Nepenthaceae")
            .with_native_habitat("Forests of the Philippines")
            .with_light("Bright, indirect light")
            .with_soil_type("Peat-based, well-draining soil")
            .with_humidity("High (60-80%)")
            .with_temperature("Warm, ideally 20-30 degrees Celsius (68-86 degrees Fahrenheit)")
            .with_watering_needs("Use distilled or rainwater; keep soil moist")
            .with_fertilization_schedule("Light feeding with orchid fertilizer during growing season")
            .with_pruning_requirements("Remove dead leaves and pitchers")
            .with_pest_info("Watch for fungal infections; mealybugs"),
        Plant::new("Rafflesia arnoldii")
            .with_family("Rafflesiaceae")
            .with_native_habitat("Rainforests of Sumatra and Borneo")
            .with_light("Low light; thrives in shaded areas")
            .with_soil_type("No soil; parasitic on Tetrastigma vines")
            .with_humidity("High (80-100%)")
            .with_temperature("Warm, ideally 25-30 degrees Celsius (77-86 degrees Fahrenheit)")
            .with_watering_needs("Requires high moisture; often dependent on host plant")
            .with_fertilization_schedule("No fertilization; obtains nutrients from host")
            .with_pruning_requirements("Minimal; relies on host plant's health")
            .with_pest_info("Rarely affected; vulnerable to habitat destruction"),
        Plant::new("Welwitschia mirabilis")
            .with_family("Welwitschiaceae")
            .with_native_habitat("Namib Desert, Namibia and Angola")
            .with_light("Full sun")
            .with_soil_type("Well-draining, sandy soil")
            .with_humidity("Low; adapted to arid conditions")
            .with_temperature("Varies; can tolerate extremes (0-40 degrees Celsius)")
            .with_watering_needs("Very low; survives on minimal rainfall")
            .with_fertilization_schedule("Minimal; infrequent, if any")
            .with_pruning_requirements("Low; mostly self-sufficient")
            .with_pest_info("Resistant to pests; susceptible to overwatering"),
        Plant::new("Corpse Flower")
            .with_family("Araceae")
            .with_native_habitat("Rainforests of Sumatra")
            .with_light("Bright, indirect light")
            .with_soil_type("Rich, well-draining soil")
            .with_humidity("High (60-90%)")
            .with_temperature("Warm, ideally 20-30 degrees Celsius (68-86 degrees Fahrenheit)")
            .with_watering_needs("Keep soil consistently moist, but not soggy")
            .with_fertilization_schedule("Monthly during growing season with balanced fertilizer")
            .with_pruning_requirements("Remove dead foliage and ensure good airflow")
            .with_pest_info("Watch for root rot; susceptible to scale insects"),
        Plant::new("Titan Arum")
            .with_family("Araceae")
            .with_native_habitat("Tropical rainforests of Sumatra")
            .with_light("Indirect sunlight")
            .with_soil_type("Moist, rich organic matter")
            .with_humidity("High (60-85%)")
            .with_temperature("Prefers 20-30 degrees Celsius (68-86 degrees Fahrenheit)")
            .with_watering_needs("Regular watering, keep soil moist")
            .with_fertilization_schedule("High-nitrogen fertilizer every 2-3 weeks during growth")
            .with_pruning_requirements("Requires space to grow; prune old leaves")
            .with_pest_info("Prone to fungal infections; monitor for pests"),
    ]
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("U001", "Alice", "Manager", "alice@example.com"),
        User::new("U002", "Bob", "Staff", "bob@example.com"),
    ]
}

pub fn sample_tasks() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Water Snowdonia Buttercup", "2024-09-20"),
        ("Fertilize Attenborough's Pitcher Plant", "2024-09-22"),
    ]
}

/// Loads the sample plants, users, profile and tasks into `registry`.
pub fn populate(registry: &mut PlantCareRegistry) -> RegistryResult<()> {
    for plant in sample_plants() {
        registry.register_plant(plant);
    }
    for user in sample_users() {
        registry.add_user(user);
    }
    registry.create_user_profile(SAMPLE_PROFILE);
    for (description, due) in sample_tasks() {
        registry.schedule_task(description, due)?;
    }
    Ok(())
}

pub fn sample_registry() -> RegistryResult<PlantCareRegistry> {
    let mut registry = PlantCareRegistry::new();
    populate(&mut registry)?;
    Ok(registry)
}
