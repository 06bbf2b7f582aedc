use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A plant species and its care sheet. Every field is descriptive text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Plant {
    pub name: String,
    pub family: String,
    pub native_habitat: String,
    pub light: String,
    pub soil_type: String,
    pub humidity: String,
    pub temperature: String,
    pub watering_needs: String,
    pub fertilization_schedule: String,
    pub pruning_requirements: String,
    pub pest_info: String,
}

impl Plant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_native_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.native_habitat = habitat.into();
        self
    }

    pub fn with_light(mut self, light: impl Into<String>) -> Self {
        self.light = light.into();
        self
    }

    pub fn with_soil_type(mut self, soil_type: impl Into<String>) -> Self {
        self.soil_type = soil_type.into();
        self
    }

    pub fn with_humidity(mut self, humidity: impl Into<String>) -> Self {
        self.humidity = humidity.into();
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = temperature.into();
        self
    }

    pub fn with_watering_needs(mut self, watering: impl Into<String>) -> Self {
        self.watering_needs = watering.into();
        self
    }

    pub fn with_fertilization_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.fertilization_schedule = schedule.into();
        self
    }

    pub fn with_pruning_requirements(mut self, pruning: impl Into<String>) -> Self {
        self.pruning_requirements = pruning.into();
        self
    }

    pub fn with_pest_info(mut self, pest_info: impl Into<String>) -> Self {
        self.pest_info = pest_info.into();
        self
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plant: {}, Family: {}, Habitat: {}",
            self.name, self.family, self.native_habitat
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Free text, e.g. "Manager" or "Staff".
    pub role: String,
    pub contact_info: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            contact_info: contact_info.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User ID: {}, Name: {}, Role: {}", self.id, self.name, self.role)
    }
}

/// A named grouping of plants. The plants are shared with the registry,
/// the profile only holds references.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    plants: Vec<Rc<Plant>>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            plants: Vec::new(),
        }
    }

    pub fn add_plant(&mut self, plant: Rc<Plant>) {
        self.plants.push(plant);
    }

    pub fn plants(&self) -> &[Rc<Plant>] {
        &self.plants
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {}, Plants: {}", self.username, self.plants.len())
    }
}

/// A care task due on a calendar date.
///
/// Tasks order by due date first and then by the sequence number the
/// registry stamps on insertion, so tasks sharing a date come out in the
/// order they were added.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub due: NaiveDate,
    #[serde(skip)]
    seq: u64,
}

impl Task {
    pub(crate) fn new(description: String, due: NaiveDate, seq: u64) -> Self {
        Self {
            description,
            due,
            seq,
        }
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task: {} on {}", self.description, self.due.format("%Y-%m-%d"))
    }
}
