use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{Plant, Task, User, UserProfile};

/// In-memory store of plants, users, profiles and pending care tasks.
///
/// Plant names key the lookup table. Registering a second plant under an
/// existing name keeps both entries in [`plants`](Self::plants) but the
/// lookup only resolves to the most recent one.
#[derive(Debug, Default)]
pub struct PlantCareRegistry {
    plants: Vec<Rc<Plant>>,
    lookup: HashMap<String, Rc<Plant>>,
    users: Vec<User>,
    profiles: Vec<UserProfile>,
    tasks: BinaryHeap<Reverse<Task>>,
    next_seq: u64,
}

impl PlantCareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_plant(&mut self, plant: Plant) -> Rc<Plant> {
        let plant = Rc::new(plant);
        self.plants.push(Rc::clone(&plant));
        if self
            .lookup
            .insert(plant.name.clone(), Rc::clone(&plant))
            .is_some()
        {
            debug!(name = %plant.name, "plant name already registered, lookup now points to the newest entry");
        } else {
            debug!(name = %plant.name, "plant registered");
        }
        plant
    }

    pub fn add_user(&mut self, user: User) {
        debug!(id = %user.id, role = %user.role, "user added");
        self.users.push(user);
    }

    pub fn create_user_profile(&mut self, username: impl Into<String>) {
        let profile = UserProfile::new(username);
        debug!(username = %profile.username, "profile created");
        self.profiles.push(profile);
    }

    pub fn find_plant_by_name(&self, name: &str) -> Option<Rc<Plant>> {
        self.lookup.get(name).cloned()
    }

    /// Every registered plant whose light requirement equals `light` exactly,
    /// in registration order.
    pub fn recommend_plants(&self, light: &str) -> Vec<Rc<Plant>> {
        self.plants
            .iter()
            .filter(|plant| plant.light == light)
            .cloned()
            .collect()
    }

    pub fn add_task(&mut self, description: impl Into<String>, due: NaiveDate) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let task = Task::new(description.into(), due, seq);
        debug!(description = %task.description, %due, "task scheduled");
        self.tasks.push(Reverse(task));
    }

    /// Parses `due` as `YYYY-MM-DD` and enqueues the task.
    pub fn schedule_task(&mut self, description: impl Into<String>, due: &str) -> RegistryResult<()> {
        let date = NaiveDate::parse_from_str(due, "%Y-%m-%d").map_err(|source| {
            RegistryError::InvalidDate {
                input: due.to_string(),
                source,
            }
        })?;
        self.add_task(description, date);
        Ok(())
    }

    /// Removes pending tasks earliest first. Each call to `next` pops one
    /// task; tasks not pulled before the iterator is dropped stay queued.
    pub fn drain_tasks(&mut self) -> DrainTasks<'_> {
        trace!(pending = self.tasks.len(), "draining tasks");
        DrainTasks {
            tasks: &mut self.tasks,
        }
    }

    pub fn next_task(&self) -> Option<&Task> {
        self.tasks.peek().map(|Reverse(task)| task)
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Adds the plant registered as `plant_name` to the first profile
    /// created with `username`.
    pub fn add_plant_to_profile(&mut self, username: &str, plant_name: &str) -> RegistryResult<()> {
        let plant = self
            .find_plant_by_name(plant_name)
            .ok_or_else(|| RegistryError::PlantNotFound(plant_name.to_string()))?;
        let profile = self
            .profiles
            .iter_mut()
            .find(|profile| profile.username == username)
            .ok_or_else(|| RegistryError::ProfileNotFound(username.to_string()))?;
        profile.add_plant(plant);
        debug!(username, plant = plant_name, "plant added to profile");
        Ok(())
    }

    pub fn profile(&self, username: &str) -> Option<&UserProfile> {
        self.profiles.iter().find(|profile| profile.username == username)
    }

    pub fn plants(&self) -> &[Rc<Plant>] {
        &self.plants
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }
}

/// Iterator returned by [`PlantCareRegistry::drain_tasks`].
#[derive(Debug)]
pub struct DrainTasks<'a> {
    tasks: &'a mut BinaryHeap<Reverse<Task>>,
}

impl Iterator for DrainTasks<'_> {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        self.tasks.pop().map(|Reverse(task)| task)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tasks.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for DrainTasks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn names(plants: &[Rc<Plant>]) -> Vec<&str> {
        plants.iter().map(|plant| plant.name.as_str()).collect()
    }

    #[test]
    fn register_plant_updates_list_and_lookup() {
        let mut registry = PlantCareRegistry::new();
        assert!(registry.find_plant_by_name("Titan Arum").is_none());

        registry.register_plant(Plant::new("Titan Arum").with_family("Araceae"));

        assert_eq!(registry.plant_count(), 1);
        let found = registry.find_plant_by_name("Titan Arum").unwrap();
        assert_eq!(found.family, "Araceae");
    }

    #[test]
    fn duplicate_names_keep_both_entries_and_lookup_the_latest() {
        let mut registry = PlantCareRegistry::new();
        registry.register_plant(Plant::new("Fern").with_family("first"));
        let latest = registry.register_plant(Plant::new("Fern").with_family("second"));

        assert_eq!(names(registry.plants()), vec!["Fern", "Fern"]);
        let found = registry.find_plant_by_name("Fern").unwrap();
        assert!(Rc::ptr_eq(&found, &latest));
        assert_eq!(found.family, "second");
    }

    #[test]
    fn find_is_case_sensitive() {
        let mut registry = PlantCareRegistry::new();
        registry.register_plant(Plant::new("Corpse Flower"));
        assert!(registry.find_plant_by_name("corpse flower").is_none());
    }

    #[test]
    fn recommend_returns_exact_matches_in_registration_order() {
        let mut registry = PlantCareRegistry::new();
        registry.register_plant(Plant::new("A").with_light("Full sun"));
        registry.register_plant(Plant::new("B").with_light("Bright, indirect light"));
        registry.register_plant(Plant::new("C").with_light("Bright, indirect light"));

        let picks = registry.recommend_plants("Bright, indirect light");
        assert_eq!(names(&picks), vec!["B", "C"]);

        assert!(registry.recommend_plants("bright, indirect light").is_empty());
        assert!(registry.recommend_plants("Bright").is_empty());
        assert!(registry.recommend_plants("Deep shade").is_empty());
    }

    #[test]
    fn drain_yields_tasks_by_due_date() {
        let mut registry = PlantCareRegistry::new();
        registry.add_task("t1", date("2024-09-22"));
        registry.add_task("t2", date("2024-09-20"));

        let drained: Vec<String> = registry.drain_tasks().map(|task| task.to_string()).collect();
        assert_eq!(
            drained,
            vec!["Task: t2 on 2024-09-20", "Task: t1 on 2024-09-22"]
        );
        assert_eq!(registry.pending_tasks(), 0);
        assert_eq!(registry.drain_tasks().count(), 0);
    }

    #[test]
    fn same_day_tasks_drain_in_insertion_order() {
        let mut registry = PlantCareRegistry::new();
        for description in ["first", "second", "third"] {
            registry.add_task(description, date("2024-05-01"));
        }
        registry.add_task("earlier", date("2024-04-30"));

        let order: Vec<String> = registry.drain_tasks().map(|task| task.description).collect();
        assert_eq!(order, vec!["earlier", "first", "second", "third"]);
    }

    #[test]
    fn dropping_drain_early_keeps_remaining_tasks() {
        let mut registry = PlantCareRegistry::new();
        registry.add_task("a", date("2024-01-01"));
        registry.add_task("b", date("2024-01-02"));

        let mut drain = registry.drain_tasks();
        assert_eq!(drain.len(), 2);
        assert_eq!(drain.next().unwrap().description, "a");
        drop(drain);

        assert_eq!(registry.pending_tasks(), 1);
        assert_eq!(registry.next_task().unwrap().description, "b");
    }

    #[test]
    fn schedule_task_parses_iso_dates() {
        let mut registry = PlantCareRegistry::new();
        registry.schedule_task("Water", "2024-09-20").unwrap();
        assert_eq!(registry.next_task().unwrap().due, date("2024-09-20"));

        let err = registry.schedule_task("Prune", "20/09/2024").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDate { ref input, .. } if input == "20/09/2024"));
        assert_eq!(registry.pending_tasks(), 1);
    }

    #[test]
    fn users_and_profiles_tolerate_duplicates() {
        let mut registry = PlantCareRegistry::new();
        registry.add_user(User::new("U001", "Alice", "Manager", "alice@example.com"));
        registry.add_user(User::new("U001", "Alice", "Manager", "alice@example.com"));
        registry.create_user_profile("PlantLover");
        registry.create_user_profile("PlantLover");

        assert_eq!(registry.users().len(), 2);
        assert_eq!(registry.profiles().len(), 2);
        assert_eq!(registry.profile("PlantLover").unwrap().plant_count(), 0);
    }

    #[test]
    fn add_plant_to_profile_shares_the_registered_plant() {
        let mut registry = PlantCareRegistry::new();
        let plant = registry.register_plant(Plant::new("Welwitschia mirabilis"));
        registry.create_user_profile("PlantLover");
        registry.create_user_profile("PlantLover");

        registry
            .add_plant_to_profile("PlantLover", "Welwitschia mirabilis")
            .unwrap();

        let profiles = registry.profiles();
        assert_eq!(profiles[0].plant_count(), 1);
        assert_eq!(profiles[1].plant_count(), 0);
        assert!(Rc::ptr_eq(&profiles[0].plants()[0], &plant));
    }

    #[test]
    fn add_plant_to_profile_reports_missing_entities() {
        let mut registry = PlantCareRegistry::new();
        registry.register_plant(Plant::new("Fern"));
        registry.create_user_profile("PlantLover");

        let err = registry.add_plant_to_profile("PlantLover", "Cactus").unwrap_err();
        assert!(matches!(err, RegistryError::PlantNotFound(ref name) if name == "Cactus"));

        let err = registry.add_plant_to_profile("Nobody", "Fern").unwrap_err();
        assert!(matches!(err, RegistryError::ProfileNotFound(ref name) if name == "Nobody"));
    }
}
