use super::types::Atk;

/// Records the memory store starts with when seeding is enabled.
pub fn seed_items() -> Vec<Atk> {
    vec![Atk::new(1, "Pulpen Gel", "Alat Tulis", 10)]
}
