//! Starting roster for a freshly launched store.

use heroes_types::Hero;

/// The ten heroes a seeded store starts with, ids 11 through 20.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (11_u32, "Mr. Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero::new(id, name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_ordered() {
        let heroes = seed_heroes();
        assert_eq!(heroes.len(), 10);
        let ids: Vec<u32> = heroes.iter().map(|h| h.id.into_inner()).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<u32>>());
    }
}
