//! Catalog services: seeding and read access.

use crate::api::{default_catalog, Exercise, ExerciseId};
use crate::db::repository::{CatalogRepository, RepositoryResult};
use crate::db::FullRepository;

/// Seed the default powerlifting catalog, skipping entries that already
/// exist (idempotent by name). Returns the number of entries created.
pub async fn seed_default_catalog(repo: &dyn FullRepository) -> RepositoryResult<usize> {
    let mut created = 0;
    for exercise in default_catalog() {
        let (_, was_created) = repo.ensure_exercise(&exercise).await?;
        if was_created {
            created += 1;
        }
    }
    if created > 0 {
        log::info!("seeded {} catalog exercises", created);
    }
    Ok(created)
}

/// List the whole catalog, ordered by name.
pub async fn list_exercises(repo: &dyn FullRepository) -> RepositoryResult<Vec<Exercise>> {
    repo.list_exercises().await
}

/// Fetch a single catalog entry.
pub async fn get_exercise(repo: &dyn FullRepository, id: ExerciseId) -> RepositoryResult<Exercise> {
    repo.get_exercise(id).await
}
