use crate::catalog::{name_eq_fold, EntityCatalog};
use crate::Result;
use futures::future::try_join_all;
use futures::Future;
use luma_model::{EntityRecord, PersonDto, PersonInfo, StudioDto};
use std::collections::HashSet;

/// Resolve the item's studio references against the catalog.
///
/// One concurrent lookup per distinct name value in the input; the output
/// mirrors the input order exactly, with unresolved names degrading to
/// `has_image: false`.
pub(super) async fn join_studios(
    catalog: &dyn EntityCatalog,
    names: &[String],
) -> Result<Vec<StudioDto>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let resolved = resolve_distinct(names.iter().map(String::as_str), |name| {
        catalog.lookup_studio(name)
    })
    .await?;

    Ok(names
        .iter()
        .map(|name| StudioDto {
            name: name.clone(),
            has_image: image_for(&resolved, name),
        })
        .collect())
}

/// Resolve the item's person references against the catalog, keyed by the
/// person's name. Same batching and ordering rules as the studio join.
pub(super) async fn join_people(
    catalog: &dyn EntityCatalog,
    people: &[PersonInfo],
) -> Result<Vec<PersonDto>> {
    if people.is_empty() {
        return Ok(Vec::new());
    }

    let resolved = resolve_distinct(people.iter().map(|p| p.name.as_str()), |name| {
        catalog.lookup_person(name)
    })
    .await?;

    Ok(people
        .iter()
        .map(|person| PersonDto {
            person_info: person.clone(),
            has_image: image_for(&resolved, &person.name),
        })
        .collect())
}

/// Scatter one lookup per distinct name, gather in dispatch order, and
/// drop the misses. A failed lookup fails the whole batch.
async fn resolve_distinct<'a, F, Fut>(
    names: impl Iterator<Item = &'a str>,
    lookup: F,
) -> Result<Vec<EntityRecord>>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<Option<EntityRecord>>>,
{
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = names.filter(|name| seen.insert(*name)).collect();

    let found = try_join_all(distinct.into_iter().map(lookup)).await?;
    Ok(found.into_iter().flatten().collect())
}

/// First record in the resolved set matching the name case-insensitively
/// decides the image flag; no match means no image.
fn image_for(resolved: &[EntityRecord], name: &str) -> bool {
    resolved
        .iter()
        .find(|record| name_eq_fold(&record.name, name))
        .map(EntityRecord::has_primary_image)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Catalog fake with the usual fold-matching lookup, counting calls.
    #[derive(Default)]
    struct FakeCatalog {
        entries: Vec<EntityRecord>,
        lookups: AtomicUsize,
    }

    impl FakeCatalog {
        fn with(entries: Vec<EntityRecord>) -> Self {
            Self {
                entries,
                lookups: AtomicUsize::new(0),
            }
        }

        fn lookup_count(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntityCatalog for FakeCatalog {
        async fn lookup_studio(&self, name: &str) -> Result<Option<EntityRecord>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .entries
                .iter()
                .find(|record| name_eq_fold(&record.name, name))
                .cloned())
        }

        async fn lookup_person(&self, name: &str) -> Result<Option<EntityRecord>> {
            self.lookup_studio(name).await
        }
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn output_mirrors_input_order_with_misses() {
        let catalog = FakeCatalog::with(vec![
            EntityRecord::with_image("Alpha", "alpha.png"),
            EntityRecord::with_image("Gamma", "gamma.png"),
        ]);

        let joined = join_studios(&catalog, &names(&["Alpha", "Beta", "Gamma"]))
            .await
            .unwrap();

        let flags: Vec<_> = joined.iter().map(|s| (s.name.as_str(), s.has_image)).collect();
        assert_eq!(
            flags,
            vec![("Alpha", true), ("Beta", false), ("Gamma", true)]
        );
    }

    #[tokio::test]
    async fn duplicate_names_issue_one_lookup() {
        let catalog = FakeCatalog::with(vec![EntityRecord::with_image("Alpha", "a.png")]);

        let joined = join_studios(&catalog, &names(&["Alpha", "Alpha", "Alpha"]))
            .await
            .unwrap();

        assert_eq!(joined.len(), 3);
        assert!(joined.iter().all(|s| s.has_image));
        assert_eq!(catalog.lookup_count(), 1);
    }

    #[tokio::test]
    async fn join_is_case_insensitive() {
        let catalog =
            FakeCatalog::with(vec![EntityRecord::with_image("PIXAR", "pixar.png")]);

        let joined = join_studios(&catalog, &names(&["Pixar"])).await.unwrap();

        // The reference keeps its own spelling; the image comes from the
        // differently-cased catalog entry.
        assert_eq!(joined[0].name, "Pixar");
        assert!(joined[0].has_image);
    }

    #[tokio::test]
    async fn first_resolved_match_decides() {
        // Two catalog entries collide case-insensitively; every reference
        // joins to whichever lands first in the resolved set.
        let catalog = FakeCatalog::with(vec![
            EntityRecord::new("Orbit"),
            EntityRecord::with_image("ORBIT", "orbit.png"),
        ]);

        let joined = join_studios(&catalog, &names(&["Orbit", "ORBIT"]))
            .await
            .unwrap();

        assert!(!joined[0].has_image);
        assert!(!joined[1].has_image);
        assert_eq!(catalog.lookup_count(), 2);
    }

    #[tokio::test]
    async fn people_join_preserves_roles() {
        let catalog =
            FakeCatalog::with(vec![EntityRecord::with_image("Ada Calder", "ada.png")]);

        let people = vec![
            PersonInfo::with_role("Ada Calder", "Director"),
            PersonInfo::with_role("Rhys Moran", "Writer"),
        ];
        let joined = join_people(&catalog, &people).await.unwrap();

        assert_eq!(joined[0].person_info.role.as_deref(), Some("Director"));
        assert!(joined[0].has_image);
        assert_eq!(joined[1].person_info.name, "Rhys Moran");
        assert!(!joined[1].has_image);
    }

    #[tokio::test]
    async fn empty_input_skips_the_catalog() {
        let catalog = FakeCatalog::default();
        assert!(join_studios(&catalog, &[]).await.unwrap().is_empty());
        assert!(join_people(&catalog, &[]).await.unwrap().is_empty());
        assert_eq!(catalog.lookup_count(), 0);
    }
}
