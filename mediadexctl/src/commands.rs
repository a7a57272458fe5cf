//! `validate` and `import` over a JSON file of entities.

use std::{path::Path, sync::Arc};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use mediadex_config::Config;
use mediadex_core::{
    BookValidator, CatalogError, CatalogRepository, CatalogService,
    GameValidator, InMemoryRepository, MovieValidator, Validator,
};
use mediadex_model::{Book, CatalogEntity, EntityKind, Game, Movie, Status};

use crate::{
    error::Result,
    input::read_entities,
    report::{ImportItem, ImportReport, ItemReport},
};

/// Validates every element of `path` as a new entity of `kind`.
pub fn validate_file(
    kind: EntityKind,
    path: &Path,
    config: &Config,
) -> Result<Vec<ItemReport>> {
    match kind {
        EntityKind::Movie => {
            validate_all::<Movie, _>(path, &MovieValidator::new(config))
        }
        EntityKind::Book => {
            validate_all::<Book, _>(path, &BookValidator::new(config))
        }
        EntityKind::Game => {
            validate_all::<Game, _>(path, &GameValidator::new(config))
        }
    }
}

fn validate_all<E, V>(path: &Path, validator: &V) -> Result<Vec<ItemReport>>
where
    E: CatalogEntity + DeserializeOwned,
    V: Validator<E>,
{
    let reports = read_entities::<E>(path)?
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            ItemReport::from_result(index, validator.validate_new(entity))
        })
        .collect::<Vec<_>>();
    let rejected = reports
        .iter()
        .filter(|report| report.status == Status::Error)
        .count();
    info!(kind = %E::KIND, count = reports.len(), rejected, "file validated");
    Ok(reports)
}

/// Adds every element of `path` to a fresh in-memory catalog.
pub async fn import_file(
    kind: EntityKind,
    path: &Path,
    config: &Config,
) -> Result<ImportReport> {
    match kind {
        EntityKind::Movie => {
            import_all(
                path,
                CatalogService::new(
                    Arc::new(InMemoryRepository::<Movie>::new()),
                    MovieValidator::new(config),
                ),
            )
            .await
        }
        EntityKind::Book => {
            import_all(
                path,
                CatalogService::new(
                    Arc::new(InMemoryRepository::<Book>::new()),
                    BookValidator::new(config),
                ),
            )
            .await
        }
        EntityKind::Game => {
            import_all(
                path,
                CatalogService::new(
                    Arc::new(InMemoryRepository::<Game>::new()),
                    GameValidator::new(config),
                ),
            )
            .await
        }
    }
}

async fn import_all<E, V, R>(
    path: &Path,
    service: CatalogService<E, V, R>,
) -> Result<ImportReport>
where
    E: CatalogEntity + DeserializeOwned,
    V: Validator<E>,
    R: CatalogRepository<E>,
{
    let mut items = Vec::new();
    for (index, entity) in read_entities::<E>(path)?.into_iter().enumerate() {
        match service.add(entity).await {
            Ok(result) => items.push(ImportItem::stored(index, result)),
            Err(err @ CatalogError::Validation { .. }) => {
                warn!(kind = %E::KIND, index, "{err}");
                items.push(ImportItem::rejected(index, &err));
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(ImportReport::new(items))
}
