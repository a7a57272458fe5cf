//! Catalog services: validation in front of a repository.

use std::{any::type_name_of_val, fmt, marker::PhantomData, sync::Arc};

use tracing::{debug, info, warn};

use mediadex_config::Config;
use mediadex_model::{
    Book, CatalogEntity, EntityId, Event, Game, Movie, Severity,
    ValidationResult,
};

use crate::{
    error::{Result, ensure_valid},
    repository::CatalogRepository,
    validation::{
        BookValidator, GameValidator, MovieValidator, Validator, not_exist,
    },
};

/// Validates entities before handing them to the repository.
///
/// Validation failures surface as [`CatalogError::Validation`] for writes.
/// Lookups of missing entities answer with an error result instead, so
/// callers can report them like any other validation outcome.
///
/// [`CatalogError::Validation`]: crate::error::CatalogError::Validation
pub struct CatalogService<E, V, R>
where
    E: CatalogEntity,
    V: Validator<E>,
    R: CatalogRepository<E> + ?Sized,
{
    repository: Arc<R>,
    validator: V,
    _entity: PhantomData<fn() -> E>,
}

impl<E, V, R> Clone for CatalogService<E, V, R>
where
    E: CatalogEntity,
    V: Validator<E> + Clone,
    R: CatalogRepository<E> + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            validator: self.validator.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E, V, R> fmt::Debug for CatalogService<E, V, R>
where
    E: CatalogEntity,
    V: Validator<E>,
    R: CatalogRepository<E> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("kind", &E::KIND)
            .field("repository", &type_name_of_val(self.repository.as_ref()))
            .field("validator", &type_name_of_val(&self.validator))
            .finish()
    }
}

pub type MovieService<R> = CatalogService<Movie, MovieValidator, R>;
pub type BookService<R> = CatalogService<Book, BookValidator, R>;
pub type GameService<R> = CatalogService<Game, GameValidator, R>;

impl<R> MovieService<R>
where
    R: CatalogRepository<Movie> + ?Sized,
{
    pub fn from_config(repository: Arc<R>, config: &Config) -> Self {
        Self::new(repository, MovieValidator::new(config))
    }
}

impl<R> BookService<R>
where
    R: CatalogRepository<Book> + ?Sized,
{
    pub fn from_config(repository: Arc<R>, config: &Config) -> Self {
        Self::new(repository, BookValidator::new(config))
    }
}

impl<R> GameService<R>
where
    R: CatalogRepository<Game> + ?Sized,
{
    pub fn from_config(repository: Arc<R>, config: &Config) -> Self {
        Self::new(repository, GameValidator::new(config))
    }
}

impl<E, V, R> CatalogService<E, V, R>
where
    E: CatalogEntity,
    V: Validator<E>,
    R: CatalogRepository<E> + ?Sized,
{
    pub fn new(repository: Arc<R>, validator: V) -> Self {
        Self {
            repository,
            validator,
            _entity: PhantomData,
        }
    }

    /// Dry run of [`add`](Self::add): validates without storing.
    pub fn validate(&self, entity: &E) -> ValidationResult<()> {
        self.validator.validate_new(entity)
    }

    /// Stores a new entity and returns its id with any non-fatal events.
    pub async fn add(&self, entity: E) -> Result<ValidationResult<EntityId>> {
        let result = self.checked(self.validator.validate_new(&entity))?;

        let name = entity.display_name();
        let id = self.repository.insert(entity).await?;
        info!(kind = %E::KIND, %id, name = %name, "entity added");
        Ok(result.with_data(id))
    }

    /// Replaces a stored entity.
    pub async fn update(&self, entity: E) -> Result<ValidationResult<()>> {
        let mut result = self.validator.validate_existing(&entity);
        if let Some(id) = entity.id()
            && self.repository.find(id).await?.is_none()
        {
            result.absorb(not_exist::<()>(E::KIND));
        }
        let result = self.checked(result)?;

        let id = entity.id();
        self.repository.update(entity).await?;
        info!(kind = %E::KIND, id = ?id, "entity updated");
        Ok(result)
    }

    pub async fn get(&self, id: EntityId) -> Result<ValidationResult<E>> {
        match self.repository.find(id).await? {
            Some(entity) => Ok(ValidationResult::of(entity)),
            None => {
                debug!(kind = %E::KIND, %id, "entity not found");
                Ok(not_exist(E::KIND))
            }
        }
    }

    /// Removes a stored entity; a missing one yields an error result.
    pub async fn remove(&self, id: EntityId) -> Result<ValidationResult<()>> {
        if self.repository.remove(id).await? {
            info!(kind = %E::KIND, %id, "entity removed");
            Ok(ValidationResult::new())
        } else {
            debug!(kind = %E::KIND, %id, "nothing to remove");
            Ok(not_exist(E::KIND))
        }
    }

    pub async fn all(&self) -> Result<Vec<E>> {
        self.repository.find_all().await
    }

    fn checked<T>(
        &self,
        result: ValidationResult<T>,
    ) -> Result<ValidationResult<T>> {
        if result.is_error() {
            let errors: Vec<&str> = result
                .events_at_least(Severity::Error)
                .map(Event::key)
                .collect();
            warn!(kind = %E::KIND, ?errors, "entity rejected");
        } else if !result.events().is_empty() {
            debug!(
                kind = %E::KIND,
                status = %result.status(),
                events = result.events().len(),
                "entity accepted with events"
            );
        }
        ensure_valid(result)
    }
}
