use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::update::{UpdateMovieParams, UpdateMovieUseCase};
use crate::domain::shared::value_objects::StoreAdmins;

pub struct UpdateMovieUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub admins: Arc<StoreAdmins>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateMovieUseCase for UpdateMovieUseCaseImpl {
    async fn execute(&self, params: UpdateMovieParams) -> Result<Movie, MovieError> {
        self.logger.info(&format!("Updating movie: {}", params.id));

        if !self.admins.contains(&params.requested_by) {
            self.logger.warn(&format!(
                "User {} is not allowed to update movie {}",
                params.requested_by, params.id
            ));
            return Err(MovieError::AdminRequired);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MovieError::NotFound,
                other => MovieError::Repository(other),
            })?;

        let previous_price = existing.price.clone();
        let updated = existing.revise(params.movie)?;
        self.repository.save(&updated).await?;

        if updated.price != previous_price {
            // Carts pick this up on their next read; placed orders keep their snapshot.
            self.logger.info(&format!(
                "Movie {} price changed from {} to {}",
                updated.id, previous_price, updated.price
            ));
        }

        self.logger.info(&format!("Movie updated: {}", updated.id));
        Ok(updated)
    }
}
