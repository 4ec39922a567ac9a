use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::delete::{DeleteMovieParams, DeleteMovieUseCase};
use crate::domain::shared::value_objects::StoreAdmins;

pub struct DeleteMovieUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub admins: Arc<StoreAdmins>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteMovieUseCase for DeleteMovieUseCaseImpl {
    async fn execute(&self, params: DeleteMovieParams) -> Result<(), MovieError> {
        self.logger.info(&format!("Deleting movie: {}", params.id));

        if !self.admins.contains(&params.requested_by) {
            return Err(MovieError::AdminRequired);
        }

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MovieError::NotFound,
                other => MovieError::Repository(other),
            })?;

        // Reviews and cart lines go with the movie; order lines keep it alive.
        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Referenced => MovieError::ReferencedByOrders,
                other => MovieError::Repository(other),
            })?;

        self.logger.info(&format!("Movie deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockMovieRepo, admin_id, admins, customer_id, mock_logger, movie};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_existing_movie() {
        let existing = movie("Heat", "9.99");
        let movie_id = existing.id;

        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_delete()
            .withf(move |id| *id == movie_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMovieParams {
                id: movie_id,
                requested_by: admin_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMovieParams {
                id: Uuid::new_v4(),
                requested_by: admin_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MovieError::NotFound));
    }

    #[tokio::test]
    async fn should_refuse_to_delete_movie_with_orders() {
        let existing = movie("Heat", "9.99");
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::Referenced));

        let use_case = DeleteMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMovieParams {
                id: Uuid::new_v4(),
                requested_by: admin_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MovieError::ReferencedByOrders));
    }

    #[tokio::test]
    async fn should_reject_non_admin() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo.expect_delete().never();

        let use_case = DeleteMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMovieParams {
                id: Uuid::new_v4(),
                requested_by: customer_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MovieError::AdminRequired));
    }
}
