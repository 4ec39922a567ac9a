use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};

pub struct DeleteReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteReviewUseCase for DeleteReviewUseCaseImpl {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError> {
        self.logger.info(&format!("Deleting review: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        if !existing.is_authored_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} tried to delete review {} owned by {}",
                params.user_id, existing.id, existing.user_id
            ));
            return Err(ReviewError::NotAuthor);
        }

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Review deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::model::Review;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockReviewRepo, customer_id, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_own_review() {
        let review = Review::new(customer_id(), Uuid::new_v4(), "Nice".into(), 4).unwrap();
        let review_id = review.id;

        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(review.clone()));
        mock_repo
            .expect_delete()
            .withf(move |id| *id == review_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: review_id,
                user_id: customer_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_delete_review_of_another_user() {
        let review = Review::new(customer_id(), Uuid::new_v4(), "Nice".into(), 4).unwrap();

        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(review.clone()));
        mock_repo.expect_delete().never();

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("someone-else"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::NotAuthor));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: Uuid::new_v4(),
                user_id: customer_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::NotFound));
    }
}
