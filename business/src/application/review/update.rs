use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::update::{UpdateReviewParams, UpdateReviewUseCase};

pub struct UpdateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateReviewUseCase for UpdateReviewUseCaseImpl {
    async fn execute(&self, params: UpdateReviewParams) -> Result<Review, ReviewError> {
        self.logger.info(&format!("Updating review: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        let updated = existing
            .revise(&params.user_id, params.comment, params.rating)
            .inspect_err(|e| {
                if matches!(e, ReviewError::NotAuthor) {
                    self.logger.warn(&format!(
                        "User {} tried to edit review {} owned by {}",
                        params.user_id, existing.id, existing.user_id
                    ));
                }
            })?;

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Review updated: {}", updated.id));
        Ok(updated)
    }
}
