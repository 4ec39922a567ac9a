use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteMovieParams {
    pub id: Uuid,
    pub requested_by: UserId,
}

#[async_trait]
pub trait DeleteMovieUseCase: Send + Sync {
    async fn execute(&self, params: DeleteMovieParams) -> Result<(), MovieError>;
}
