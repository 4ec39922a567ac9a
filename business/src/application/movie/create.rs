use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::create::{CreateMovieParams, CreateMovieUseCase};
use crate::domain::shared::value_objects::StoreAdmins;

pub struct CreateMovieUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub admins: Arc<StoreAdmins>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateMovieUseCase for CreateMovieUseCaseImpl {
    async fn execute(&self, params: CreateMovieParams) -> Result<Movie, MovieError> {
        self.logger
            .info(&format!("Creating movie: {}", params.movie.title));

        if !self.admins.contains(&params.requested_by) {
            self.logger.warn(&format!(
                "User {} is not allowed to create movies",
                params.requested_by
            ));
            return Err(MovieError::AdminRequired);
        }

        let movie = Movie::new(params.movie)?;
        self.repository.save(&movie).await?;

        self.logger.info(&format!("Movie created: {}", movie.id));
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::model::MovieProps;
    use crate::domain::movie::value_objects::Genre;
    use crate::test_support::{MockMovieRepo, admin_id, admins, customer_id, mock_logger};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn props() -> MovieProps {
        MovieProps {
            title: "Heat".to_string(),
            price: BigDecimal::from_str("9.99").unwrap(),
            description: "Cops and robbers in Los Angeles.".to_string(),
            genre: Genre::Action,
            image: Some("movie_images/heat.jpg".to_string()),
            image_url: None,
            stock_quantity: 3,
            release_date: None,
        }
    }

    #[tokio::test]
    async fn should_create_movie_when_admin_and_valid() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_save()
            .withf(|movie| movie.title == "Heat")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateMovieParams {
                requested_by: admin_id(),
                movie: props(),
            })
            .await;

        let movie = result.unwrap();
        assert_eq!(movie.price.to_string(), "9.99");
        assert_eq!(movie.genre, Genre::Action);
    }

    #[tokio::test]
    async fn should_reject_when_not_admin() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateMovieParams {
                requested_by: customer_id(),
                movie: props(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MovieError::AdminRequired));
    }

    #[tokio::test]
    async fn should_not_save_when_both_image_sources_set() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateMovieUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateMovieParams {
                requested_by: admin_id(),
                movie: MovieProps {
                    image_url: Some("https://img.example.com/heat.jpg".to_string()),
                    ..props()
                },
            })
            .await;

        match result {
            Err(MovieError::Validation(errors)) => {
                assert!(errors.has("image", "movie.image_source_both_set"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
