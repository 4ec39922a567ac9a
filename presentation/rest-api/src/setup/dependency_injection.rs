use std::sync::Arc;

use business::domain::shared::value_objects::StoreAdmins;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::movie::repository::MovieRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::movie::create::CreateMovieUseCaseImpl;
use business::application::movie::delete::DeleteMovieUseCaseImpl;
use business::application::movie::get_by_id::GetMovieByIdUseCaseImpl;
use business::application::movie::get_featured::GetFeaturedMoviesUseCaseImpl;
use business::application::movie::search::SearchMoviesUseCaseImpl;
use business::application::movie::update::UpdateMovieUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_payment_status::UpdatePaymentStatusUseCaseImpl;
use business::application::review::create::CreateReviewUseCaseImpl;
use business::application::review::delete::DeleteReviewUseCaseImpl;
use business::application::review::get_by_movie::GetMovieReviewsUseCaseImpl;
use business::application::review::update::UpdateReviewUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::movie::routes::MovieApi;
use crate::api::order::routes::OrderApi;
use crate::api::review::routes::ReviewApi;
use crate::api::store::routes::StoreApi;
use crate::config::store_config::StoreConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub store_api: StoreApi,
    pub movie_api: MovieApi,
    pub review_api: ReviewApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, admins: StoreAdmins, store: StoreConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let admins = Arc::new(admins);
        let health_api = HealthApi::new(pool.clone());
        let store_api = StoreApi::new(store);

        // Infrastructure adapters
        let movie_repository = Arc::new(MovieRepositoryPostgres::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));

        // Movie use cases
        let movie_api = MovieApi::new(
            Arc::new(SearchMoviesUseCaseImpl {
                repository: movie_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetFeaturedMoviesUseCaseImpl {
                repository: movie_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMovieByIdUseCaseImpl {
                repository: movie_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateMovieUseCaseImpl {
                repository: movie_repository.clone(),
                admins: admins.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateMovieUseCaseImpl {
                repository: movie_repository.clone(),
                admins: admins.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteMovieUseCaseImpl {
                repository: movie_repository.clone(),
                admins: admins.clone(),
                logger: logger.clone(),
            }),
        );

        // Review use cases
        let review_api = ReviewApi::new(
            Arc::new(GetMovieReviewsUseCaseImpl {
                repository: review_repository.clone(),
                movie_repository: movie_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateReviewUseCaseImpl {
                repository: review_repository.clone(),
                movie_repository: movie_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateReviewUseCaseImpl {
                repository: review_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteReviewUseCaseImpl {
                repository: review_repository,
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddToCartUseCaseImpl {
                repository: cart_repository.clone(),
                movie_repository,
                logger: logger.clone(),
            }),
            Arc::new(UpdateCartItemQuantityUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Order use cases
        let order_api = OrderApi::new(
            Arc::new(PlaceOrderUseCaseImpl {
                repository: order_repository.clone(),
                cart_repository,
                logger: logger.clone(),
            }),
            Arc::new(GetAllOrdersUseCaseImpl {
                repository: order_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetOrderByIdUseCaseImpl {
                repository: order_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdatePaymentStatusUseCaseImpl {
                repository: order_repository,
                admins,
                logger,
            }),
        );

        Self {
            health_api,
            store_api,
            movie_api,
            review_api,
            cart_api,
            order_api,
        }
    }
}
