//! Mockall doubles for the domain ports, shared by the use-case tests.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::{CartItem, ShoppingCart};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::value_objects::{Genre, ImageSource, MovieFilter};
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::value_objects::PaymentStatus;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::shared::money::Price;
use crate::domain::shared::value_objects::{Quantity, StoreAdmins, UserId};

mock! {
    pub MovieRepo {}

    #[async_trait]
    impl MovieRepository for MovieRepo {
        async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepositoryError>;
        async fn get_featured(&self, limit: u32) -> Result<Vec<Movie>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Movie, RepositoryError>;
        async fn save(&self, movie: &Movie) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn get_by_movie(&self, movie_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
        async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_or_create(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError>;
        async fn add_item(&self, cart_id: Uuid, movie_id: Uuid, quantity: Quantity) -> Result<(), RepositoryError>;
        async fn find_item(&self, item_id: Uuid, user_id: &UserId) -> Result<CartItem, RepositoryError>;
        async fn set_item_quantity(&self, item_id: Uuid, quantity: Quantity) -> Result<(), RepositoryError>;
        async fn remove_item(&self, item_id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn place(&self, order: &Order, cart: &ShoppingCart) -> Result<(), RepositoryError>;
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn update_payment_status(&self, id: Uuid, from: PaymentStatus, to: PaymentStatus) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn admin_id() -> UserId {
    UserId::new("admin-user")
}

pub fn customer_id() -> UserId {
    UserId::new("customer-user")
}

pub fn admins() -> Arc<StoreAdmins> {
    Arc::new(StoreAdmins::new([admin_id()]))
}

pub fn price(amount: &str) -> Price {
    Price::new(BigDecimal::from_str(amount).unwrap()).unwrap()
}

pub fn movie(title: &str, amount: &str) -> Movie {
    let now = Utc::now();
    Movie::from_repository(
        Uuid::new_v4(),
        title.to_string(),
        price(amount),
        format!("{} description", title),
        Genre::Drama,
        ImageSource::Upload(format!("movie_images/{}.jpg", title.to_lowercase())),
        10,
        None,
        now,
        now,
    )
}

pub fn cart_item(cart_id: Uuid, movie: &Movie, quantity: u32) -> CartItem {
    CartItem::from_repository(
        Uuid::new_v4(),
        cart_id,
        movie.id,
        movie.title.clone(),
        movie.price.clone(),
        Quantity::new(i64::from(quantity)).unwrap(),
    )
}

pub fn cart(user_id: UserId, lines: &[(&Movie, u32)]) -> ShoppingCart {
    let cart_id = Uuid::new_v4();
    let items = lines
        .iter()
        .map(|(movie, quantity)| cart_item(cart_id, movie, *quantity))
        .collect();
    ShoppingCart::from_repository(cart_id, user_id, 3, items, Utc::now())
}
