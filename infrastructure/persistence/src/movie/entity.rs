use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::movie::model::Movie;
use business::domain::movie::value_objects::{Genre, ImageSource};
use business::domain::shared::money::Price;

#[derive(Debug, FromRow)]
pub struct MovieEntity {
    pub id: Uuid,
    pub title: String,
    pub price: BigDecimal,
    pub description: String,
    pub genre: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub stock_quantity: i32,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieEntity {
    pub fn into_domain(self) -> Movie {
        let image = ImageSource::from_fields(self.image.clone(), self.image_url)
            .unwrap_or_else(|_| ImageSource::Upload(self.image.unwrap_or_default()));

        Movie::from_repository(
            self.id,
            self.title,
            Price::from_repository(self.price),
            self.description,
            self.genre.parse::<Genre>().unwrap_or_default(),
            image,
            self.stock_quantity.max(0) as u32,
            self.release_date,
            self.created_at,
            self.updated_at,
        )
    }
}
