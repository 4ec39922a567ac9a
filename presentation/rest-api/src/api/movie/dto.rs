use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::movie::model::{Movie, MovieProps};
use business::domain::movie::value_objects::Genre;
use business::domain::shared::validation::ValidationErrors;

#[derive(Debug, Clone, Object)]
pub struct MovieRequest {
    /// Movie title (cannot be empty)
    pub title: String,
    /// Decimal price with up to two decimals, e.g. "12.99"
    pub price: String,
    /// Synopsis
    #[oai(default)]
    pub description: String,
    /// Genre code: ACTION, COMEDY, DRAMA, HORROR, SCIFI or ROMANCE (default DRAMA)
    #[oai(skip_serializing_if_is_none)]
    pub genre: Option<String>,
    /// Path of an uploaded poster (exclusive with `image_url`)
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Absolute http(s) poster URL (exclusive with `image`)
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Copies in stock (>= 0)
    #[oai(default)]
    pub stock_quantity: i64,
    /// Release date (YYYY-MM-DD)
    #[oai(skip_serializing_if_is_none)]
    pub release_date: Option<NaiveDate>,
}

impl MovieRequest {
    /// Parses the wire formats the domain cannot take as-is. Range and
    /// consistency checks are left to the domain.
    pub fn into_props(self) -> Result<MovieProps, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let price = errors.check(
            "price",
            BigDecimal::from_str(self.price.trim()).map_err(|_| "price.invalid"),
        );
        let genre = match self.genre.as_deref() {
            None => Some(Genre::default()),
            Some(code) => errors.check(
                "genre",
                code.parse::<Genre>().map_err(|_| "movie.genre_invalid"),
            ),
        };

        match (price, genre) {
            (Some(price), Some(genre)) => Ok(MovieProps {
                title: self.title,
                price,
                description: self.description,
                genre,
                image: self.image,
                image_url: self.image_url,
                stock_quantity: self.stock_quantity,
                release_date: self.release_date,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MovieResponse {
    /// Movie unique identifier
    pub id: String,
    pub title: String,
    /// Current price as a decimal string, e.g. "10.00"
    pub price: String,
    pub description: String,
    /// Genre code
    pub genre: String,
    /// Human readable genre
    pub genre_label: String,
    /// Uploaded poster path
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Remote poster URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub stock_quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub release_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            price: movie.price.to_string(),
            description: movie.description,
            genre: movie.genre.to_string(),
            genre_label: movie.genre.label().to_string(),
            image: movie.image.image().map(str::to_string),
            image_url: movie.image.image_url().map(str::to_string),
            stock_quantity: movie.stock_quantity,
            release_date: movie.release_date,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
