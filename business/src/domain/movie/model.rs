use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::MovieError;
use super::value_objects::{Genre, ImageSource};
use crate::domain::shared::money::Price;
use crate::domain::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub genre: Genre,
    pub image: ImageSource,
    pub stock_quantity: u32,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw catalog form values, validated as a whole by `Movie::new` and `Movie::revise`.
#[derive(Debug, Clone)]
pub struct MovieProps {
    pub title: String,
    pub price: BigDecimal,
    pub description: String,
    pub genre: Genre,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub stock_quantity: i64,
    pub release_date: Option<NaiveDate>,
}

struct ValidMovieFields {
    title: String,
    price: Price,
    description: String,
    genre: Genre,
    image: ImageSource,
    stock_quantity: u32,
    release_date: Option<NaiveDate>,
}

fn validate(props: MovieProps) -> Result<ValidMovieFields, MovieError> {
    let mut errors = ValidationErrors::new();

    let title = props.title.trim().to_string();
    if title.is_empty() {
        errors.add("title", "movie.title_empty");
    }
    let price = errors.check("price", Price::new(props.price));
    let image = errors.check(
        "image",
        ImageSource::from_fields(props.image, props.image_url),
    );
    if props.stock_quantity < 0 {
        errors.add("stock_quantity", "movie.stock_negative");
    } else if props.stock_quantity > i64::from(i32::MAX) {
        errors.add("stock_quantity", "movie.stock_too_large");
    }

    match (price, image) {
        (Some(price), Some(image)) if errors.is_empty() => Ok(ValidMovieFields {
            title,
            price,
            description: props.description,
            genre: props.genre,
            image,
            stock_quantity: props.stock_quantity as u32,
            release_date: props.release_date,
        }),
        _ => Err(MovieError::Validation(errors)),
    }
}

impl Movie {
    pub fn new(props: MovieProps) -> Result<Self, MovieError> {
        let fields = validate(props)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: fields.title,
            price: fields.price,
            description: fields.description,
            genre: fields.genre,
            image: fields.image,
            stock_quantity: fields.stock_quantity,
            release_date: fields.release_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns this movie with every editable field replaced, keeping its identity.
    pub fn revise(&self, props: MovieProps) -> Result<Self, MovieError> {
        let fields = validate(props)?;

        Ok(Self {
            id: self.id,
            title: fields.title,
            price: fields.price,
            description: fields.description,
            genre: fields.genre,
            image: fields.image,
            stock_quantity: fields.stock_quantity,
            release_date: fields.release_date,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        title: String,
        price: Price,
        description: String,
        genre: Genre,
        image: ImageSource,
        stock_quantity: u32,
        release_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            price,
            description,
            genre,
            image,
            stock_quantity,
            release_date,
            created_at,
            updated_at,
        }
    }
}
