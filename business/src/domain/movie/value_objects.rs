use serde::{Deserialize, Serialize};
use url::Url;

/// Uploaded poster paths are stored as VARCHAR(255).
const IMAGE_PATH_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Comedy,
    #[default]
    Drama,
    Horror,
    Scifi,
    Romance,
}

impl Genre {
    /// Human readable name shown in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Scifi => "Sci-Fi",
            Genre::Romance => "Romance",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Action => write!(f, "ACTION"),
            Genre::Comedy => write!(f, "COMEDY"),
            Genre::Drama => write!(f, "DRAMA"),
            Genre::Horror => write!(f, "HORROR"),
            Genre::Scifi => write!(f, "SCIFI"),
            Genre::Romance => write!(f, "ROMANCE"),
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTION" => Ok(Genre::Action),
            "COMEDY" => Ok(Genre::Comedy),
            "DRAMA" => Ok(Genre::Drama),
            "HORROR" => Ok(Genre::Horror),
            "SCIFI" => Ok(Genre::Scifi),
            "ROMANCE" => Ok(Genre::Romance),
            _ => Err(format!("Invalid genre: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageSourceError {
    #[error("movie.image_source_both_set")]
    BothSet,
    #[error("movie.image_source_missing")]
    Missing,
    #[error("movie.image_url_invalid")]
    InvalidUrl,
    #[error("movie.image_path_too_long")]
    PathTooLong,
}

/// Where the poster comes from: an uploaded file or a remote URL, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Upload(String),
    Url(Url),
}

impl ImageSource {
    /// Builds the source from the two optional form fields.
    /// Blank values count as unset.
    pub fn from_fields(
        image: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, ImageSourceError> {
        let image = image.filter(|s| !s.trim().is_empty());
        let image_url = image_url.filter(|s| !s.trim().is_empty());

        match (image, image_url) {
            (Some(_), Some(_)) => Err(ImageSourceError::BothSet),
            (None, None) => Err(ImageSourceError::Missing),
            (Some(path), None) => {
                let path = path.trim();
                if path.chars().count() > IMAGE_PATH_MAX_CHARS {
                    return Err(ImageSourceError::PathTooLong);
                }
                Ok(ImageSource::Upload(path.to_string()))
            }
            (None, Some(raw)) => {
                let url = Url::parse(raw.trim()).map_err(|_| ImageSourceError::InvalidUrl)?;
                if url.scheme() != "http" && url.scheme() != "https" {
                    return Err(ImageSourceError::InvalidUrl);
                }
                Ok(ImageSource::Url(url))
            }
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            ImageSource::Upload(path) => Some(path),
            ImageSource::Url(_) => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            ImageSource::Upload(_) => None,
            ImageSource::Url(url) => Some(url.as_str()),
        }
    }
}

/// Catalog listing filter. Empty filter lists everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Case-insensitive match against title or genre code.
    pub term: Option<String>,
    pub genre: Option<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_genre_codes() {
        for genre in [
            Genre::Action,
            Genre::Comedy,
            Genre::Drama,
            Genre::Horror,
            Genre::Scifi,
            Genre::Romance,
        ] {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn should_default_genre_to_drama() {
        assert_eq!(Genre::default(), Genre::Drama);
        assert_eq!(Genre::Scifi.label(), "Sci-Fi");
    }

    #[test]
    fn should_reject_unknown_genre() {
        assert!("WESTERN".parse::<Genre>().is_err());
    }

    #[test]
    fn should_accept_uploaded_image_only() {
        let source = ImageSource::from_fields(Some("movie_images/alien.jpg".into()), None).unwrap();

        assert_eq!(source.image(), Some("movie_images/alien.jpg"));
        assert_eq!(source.image_url(), None);
    }

    #[test]
    fn should_accept_image_url_only() {
        let source =
            ImageSource::from_fields(None, Some("https://img.example.com/alien.jpg".into()))
                .unwrap();

        assert_eq!(source.image(), None);
        assert_eq!(source.image_url(), Some("https://img.example.com/alien.jpg"));
    }

    #[test]
    fn should_reject_both_image_sources() {
        let result = ImageSource::from_fields(
            Some("movie_images/alien.jpg".into()),
            Some("https://img.example.com/alien.jpg".into()),
        );

        assert_eq!(result, Err(ImageSourceError::BothSet));
    }

    #[test]
    fn should_reject_missing_image_source() {
        assert_eq!(
            ImageSource::from_fields(None, None),
            Err(ImageSourceError::Missing)
        );
    }

    #[test]
    fn should_treat_blank_fields_as_unset() {
        assert_eq!(
            ImageSource::from_fields(Some("  ".into()), Some("".into())),
            Err(ImageSourceError::Missing)
        );
    }

    #[test]
    fn should_reject_non_http_image_url() {
        assert_eq!(
            ImageSource::from_fields(None, Some("ftp://example.com/a.jpg".into())),
            Err(ImageSourceError::InvalidUrl)
        );
        assert_eq!(
            ImageSource::from_fields(None, Some("not a url".into())),
            Err(ImageSourceError::InvalidUrl)
        );
    }

    #[test]
    fn should_reject_image_path_longer_than_column() {
        let long_path = format!("movie_images/{}.jpg", "a".repeat(300));

        assert_eq!(
            ImageSource::from_fields(Some(long_path), None),
            Err(ImageSourceError::PathTooLong)
        );

        let max_path = "p".repeat(IMAGE_PATH_MAX_CHARS);
        assert!(ImageSource::from_fields(Some(max_path), None).is_ok());
    }
}
