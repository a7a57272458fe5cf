use mediadex_config::{Config, MovieConfig, TextConfig};
use mediadex_model::{Event, Movie, Severity, ValidationResult, merge_results};

use super::Validator;
use super::fields::{self, Field};

const CZECH_NAME: Field<'static> =
    Field::new("MOVIE", "CZECH_NAME", "Czech name");
const ORIGINAL_NAME: Field<'static> =
    Field::new("MOVIE", "ORIGINAL_NAME", "Original name");
const YEAR: Field<'static> = Field::new("MOVIE", "YEAR", "Year");
const LANGUAGES: Field<'static> = Field::new("MOVIE", "LANGUAGES", "Languages");
const MEDIA: Field<'static> = Field::new("MOVIE", "MEDIA", "Media");
const MEDIUM_LENGTH: Field<'static> =
    Field::new("MEDIUM", "LENGTH", "Length of medium");
const IMDB_CODE: Field<'static> =
    Field::new("MOVIE", "IMDB_CODE", "IMDB code");
const WIKI_EN: Field<'static> =
    Field::new("MOVIE", "WIKI_EN", "English Wikipedia");
const WIKI_CZ: Field<'static> =
    Field::new("MOVIE", "WIKI_CZ", "Czech Wikipedia");
const GENRES: Field<'static> = Field::new("MOVIE", "GENRES", "Genres");
const GENRE: Field<'static> = Field::new("MOVIE", "GENRE", "Genre");

#[derive(Debug, Clone)]
pub struct MovieValidator {
    movie: MovieConfig,
    text: TextConfig,
}

impl MovieValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            movie: config.movie.clone(),
            text: config.text.clone(),
        }
    }

    fn names(&self, movie: &Movie) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        merge_results![
            fields::required_text(movie.czech_name.as_deref(), CZECH_NAME, max),
            fields::required_text(
                movie.original_name.as_deref(),
                ORIGINAL_NAME,
                max
            ),
        ]
    }

    fn year(&self, movie: &Movie) -> ValidationResult<()> {
        fields::required_range(
            movie.year,
            YEAR,
            self.movie.min_year,
            self.movie.max_year,
        )
    }

    fn media(&self, movie: &Movie) -> ValidationResult<()> {
        let mut result =
            fields::not_empty(&movie.media, MEDIA, Severity::Error);
        result.absorb(ValidationResult::<()>::merge(
            movie
                .media
                .iter()
                .map(|medium| fields::positive(medium.length, MEDIUM_LENGTH)),
        ));
        result
    }

    fn links(&self, movie: &Movie) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        let mut result: ValidationResult<()> = merge_results![
            fields::optional_range(
                movie.imdb_code,
                IMDB_CODE,
                1,
                self.movie.max_imdb_code
            ),
            fields::optional_text(movie.wiki_en.as_deref(), WIKI_EN, max),
            fields::optional_text(movie.wiki_cz.as_deref(), WIKI_CZ, max),
        ];
        if movie.wiki_en.is_none() && movie.wiki_cz.is_none() {
            result.add_event(Event::warn(
                "MOVIE_WIKI_MISSING",
                "Movie has no Wikipedia link.",
            ));
        }
        result
    }

    fn genres(&self, movie: &Movie) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        let mut result =
            fields::not_empty(&movie.genres, GENRES, Severity::Warn);
        result.absorb(ValidationResult::<()>::merge(
            movie
                .genres
                .iter()
                .map(|genre| fields::required_text(Some(genre.as_str()), GENRE, max)),
        ));
        result
    }
}

impl Validator<Movie> for MovieValidator {
    fn validate_fields(&self, movie: &Movie) -> ValidationResult<()> {
        ValidationResult::merge([
            self.names(movie),
            self.year(movie),
            fields::not_empty(&movie.languages, LANGUAGES, Severity::Error),
            self.media(movie),
            self.links(movie),
            self.genres(movie),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::{EntityId, Language, Medium, Status};

    fn config() -> Config {
        let mut config = Config::default();
        config.movie.min_year = 1930;
        config.movie.max_year = 2020;
        config
    }

    fn valid_movie() -> Movie {
        Movie {
            id: None,
            czech_name: Some("Pelíšky".into()),
            original_name: Some("Pelíšky".into()),
            year: Some(1999),
            languages: vec![Language::Cz],
            subtitles: vec![Language::En],
            media: vec![Medium::new(115)],
            imdb_code: Some(176_451),
            wiki_en: Some("https://en.wikipedia.org/wiki/Cosy_Dens".into()),
            wiki_cz: None,
            note: None,
            genres: vec!["Comedy".into(), "Drama".into()],
        }
    }

    fn keys(result: &ValidationResult<()>) -> Vec<String> {
        result
            .events()
            .iter()
            .map(|event| event.key().to_string())
            .collect()
    }

    #[test]
    fn valid_movie_has_no_events() {
        let result = MovieValidator::new(&config()).validate_new(&valid_movie());
        assert!(result.is_ok());
        assert!(result.events().is_empty(), "{:?}", result.events());
    }

    #[test]
    fn year_outside_configured_range() {
        let movie = Movie {
            year: Some(2021),
            ..valid_movie()
        };

        let result = MovieValidator::new(&config()).validate_new(&movie);

        assert_eq!(
            result.events(),
            [Event::error(
                "MOVIE_YEAR_NOT_VALID",
                "Year must be between 1930 and 2020."
            )]
        );
    }

    #[test]
    fn every_broken_field_is_reported_in_field_order() {
        let movie = Movie {
            id: Some(EntityId(3)),
            czech_name: None,
            original_name: Some(" ".into()),
            year: None,
            languages: Vec::new(),
            media: vec![Medium::new(0)],
            imdb_code: Some(0),
            ..valid_movie()
        };

        let result = MovieValidator::new(&config()).validate_new(&movie);

        assert!(result.is_error());
        assert_eq!(
            keys(&result),
            [
                "MOVIE_ID_NOT_NULL",
                "MOVIE_CZECH_NAME_NULL",
                "MOVIE_ORIGINAL_NAME_EMPTY",
                "MOVIE_YEAR_NULL",
                "MOVIE_LANGUAGES_EMPTY",
                "MEDIUM_LENGTH_NOT_POSITIVE",
                "MOVIE_IMDB_CODE_NOT_VALID",
            ]
        );
    }

    #[test]
    fn missing_genres_and_links_only_warn() {
        let movie = Movie {
            wiki_en: None,
            wiki_cz: None,
            genres: Vec::new(),
            ..valid_movie()
        };

        let result = MovieValidator::new(&config()).validate_new(&movie);

        assert_eq!(result.status(), Status::Warn);
        assert!(!result.is_error());
        assert_eq!(keys(&result), ["MOVIE_WIKI_MISSING", "MOVIE_GENRES_EMPTY"]);
    }

    #[test]
    fn warnings_do_not_hide_errors() {
        let movie = Movie {
            genres: Vec::new(),
            media: Vec::new(),
            ..valid_movie()
        };

        let result = MovieValidator::new(&config()).validate_new(&movie);

        assert!(result.is_error());
        assert_eq!(keys(&result), ["MOVIE_MEDIA_EMPTY", "MOVIE_GENRES_EMPTY"]);
    }

    #[test]
    fn blank_genre_is_an_error() {
        let movie = Movie {
            genres: vec!["Drama".into(), "".into()],
            ..valid_movie()
        };

        let result = MovieValidator::new(&config()).validate_new(&movie);

        assert_eq!(keys(&result), ["MOVIE_GENRE_EMPTY"]);
    }

    #[test]
    fn existing_movie_needs_id() {
        let validator = MovieValidator::new(&config());

        let result = validator.validate_existing(&valid_movie());
        assert_eq!(keys(&result), ["MOVIE_ID_NULL"]);

        let stored = Movie {
            id: Some(EntityId(1)),
            ..valid_movie()
        };
        assert!(validator.validate_existing(&stored).is_ok());
    }
}
