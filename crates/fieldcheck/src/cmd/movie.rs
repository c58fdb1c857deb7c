use fieldcheck_movie::{Movie, MovieValidator};

use crate::cmd::{read_stdin, MovieArgs, RunContext};
use crate::exit::{movie_error, CliResult, SUCCESS};
use crate::output::{or_dash, print_report, Report};

pub fn run(args: MovieArgs, ctx: RunContext) -> CliResult<i32> {
    let payload = match args.json {
        Some(json) => json,
        None => read_stdin("movie record")?,
    };

    let validator =
        MovieValidator::with_config(ctx.registry).map_err(|err| movie_error("setup", err))?;
    let movie = validator
        .validate_json(&payload)
        .map_err(|err| movie_error("invalid movie", err))?;
    tracing::info!(title = movie.title(), "movie record is valid");

    print_report(
        &Report {
            kind: "movie-result",
            body: &movie,
            rows: movie_rows(&movie),
            raw: movie.title().to_string(),
        },
        ctx.format,
    );
    Ok(SUCCESS)
}

pub(crate) fn movie_rows(movie: &Movie) -> Vec<(&'static str, String)> {
    let director_details = movie.director_details().map(|d| {
        if d.verified() {
            format!("{} (verified)", d.name())
        } else {
            d.name().to_string()
        }
    });

    vec![
        ("title", movie.title().to_string()),
        ("director", movie.director().to_string()),
        ("producer", movie.producer().to_string()),
        ("box_office", format!("{:.2}", movie.box_office())),
        ("imdb_rating", or_dash(movie.imdb_rating())),
        ("rotten_tomatoes_rating", or_dash(movie.rotten_tomatoes_rating())),
        ("genre", or_dash(movie.genre())),
        ("director_details", or_dash(director_details.as_deref())),
    ]
}

#[cfg(test)]
mod tests {
    use fieldcheck_movie::{Director, MovieFields};

    use super::*;

    #[test]
    fn rows_cover_every_field() {
        let movie = Movie::new(MovieFields {
            title: "Inception".to_string(),
            director: "Christopher Nolan".to_string(),
            producer: "Emma Thomas".to_string(),
            box_office: 829_895_144.0,
            imdb_rating: Some("8.8".to_string()),
            rotten_tomatoes_rating: None,
            genre: None,
            director_details: Some(Director::new("Christopher Nolan", true)),
        })
        .unwrap();

        let rows = movie_rows(&movie);
        assert_eq!(rows.len(), 8);
        assert!(rows.contains(&("box_office", "829895144.00".to_string())));
        assert!(rows.contains(&("rotten_tomatoes_rating", "-".to_string())));
        assert!(rows.contains(&(
            "director_details",
            "Christopher Nolan (verified)".to_string()
        )));
    }
}
