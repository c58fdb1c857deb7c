use fieldcheck_ean::{Ean, EanVariant};
use fieldcheck_movie::{Director, Movie, MovieFields};
use serde::Serialize;

use crate::cmd::{DemoArgs, RunContext};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_report, Report};

#[derive(Serialize)]
struct DemoCase {
    name: &'static str,
    input: String,
    valid: bool,
    detail: String,
}

#[derive(Serialize)]
struct DemoOutput {
    cases: Vec<DemoCase>,
}

pub fn run(_args: DemoArgs, ctx: RunContext) -> CliResult<i32> {
    let mut cases = vec![
        ean_case("ean8", "12345678", EanVariant::Ean8),
        ean_case("ean13", "9780201379624", EanVariant::Ean13),
        ean_case("ean8_too_short", "1234567", EanVariant::Ean8),
        ean_case("ean13_bad_characters", "97802013796XX", EanVariant::Ean13),
    ];
    cases.push(movie_case("movie", inception()));
    cases.push(movie_case(
        "movie_without_ratings",
        MovieFields {
            imdb_rating: None,
            rotten_tomatoes_rating: None,
            ..inception()
        },
    ));

    let rows = cases
        .iter()
        .map(|case| (case.name, case.detail.clone()))
        .collect();
    let raw = cases
        .iter()
        .map(|case| format!("{}={}", case.name, if case.valid { "ok" } else { "error" }))
        .collect::<Vec<_>>()
        .join(" ");
    let out = DemoOutput { cases };

    print_report(
        &Report {
            kind: "demo-report",
            body: &out,
            rows,
            raw,
        },
        ctx.format,
    );
    Ok(SUCCESS)
}

fn ean_case(name: &'static str, input: &str, variant: EanVariant) -> DemoCase {
    let (valid, detail) = match Ean::new(input, variant) {
        Ok(code) => {
            let detail = match code.decompose() {
                Some(parts) => format!(
                    "valid {variant}: {} variable data: ({}, {}, {})",
                    code.value(),
                    parts.prefix,
                    parts.merchant_code,
                    parts.price_cents
                ),
                None => format!("valid {variant}: {}", code.value()),
            };
            (true, detail)
        }
        Err(err) => (false, format!("error: {err}")),
    };
    DemoCase {
        name,
        input: input.to_string(),
        valid,
        detail,
    }
}

fn movie_case(name: &'static str, fields: MovieFields) -> DemoCase {
    let input = fields.title.clone();
    let (valid, detail) = match Movie::new(fields) {
        Ok(movie) => (
            true,
            format!(
                "valid movie: {} (IMDb {}, Rotten Tomatoes {})",
                movie.title(),
                movie.imdb_rating().unwrap_or("-"),
                movie.rotten_tomatoes_rating().unwrap_or("-")
            ),
        ),
        Err(err) => (false, format!("error: {err}")),
    };
    DemoCase {
        name,
        input,
        valid,
        detail,
    }
}

fn inception() -> MovieFields {
    MovieFields {
        title: "Inception".to_string(),
        director: "Christopher Nolan".to_string(),
        producer: "Emma Thomas".to_string(),
        box_office: 829_895_144.0,
        imdb_rating: Some("8.8".to_string()),
        rotten_tomatoes_rating: Some("87%".to_string()),
        genre: Some("Sci-Fi".to_string()),
        director_details: Some(Director::new("Christopher Nolan", true)),
    }
}
