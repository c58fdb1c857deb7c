use fieldcheck_ean::{Ean, EanError, EanValidator, EanVariant};
use serde::Serialize;

use crate::cmd::{read_stdin, EanArgs, RunContext};
use crate::exit::{ean_error, CliResult, SUCCESS};
use crate::output::{or_dash, print_report, Report};

#[derive(Serialize)]
struct EanOutput<'a> {
    variant: String,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merchant_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_cents: Option<&'a str>,
}

pub fn run(args: EanArgs, ctx: RunContext) -> CliResult<i32> {
    let variant = EanVariant::from(args.variant);
    let input = if args.value == "-" {
        // A trailing newline from `echo` is not part of the code.
        let text = read_stdin("EAN code")?;
        text.strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&text)
            .to_string()
    } else {
        args.value
    };

    let code = validate(&input, variant, args.record, ctx)
        .map_err(|err| ean_error("invalid EAN", err))?;
    tracing::info!(variant = %variant, value = code.value(), "EAN code is valid");

    print_ean(&code, ctx);
    Ok(SUCCESS)
}

fn validate(input: &str, variant: EanVariant, record: bool, ctx: RunContext) -> Result<Ean, EanError> {
    if record {
        EanValidator::with_config(ctx.registry)?.validate_json(input, variant)
    } else {
        Ok(Ean::new(input, variant)?)
    }
}

fn print_ean(code: &Ean, ctx: RunContext) {
    let parts = code.decompose();
    let out = EanOutput {
        variant: code.variant().to_string(),
        value: code.value(),
        prefix: parts.map(|p| p.prefix),
        merchant_code: parts.map(|p| p.merchant_code),
        price_cents: parts.map(|p| p.price_cents),
    };

    let mut rows = vec![
        ("variant", out.variant.clone()),
        ("value", out.value.to_string()),
    ];
    if parts.is_some() {
        rows.push(("prefix", or_dash(out.prefix)));
        rows.push(("merchant_code", or_dash(out.merchant_code)));
        rows.push(("price_cents", or_dash(out.price_cents)));
    }

    print_report(
        &Report {
            kind: "ean-result",
            body: &out,
            rows,
            raw: code.value().to_string(),
        },
        ctx.format,
    );
}

#[cfg(test)]
mod tests {
    use fieldcheck_schema::RegistryConfig;

    use super::*;
    use crate::output::OutputFormat;

    fn ctx(strict: bool) -> RunContext {
        RunContext {
            format: OutputFormat::Json,
            registry: if strict {
                RegistryConfig::strict()
            } else {
                RegistryConfig::default()
            },
        }
    }

    #[test]
    fn bare_values_use_digit_rules() {
        let code = validate("12345678", EanVariant::Ean8, false, ctx(false)).unwrap();
        assert_eq!(code.value(), "12345678");
        assert!(matches!(
            validate("1234567", EanVariant::Ean8, false, ctx(false)),
            Err(EanError::Format(_))
        ));
    }

    #[test]
    fn record_values_go_through_schema() {
        let code = validate(
            r#"{"value":"9780201379624"}"#,
            EanVariant::Ean13,
            true,
            ctx(true),
        )
        .unwrap();
        assert_eq!(code.decompose().unwrap().merchant_code, "80201");

        assert!(matches!(
            validate(r#"{"value":9780201379624}"#, EanVariant::Ean13, true, ctx(false)),
            Err(EanError::Schema(_))
        ));
        assert!(matches!(
            validate(
                r#"{"value":"9780201379624","x":1}"#,
                EanVariant::Ean13,
                true,
                ctx(true)
            ),
            Err(EanError::Schema(_))
        ));
    }
}
