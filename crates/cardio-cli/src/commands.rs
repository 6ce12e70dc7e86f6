use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use cardio_cli::logging::redact_value;
use cardio_client::{PredictError, PredictionClient, PredictionFormController};
use cardio_model::{ClinicalInputRecord, Field, PredictionOutcome, range_for, validate_record};

use crate::cli::PredictArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::PredictReport;

pub fn run_fields() -> Result<()> {
    let baseline = serde_json::to_value(ClinicalInputRecord::baseline())
        .context("serialize baseline record")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Domain"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        table.add_row(vec![
            field.wire_name().to_string(),
            domain_text(field),
            baseline[field.wire_name()].to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictReport> {
    let record = record_from_args(args);
    let request_body =
        serde_json::to_string_pretty(&record).context("serialize clinical record")?;
    debug!("request body: {}", redact_value(&request_body));

    if args.dry_run {
        let issues = validate_record(&record);
        let outcome = if issues.is_empty() {
            PredictionOutcome::Idle
        } else {
            PredictionOutcome::Failed {
                message: PredictError::Validation { issues }.to_string(),
            }
        };
        return Ok(PredictReport {
            endpoint: args.endpoint.clone(),
            request_body,
            outcome,
            dry_run: true,
        });
    }

    let client = PredictionClient::new(&args.endpoint).context("create prediction client")?;
    let mut controller = PredictionFormController::with_record(client, record);

    let span = info_span!("predict", endpoint = %args.endpoint);
    let _guard = span.enter();
    let outcome = controller.submit().clone();

    Ok(PredictReport {
        endpoint: args.endpoint.clone(),
        request_body,
        outcome,
        dry_run: false,
    })
}

fn record_from_args(args: &PredictArgs) -> ClinicalInputRecord {
    ClinicalInputRecord {
        age: args.age,
        sex: args.sex,
        chest_pain_type: args.chest_pain,
        resting_bp: args.resting_bp,
        cholesterol: args.cholesterol,
        fasting_bs: args.fasting_bs,
        resting_ecg: args.resting_ecg,
        max_hr: args.max_hr,
        exercise_angina: args.exercise_angina,
        oldpeak: args.oldpeak,
        st_slope: args.st_slope,
    }
}

/// Describe a field's domain for the `fields` table: the option codes for a
/// categorical field, the accepted range for a measurement.
fn domain_text(field: Field) -> String {
    if let Some(options) = field.options() {
        return options
            .iter()
            .map(|(code, label)| format!("{code}={label}"))
            .collect::<Vec<_>>()
            .join(", ");
    }
    match range_for(field) {
        Some(range) if field == Field::Oldpeak => {
            format!("decimal, {}-{}", range.start(), range.end())
        }
        Some(range) => format!("integer, {}-{}", range.start(), range.end()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_model::Sex;
    use clap::Parser;

    fn parse_predict(argv: &[&str]) -> PredictArgs {
        let mut full = vec!["predict"];
        full.extend_from_slice(argv);
        PredictArgs::parse_from(full)
    }

    #[test]
    fn test_default_flags_build_the_baseline_record() {
        let args = parse_predict(&[]);
        assert_eq!(record_from_args(&args), ClinicalInputRecord::baseline());
        assert_eq!(args.endpoint, cardio_client::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_categorical_flags_accept_labels_and_codes() {
        let args = parse_predict(&["--sex", "male", "--chest-pain", "3", "--st-slope", "flat"]);
        let record = record_from_args(&args);
        assert_eq!(record.sex, Sex::Male);
        assert_eq!(record.chest_pain_type.code(), 3);
        assert_eq!(record.st_slope.code(), 1);
    }

    #[test]
    fn test_domain_text() {
        assert_eq!(domain_text(Field::Sex), "0=female, 1=male");
        assert_eq!(domain_text(Field::Age), "integer, 1-120");
        assert_eq!(domain_text(Field::Oldpeak), "decimal, 0-10");
    }
}
