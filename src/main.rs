use std::process::ExitCode;
use std::str::FromStr;

use clinrisk::{
    Disease, FeatureVector, ModelRegistry, Predictor, RegistryConfig, Result, schema_for,
};
use itertools::Itertools;
use log::info;

fn print_usage() {
    eprintln!("Usage: clinrisk <disease> <value,value,...> [--models-dir DIR]");
    eprintln!();
    eprintln!("Supported diseases:");
    for disease in Disease::ALL {
        let schema = schema_for(disease);
        eprintln!(
            "  {:<14} {} ({} values)",
            disease.as_str(),
            disease.label(),
            schema.len()
        );
    }
}

/// Parse comma-separated feature values against the disease schema.
///
/// Every field is required; an unparsable value is an error naming the
/// offending field rather than a silent zero.
fn parse_features(disease: Disease, raw: &str) -> Result<FeatureVector> {
    let schema = schema_for(disease);
    let values: Vec<&str> = raw.split(',').map(str::trim).collect();

    if values.len() != schema.len() {
        return Err(anyhow::anyhow!(
            "{} expects {} values, got {}. Expected fields: {}",
            disease.label(),
            schema.len(),
            values.len(),
            schema.field_names().iter().join(", ")
        )
        .into());
    }

    let mut features = FeatureVector::new();
    for (field, value) in schema.fields.iter().zip(values) {
        let parsed: f64 = value.parse().map_err(|_| {
            anyhow::anyhow!("Invalid number {value:?} for field {} ({})", field.name, field.label)
        })?;
        features.push(parsed);
    }
    Ok(features)
}

fn run() -> Result<bool> {
    let mut models_dir = String::from("models");
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--models-dir" {
            match args.next() {
                Some(dir) => models_dir = dir,
                None => return Err(anyhow::anyhow!("--models-dir requires a path").into()),
            }
        } else {
            positional.push(arg);
        }
    }

    let (disease_name, raw_values) = match positional.as_slice() {
        [disease, values] => (disease.clone(), values.clone()),
        _ => return Ok(false),
    };

    let disease = Disease::from_str(&disease_name)?;
    let features = parse_features(disease, &raw_values)?;

    let config = RegistryConfig::with_models_dir(&models_dir);
    let registry = ModelRegistry::load(&config)?;
    let predictor = Predictor::new(registry);

    info!("Predicting {} risk from {} features", disease.label(), features.len());
    let prediction = predictor.predict(disease, &features)?;
    println!("Risk Level: {prediction}");
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            print_usage();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
