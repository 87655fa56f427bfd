//! Print a shape and metadata summary for a delimited dataset.
//!
//! Examples:
//! - `cargo run --bin dataset_info -- train.csv --has-header`
//! - `cargo run --bin dataset_info -- part1.csv,part2.csv`

use std::process::exit;

use tabload::data::io::{load_text_to_dataset, LoadOptions};

const USAGE: &str = "usage: dataset_info <path[,path...]> [--has-header] [--min-data N] [--min-data-in-bin N]";

fn main() {
    let mut spec: Option<String> = None;
    let mut options = LoadOptions::default();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--has-header" => options.has_header = true,
            "--min-data" => {
                let v = it.next().expect("--min-data requires a value");
                options.min_data = v.parse().expect("--min-data expects an integer");
            }
            "--min-data-in-bin" => {
                let v = it.next().expect("--min-data-in-bin requires a value");
                options.min_data_in_bin = v.parse().expect("--min-data-in-bin expects an integer");
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            other if spec.is_none() && !other.starts_with('-') => {
                spec = Some(other.to_owned());
            }
            other => {
                eprintln!("unexpected argument: {other}");
                eprintln!("{USAGE}");
                exit(2);
            }
        }
    }

    let Some(spec) = spec else {
        eprintln!("{USAGE}");
        exit(2);
    };

    let ds = match load_text_to_dataset(&spec, &options) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("error: {e}");
            exit(1);
        }
    };

    println!("rows:       {}", ds.n_samples());
    println!("features:   {}", ds.n_features());
    if let Some(name) = ds.schema().label_name() {
        println!("label:      {name}");
    }

    let labels = ds.labels();
    let preview: Vec<String> = labels.iter().take(8).map(|v| v.to_string()).collect();
    let ellipsis = if labels.len() > 8 { ", ..." } else { "" };
    println!("labels:     [{}{}]", preview.join(", "), ellipsis);

    let weights = ds.weights();
    let uniform = weights.iter().all(|&w| w == 1.0);
    if uniform {
        println!("weights:    uniform (1.0)");
    } else {
        let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
        for &w in weights.iter() {
            min = min.min(w);
            max = max.max(w);
        }
        println!("weights:    {min} .. {max}");
    }

    if ds.has_groups() {
        println!("groups:     {} (run-lengths)", ds.groups().len());
    } else {
        println!("groups:     none");
    }
}
