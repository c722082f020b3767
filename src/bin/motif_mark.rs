use motif_mark::annotate::annotate_files;
use motif_mark::motif::AlphabetProfile;
use motif_mark::render_settings::RenderSettings;
use motif_mark::render_svg::export_annotation_svg;
use serde::Serialize;
use std::path::Path;
use std::{env, fs, process};

#[derive(Debug, Default)]
struct CliArgs {
    show_help: bool,
    emit_json: bool,
    profile: AlphabetProfile,
    output: Option<String>,
    fasta_path: Option<String>,
    motif_path: Option<String>,
}

fn usage() {
    eprintln!(
        "Usage:\n  \
motif-mark [--alphabet full|minimal] [--output PATH.svg] [--json] FASTA MOTIFS\n  \
motif-mark --version\n\n  \
FASTA   sequence records; uppercase regions are exons\n  \
MOTIFS  one motif per line, IUPAC ambiguity codes allowed\n\n  \
The diagram is written next to the FASTA file unless --output is given."
    );
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                idx += 1;
            }
            "--json" => {
                parsed.emit_json = true;
                idx += 1;
            }
            "--alphabet" => {
                if idx + 1 >= args.len() {
                    return Err("Missing PROFILE after --alphabet".to_string());
                }
                parsed.profile = args[idx + 1].parse()?;
                idx += 2;
            }
            "--output" => {
                if idx + 1 >= args.len() {
                    return Err("Missing PATH after --output".to_string());
                }
                parsed.output = Some(args[idx + 1].clone());
                idx += 2;
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown argument '{other}'"));
            }
            other => {
                if parsed.fasta_path.is_none() {
                    parsed.fasta_path = Some(other.to_string());
                } else if parsed.motif_path.is_none() {
                    parsed.motif_path = Some(other.to_string());
                } else {
                    return Err(format!("Unexpected extra argument '{other}'"));
                }
                idx += 1;
            }
        }
    }
    Ok(parsed)
}

fn derive_output_path(fasta_path: &str) -> String {
    Path::new(fasta_path)
        .with_extension("svg")
        .to_string_lossy()
        .to_string()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn run(parsed: &CliArgs) -> Result<(), String> {
    let (Some(fasta_path), Some(motif_path)) = (&parsed.fasta_path, &parsed.motif_path) else {
        usage();
        return Err("Expected a FASTA path and a motif-list path".to_string());
    };

    let annotation = annotate_files(fasta_path, motif_path, parsed.profile)
        .map_err(|e| e.to_string())?;

    let rendered = export_annotation_svg(
        &annotation.records,
        &annotation.colors,
        &RenderSettings::default(),
    );
    let output = parsed
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(fasta_path));
    fs::write(&output, rendered)
        .map_err(|e| format!("Could not write SVG output '{output}': {e}"))?;

    if parsed.emit_json {
        print_json(&annotation)?;
    }
    println!(
        "Annotated {} record(s) with {} motif(s), wrote '{}'",
        annotation.records.len(),
        annotation.colors.len(),
        output
    );
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("motif-mark {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            usage();
            process::exit(1);
        }
    };
    if parsed.show_help {
        usage();
        return;
    }
    if let Err(e) = run(&parsed) {
        eprintln!("{e}");
        process::exit(1);
    }
}
