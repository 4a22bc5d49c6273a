mod render;

use api_shared::PlanRes;
use careplan_core::{
    config::{export_dir_from_env_value, rules_from_env_value},
    write_export, BmiResult, CoreConfig, ExportMode, HealthProfile,
};
use clap::{Parser, Subcommand, ValueEnum};
use render::{render_plan, PresenterConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "careplan")]
#[command(about = "Personalised treatment plan generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan from a profile submission
    Plan {
        /// Submission file (.json, otherwise YAML)
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Keyword policy YAML (overrides CAREPLAN_RULES_FILE)
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Skip the greeting
        #[arg(long)]
        no_greeting: bool,
        /// Skip the closing disclaimer
        #[arg(long)]
        no_disclaimer: bool,
    },
    /// Write the plan document to the export directory
    Export {
        /// Submission file (.json, otherwise YAML)
        file: PathBuf,
        /// Target directory (overrides CAREPLAN_EXPORT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Append BMI and recommendations after the header
        #[arg(long)]
        full: bool,
        /// Keyword policy YAML (overrides CAREPLAN_RULES_FILE)
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Calculate BMI
    Bmi {
        /// Height in centimetres
        height_cm: f64,
        /// Weight in kilograms
        weight_kg: f64,
    },
}

/// Resolve configuration, letting command-line paths win over the environment.
fn load_config(rules: Option<PathBuf>, out_dir: Option<PathBuf>) -> CliResult<CoreConfig> {
    let rules_path = rules
        .map(|p| p.to_string_lossy().into_owned())
        .or_else(|| std::env::var("CAREPLAN_RULES_FILE").ok());
    let rules = rules_from_env_value(rules_path)?;
    let export_dir = out_dir
        .unwrap_or_else(|| export_dir_from_env_value(std::env::var("CAREPLAN_EXPORT_DIR").ok()));
    Ok(CoreConfig::new(rules, export_dir)?)
}

/// Read a submission file. `.json` files are parsed as JSON, everything else as YAML.
fn load_profile(path: &Path) -> CliResult<HealthProfile> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    tracing::debug!(path = %path.display(), is_json, "loading submission");
    let profile = if is_json {
        careplan_intake::parse_json(&text)?
    } else {
        careplan_intake::parse_yaml(&text)?
    };
    Ok(profile)
}

fn plan(
    file: &Path,
    format: Format,
    rules: Option<PathBuf>,
    presenter: &PresenterConfig,
) -> CliResult<String> {
    let cfg = load_config(rules, None)?;
    let profile = load_profile(file)?;
    let plan = cfg.engine().generate_plan(&profile);
    match format {
        Format::Text => Ok(render_plan(&profile.full_name, &plan, presenter)),
        Format::Json => Ok(serde_json::to_string_pretty(&PlanRes::from(&plan))?),
    }
}

fn export(
    file: &Path,
    out_dir: Option<PathBuf>,
    full: bool,
    rules: Option<PathBuf>,
) -> CliResult<PathBuf> {
    let cfg = load_config(rules, out_dir)?;
    let profile = load_profile(file)?;
    let plan = cfg.engine().generate_plan(&profile);
    let mode = if full {
        ExportMode::Full
    } else {
        ExportMode::HeaderOnly
    };
    let today = chrono::Local::now().date_naive();
    Ok(write_export(
        cfg.export_dir(),
        &profile.full_name,
        today,
        &plan,
        mode,
    )?)
}

fn main() -> CliResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careplan=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Plan {
            file,
            format,
            rules,
            no_greeting,
            no_disclaimer,
        }) => {
            let presenter = PresenterConfig {
                show_greeting: !no_greeting,
                show_disclaimer: !no_disclaimer,
            };
            match plan(&file, format, rules, &presenter) {
                Ok(out) => print!("{}", out),
                Err(e) => eprintln!("Error generating plan: {}", e),
            }
        }
        Some(Commands::Export {
            file,
            out_dir,
            full,
            rules,
        }) => match export(&file, out_dir, full, rules) {
            Ok(path) => println!("Exported plan to: {}", path.display()),
            Err(e) => eprintln!("Error exporting plan: {}", e),
        },
        Some(Commands::Bmi {
            height_cm,
            weight_kg,
        }) => match BmiResult::from_measurements(height_cm, weight_kg) {
            Some(bmi) => println!("BMI: {} ({})", bmi.display_value(), bmi.category.label()),
            None => eprintln!("BMI needs a positive height and weight"),
        },
        None => {
            println!("Use 'careplan --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careplan_core::Gender;

    const YAML: &str = "full_name: Ana Costa\nage: 35\ngender: Female\noccupation: chef\n\
        height_cm: 160\nweight_kg: 58\nsleep_hours: 8\nexercise_frequency: Regularly\n\
        junk_food: Moderate\n";

    #[test]
    fn parses_commands() {
        let cli = Cli::try_parse_from(["careplan", "plan", "me.yaml", "--format", "json"])
            .expect("parse plan");
        match cli.command {
            Some(Commands::Plan { format, rules, .. }) => {
                assert_eq!(format, Format::Json);
                assert!(rules.is_none());
            }
            _ => panic!("expected plan command"),
        }

        let cli = Cli::try_parse_from(["careplan", "export", "me.json", "--full"])
            .expect("parse export");
        assert!(matches!(cli.command, Some(Commands::Export { full: true, .. })));

        assert!(Cli::try_parse_from(["careplan", "plan", "me.yaml", "--format", "xml"]).is_err());
    }

    #[test]
    fn load_profile_picks_parser_by_extension() {
        let dir = tempfile::tempdir().expect("tempdir");

        let yaml_path = dir.path().join("profile.yaml");
        std::fs::write(&yaml_path, YAML).expect("write yaml");
        let profile = load_profile(&yaml_path).expect("yaml profile");
        assert_eq!(profile.gender, Gender::Female);

        let json_path = dir.path().join("profile.JSON");
        std::fs::write(
            &json_path,
            r#"{"age": 35, "gender": "Male", "height_cm": 180, "weight_kg": 80,
                "sleep_hours": 7, "exercise_frequency": "Never", "junk_food": "Low"}"#,
        )
        .expect("write json");
        let profile = load_profile(&json_path).expect("json profile");
        assert_eq!(profile.gender, Gender::Male);

        let wrong = dir.path().join("profile.yml");
        std::fs::write(&wrong, "{\"age\": \"x\"}").expect("write");
        assert!(load_profile(&wrong).is_err());
    }

    #[test]
    fn export_writes_into_out_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in.yaml");
        std::fs::write(&input, YAML).expect("write yaml");
        let out_dir = dir.path().join("out");

        let path = export(&input, Some(out_dir.clone()), true, None).expect("export");
        assert_eq!(path, out_dir.join("treatment_plan_Ana_Costa.txt"));

        let doc = std::fs::read_to_string(&path).expect("read export");
        assert!(doc.starts_with("Personalized Treatment Plan for Ana Costa\n"));
        assert!(doc.contains("[Diet]"));
    }

    #[test]
    fn plan_json_matches_rest_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in.yaml");
        std::fs::write(&input, YAML).expect("write yaml");

        let out = plan(&input, Format::Json, None, &PresenterConfig::default()).expect("plan");
        let res: PlanRes = serde_json::from_str(&out).expect("plan json");
        let bmi = res.bmi.expect("bmi");
        assert_eq!(bmi.category, "Normal weight");
        assert_eq!(bmi.display_value, "22.7");
        assert_eq!(bmi.indicator, "normal");
        assert_eq!(res.recommendations[0].rule, "sleep_in_range");
        assert_eq!(res.recommendations[0].section, "sleep");
    }
}
