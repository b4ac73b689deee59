//! Healthy registration client: entry point.
//!
//! Runs the registration page's use cases from the command line against a
//! live server.  `register` fills an in-memory copy of the registration form
//! from its flags and submits it exactly as the page does; the status text the
//! page would show is printed to stdout.
//!
//! # Usage
//!
//! ```text
//! healthy-client [OPTIONS] <COMMAND>
//!
//! Commands:
//!   register      Submit a new patient
//!   lookup        Show the stored patient with the given CPF
//!   list          List stored patients
//!   patients      Show every stored patient document
//!   create-exam   Record an exam for a patient
//!   exams         Show a patient's exams, most recent first
//!   remove-exam   Remove the exam a patient took on a date
//!   write-config  Write the effective configuration to --config
//!
//! Options:
//!   --config <PATH>      TOML config file [default: healthy.toml]
//!   --base-url <URL>     Registration server, overrides the config file
//!   --timeout <SECS>     Request timeout, overrides the config file
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Flag         |
//! |--------------------|--------------|
//! | `HEALTHY_CONFIG`   | `--config`   |
//! | `HEALTHY_BASE_URL` | `--base-url` |
//! | `HEALTHY_TIMEOUT`  | `--timeout`  |
//!
//! Log output goes to stderr; set `RUST_LOG=debug` for request details.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use healthy_core::domain::elements::{
    BIRTH_DATE_INPUT, CITY_INPUT, NAME_INPUT, NUMBER_INPUT, POSTAL_CODE_INPUT, SEX_INPUT,
    STATUS_MESSAGE, STREET_INPUT, TAX_ID_INPUT,
};
use healthy_core::{ExamDetails, ExamKind};
use healthy_web::application::{
    record_exam, PageError, PatientApi, RegistrationSubmitter, SubmissionOutcome, SubmitEvent,
};
use healthy_web::domain::ClientConfig;
use healthy_web::infrastructure::{load_config, save_config, validate, HttpPatientApi, MemoryPage};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Command-line client for the Healthy registration server.
#[derive(Debug, Parser)]
#[command(
    name = "healthy-client",
    about = "Register and look up patients on a Healthy registration server",
    version
)]
struct Cli {
    /// TOML config file.  A missing file means defaults.
    #[arg(long, default_value = "healthy.toml", env = "HEALTHY_CONFIG")]
    config: PathBuf,

    /// Base URL of the registration server, e.g. `http://127.0.0.1:5000`.
    #[arg(long, env = "HEALTHY_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds.  Without it a request waits indefinitely.
    #[arg(long, env = "HEALTHY_TIMEOUT")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit a new patient.
    Register(PatientArgs),
    /// Show the stored patient with the given CPF.
    Lookup {
        /// CPF of the patient.
        cpf: String,
    },
    /// List stored patients.
    List,
    /// Show every stored patient document.
    Patients,
    /// Record an exam for a patient.
    CreateExam(ExamArgs),
    /// Show a patient's exams, most recent first.
    Exams {
        /// CPF of the patient.
        cpf: String,
    },
    /// Remove the exam a patient took on a date.
    RemoveExam {
        /// CPF of the patient.
        cpf: String,
        /// Date of the exam, as it was recorded.
        date: String,
    },
    /// Write the effective configuration to the --config path.
    WriteConfig,
}

/// An exam to record.
#[derive(Debug, Args)]
struct ExamArgs {
    /// CPF of the patient.
    #[arg(long)]
    cpf: String,
    /// Exam kind: Sangue, Urina, Eletrocardiograma, Raio-X, Ultrassom, or any
    /// other name.
    #[arg(long)]
    kind: String,
    /// Date of the exam, e.g. 2024-05-01.
    #[arg(long)]
    date: String,
    /// Detail field as `key=value`; repeat for more fields.
    #[arg(long = "detail", value_parser = parse_detail)]
    details: Vec<(String, String)>,
}

impl ExamArgs {
    fn raw_details(&self) -> ExamDetails {
        self.details
            .iter()
            .map(|(key, value)| (key.clone(), value.clone().into()))
            .collect()
    }
}

fn parse_detail(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got {arg:?}")),
    }
}

/// Values typed into the registration form.  Omitted fields stay empty, as an
/// untouched input would.
#[derive(Debug, Args)]
struct PatientArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    birth_date: String,
    #[arg(long, default_value = "")]
    sex: String,
    #[arg(long, default_value = "")]
    cpf: String,
    #[arg(long, default_value = "")]
    street: String,
    #[arg(long, default_value = "")]
    number: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    postal_code: String,
}

impl PatientArgs {
    /// Types every value into its input on `page`.
    fn fill(&self, page: &mut MemoryPage) -> Result<(), PageError> {
        for (id, value) in [
            (NAME_INPUT, &self.name),
            (BIRTH_DATE_INPUT, &self.birth_date),
            (SEX_INPUT, &self.sex),
            (TAX_ID_INPUT, &self.cpf),
            (STREET_INPUT, &self.street),
            (NUMBER_INPUT, &self.number),
            (CITY_INPUT, &self.city),
            (POSTAL_CODE_INPUT, &self.postal_code),
        ] {
            page.set_input(id, value.as_str())?;
        }
        Ok(())
    }
}

impl Cli {
    /// Loads the config file and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting base URL is not an absolute http(s) URL.
    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = load_config(&self.config)
            .with_context(|| format!("failed to load config from {}", self.config.display()))?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = Some(timeout);
        }

        validate(&config).context("invalid --base-url")?;
        Ok(config)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

async fn register(api: HttpPatientApi, args: &PatientArgs) -> anyhow::Result<ExitCode> {
    let mut page = MemoryPage::registration_page(0);
    args.fill(&mut page)?;

    let submitter = RegistrationSubmitter::new(api);
    let outcome = submitter.submit(&mut page, &mut SubmitEvent::new()).await?;

    println!("{}", page.text(STATUS_MESSAGE)?);
    Ok(match outcome {
        SubmissionOutcome::Accepted { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn lookup(api: &HttpPatientApi, cpf: &str) -> anyhow::Result<ExitCode> {
    let patient = api
        .fetch_patient(cpf)
        .await
        .with_context(|| format!("failed to look up patient {cpf}"))?;
    println!("{}", serde_json::to_string_pretty(&patient)?);
    Ok(ExitCode::SUCCESS)
}

async fn list(api: &HttpPatientApi) -> anyhow::Result<ExitCode> {
    let patients = api.list_patients().await.context("failed to list patients")?;
    for patient in &patients {
        println!("{}\t{}\t{}", patient.tax_id, patient.name, patient.id);
    }
    info!(count = patients.len(), "patients listed");
    Ok(ExitCode::SUCCESS)
}

async fn patients(api: &HttpPatientApi) -> anyhow::Result<ExitCode> {
    let records = api
        .list_patient_records()
        .await
        .context("failed to fetch patient documents")?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(ExitCode::SUCCESS)
}

async fn create_exam(api: &HttpPatientApi, args: &ExamArgs) -> anyhow::Result<ExitCode> {
    let message = record_exam(
        api,
        &args.cpf,
        ExamKind::from(args.kind.as_str()),
        &args.date,
        &args.raw_details(),
    )
    .await
    .with_context(|| format!("failed to record exam for {}", args.cpf))?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}

async fn exams(api: &HttpPatientApi, cpf: &str) -> anyhow::Result<ExitCode> {
    let exams = api
        .list_exams(cpf)
        .await
        .with_context(|| format!("failed to list exams of {cpf}"))?;
    println!("{}", serde_json::to_string_pretty(&exams)?);
    Ok(ExitCode::SUCCESS)
}

async fn remove_exam(api: &HttpPatientApi, cpf: &str, date: &str) -> anyhow::Result<ExitCode> {
    let message = api
        .remove_exam(cpf, date)
        .await
        .with_context(|| format!("failed to remove exam of {cpf} on {date}"))?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}

fn write_config(path: &Path, config: &ClientConfig) -> anyhow::Result<ExitCode> {
    save_config(path, config)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "config written");
    Ok(ExitCode::SUCCESS)
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // `RUST_LOG` controls the level; `info` when unset or invalid.  Logs go to
    // stderr so stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    info!(base_url = %config.base_url, "healthy client starting");
    let api = HttpPatientApi::new(config.clone()).context("failed to build HTTP client")?;

    match cli.command {
        Command::Register(args) => register(api, &args).await,
        Command::Lookup { cpf } => lookup(&api, &cpf).await,
        Command::List => list(&api).await,
        Command::Patients => patients(&api).await,
        Command::CreateExam(args) => create_exam(&api, &args).await,
        Command::Exams { cpf } => exams(&api, &cpf).await,
        Command::RemoveExam { cpf, date } => remove_exam(&api, &cpf, &date).await,
        Command::WriteConfig => write_config(&cli.config, &config),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
