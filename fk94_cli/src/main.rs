//! # FK94 hardening CLI
//!
//! Command-line front end for the hardening engine: non-interactive
//! generation from flags, an interactive questionnaire, and listings
//! of the questions and the rule library.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};

use fk94_harden::config::compile_time::flow as flow_config;
use fk94_harden::questionnaire::{default_questions, FlowState, Question, QuestionnaireFlow};
use fk94_harden::storage::{FileStore, KeyValueStore, StorageError};
use fk94_harden::{
    generate, usage_instructions, AnswerSet, FlowError, GenerateError, GeneratedScript,
    LibraryError, RuleLibrary,
};

/// Invalid answers or otherwise unusable input
const EXIT_INVALID_INPUT: i32 = 2;
/// I/O and other operational failures
const EXIT_FAILURE: i32 = 1;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("failed to load rule library: {0}")]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("'{0}' is not an RFC 3339 timestamp")]
    Timestamp(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to serialize listing: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Generate(_) | CliError::Flow(_) | CliError::Timestamp(_) => {
                EXIT_INVALID_INPUT
            }
            _ => EXIT_FAILURE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fk94",
    version,
    about = "Generate personalized system hardening scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a script directly from flags
    Generate(GenerateArgs),
    /// Answer the questionnaire step by step
    Interactive(InteractiveArgs),
    /// List the questionnaire questions
    Questions(ListArgs),
    /// List the rule library
    Rules(RulesArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Target operating system
    #[arg(long, value_enum)]
    os: OsArg,

    /// Risk level
    #[arg(long, value_enum)]
    risk_level: RiskArg,

    /// Whether you hold cryptocurrency
    #[arg(long, value_enum, default_value_t = YesNo::No)]
    has_crypto: YesNo,

    /// Whether you currently use a VPN
    #[arg(long, value_enum, default_value_t = VpnUse::No)]
    uses_vpn: VpnUse,

    /// Whether you are a public figure or handle sensitive information
    #[arg(long, value_enum, default_value_t = YesNo::No)]
    public_figure: YesNo,

    /// What best describes your work
    #[arg(long, value_enum, default_value_t = WorkType::General)]
    work_type: WorkType,

    /// Embed this RFC 3339 timestamp instead of the current time
    #[arg(long)]
    timestamp: Option<String>,

    /// Print the run instructions after generating
    #[arg(long)]
    instructions: bool,

    #[command(flatten)]
    library: LibraryArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl GenerateArgs {
    fn answer_set(&self) -> AnswerSet {
        AnswerSet::from_pairs([
            ("os", self.os.as_answer()),
            ("risk_level", self.risk_level.as_answer()),
            ("has_crypto", self.has_crypto.as_answer()),
            ("uses_vpn", self.uses_vpn.as_answer()),
            ("public_figure", self.public_figure.as_answer()),
            ("work_type", self.work_type.as_answer()),
        ])
    }
}

#[derive(Debug, Args)]
struct InteractiveArgs {
    /// JSON profile holding a previous run's answers; prefills the
    /// questionnaire and is rewritten on completion
    #[arg(long)]
    profile: Option<PathBuf>,

    #[command(flatten)]
    library: LibraryArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Emit the listing as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct RulesArgs {
    /// Only show rules applicable to this operating system
    #[arg(long, value_enum)]
    os: Option<OsArg>,

    /// Emit the listing as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    library: LibraryArgs,
}

#[derive(Debug, Args)]
struct LibraryArgs {
    /// Load rules from a TOML file instead of the built-in library
    #[arg(long)]
    rules: Option<PathBuf>,
}

impl LibraryArgs {
    fn load(&self) -> Result<RuleLibrary, CliError> {
        let library = match &self.rules {
            Some(path) => {
                info!("loading rule library from {}", path.display());
                RuleLibrary::from_toml_file(path)?
            }
            None => RuleLibrary::builtin(),
        };
        debug!("library holds {} rules", library.len());
        Ok(library)
    }
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Write the script to this path instead of the default filename
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the script to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OsArg {
    Macos,
    Windows,
    Linux,
}

impl OsArg {
    fn as_answer(self) -> &'static str {
        match self {
            OsArg::Macos => "macos",
            OsArg::Windows => "windows",
            OsArg::Linux => "linux",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RiskArg {
    Basic,
    Medium,
    Maximum,
}

impl RiskArg {
    fn as_answer(self) -> &'static str {
        match self {
            RiskArg::Basic => "basic",
            RiskArg::Medium => "medium",
            RiskArg::Maximum => "maximum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum YesNo {
    Yes,
    No,
}

impl YesNo {
    fn as_answer(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VpnUse {
    Yes,
    Sometimes,
    No,
}

impl VpnUse {
    fn as_answer(self) -> &'static str {
        match self {
            VpnUse::Yes => "yes",
            VpnUse::Sometimes => "sometimes",
            VpnUse::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WorkType {
    General,
    Tech,
    Finance,
    Journalism,
}

impl WorkType {
    fn as_answer(self) -> &'static str {
        match self {
            WorkType::General => "general",
            WorkType::Tech => "tech",
            WorkType::Finance => "finance",
            WorkType::Journalism => "journalism",
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Interactive(args) => run_interactive(args),
        Command::Questions(args) => run_questions(args),
        Command::Rules(args) => run_rules(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let library = args.library.load()?;
    let answers = args.answer_set();
    let now = parse_timestamp(args.timestamp.as_deref())?;

    let script = generate(&library, &answers, now)?;
    emit_script(&script, &args.output, args.instructions)
}

fn run_interactive(args: InteractiveArgs) -> Result<(), CliError> {
    let library = args.library.load()?;
    let mut flow = QuestionnaireFlow::with_default_questions();

    let saved = match &args.profile {
        Some(path) => Some(FileStore::open(path)?),
        None => None,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match flow.state() {
            FlowState::AwaitingAnswer(_) => {
                let question = match flow.current_question() {
                    Some(question) => question.clone(),
                    None => break,
                };
                let prefill = saved_answer(saved.as_ref(), &question)?;
                prompt_question(&flow, &question, prefill.as_deref());

                let input = match lines.next() {
                    Some(line) => line?,
                    None => {
                        println!();
                        return Ok(());
                    }
                };

                match input.trim() {
                    "" => {
                        if let Some(value) = prefill {
                            if let Err(err) = flow.answer(&value) {
                                println!("  {}", err);
                            }
                        }
                    }
                    "q" => return Ok(()),
                    "r" => flow.restart(),
                    "b" => {
                        if let Err(err) = flow.back() {
                            println!("  {}", err);
                        }
                    }
                    choice => {
                        let value = resolve_choice(&question, choice);
                        match value {
                            Some(value) => {
                                if let Err(err) = flow.answer(&value) {
                                    println!("  {}", err);
                                }
                            }
                            None => println!("  Unrecognized choice: {}", choice),
                        }
                    }
                }
            }
            FlowState::Generating => {
                println!("\nGenerating your hardening script...");
                thread::sleep(Duration::from_millis(flow_config::GENERATING_DELAY_MS));
                flow.complete(&library, Utc::now())?;
            }
            FlowState::Result => break,
        }
    }

    if let Some(script) = flow.script() {
        emit_script(script, &args.output, true)?;
    }

    if let Some(mut store) = saved {
        for (key, value) in flow.answers().iter() {
            store.set(key, value)?;
        }
        println!("\n[OK] Answers saved to: {}", store.path().display());
    }

    Ok(())
}

/// Valid saved answer for a question, if a profile store is in use
fn saved_answer(store: Option<&FileStore>, question: &Question) -> Result<Option<String>, CliError> {
    let Some(store) = store else {
        return Ok(None);
    };
    Ok(store
        .get(&question.id)?
        .filter(|value| question.accepts(value)))
}

/// Print one question with numbered options and the navigation hints
fn prompt_question(flow: &QuestionnaireFlow, question: &Question, prefill: Option<&str>) {
    let (position, total) = flow.progress();
    println!("\n[{}/{}] {}", position, total, question.prompt);
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}) {}", index + 1, option.label);
    }
    if let Some(value) = prefill {
        if let Some(label) = question.label_for(value) {
            println!("  (enter = {}, 'b' = back, 'r' = restart, 'q' = quit)", label);
            return;
        }
    }
    println!("  (enter a number, 'b' = back, 'r' = restart, 'q' = quit)");
}

/// Map a typed choice to an option value: 1-based index or literal value
fn resolve_choice(question: &Question, choice: &str) -> Option<String> {
    if let Ok(index) = choice.parse::<usize>() {
        return question
            .options
            .get(index.checked_sub(1)?)
            .map(|o| o.value.clone());
    }
    question
        .accepts(choice)
        .then(|| choice.to_string())
}

fn run_questions(args: ListArgs) -> Result<(), CliError> {
    let questions = default_questions();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    for (index, question) in questions.iter().enumerate() {
        println!("{}. {} [{}]", index + 1, question.prompt, question.id);
        for option in &question.options {
            println!("   - {} ({})", option.label, option.value);
        }
    }
    Ok(())
}

fn run_rules(args: RulesArgs) -> Result<(), CliError> {
    let library = args.library.load()?;
    let os = args.os.map(OsArg::as_answer);

    let rules: Vec<_> = library
        .iter()
        .filter(|rule| match os {
            Some(os) => rule.os.iter().any(|o| o.as_str() == os),
            None => true,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in &rules {
        let os_list: Vec<&str> = rule.os.iter().map(|o| o.as_str()).collect();
        let risk_list: Vec<&str> = rule.risk_levels.iter().map(|r| r.as_str()).collect();
        println!("{} - {}", rule.id, rule.name);
        println!("   {}", rule.description);
        println!("   os: {}  risk: {}", os_list.join(", "), risk_list.join(", "));
        for condition in &rule.conditions {
            println!(
                "   requires: {} in [{}]",
                condition.question_id,
                condition.values.join(", ")
            );
        }
    }
    println!("\n{} rule(s)", rules.len());
    Ok(())
}

fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|_| CliError::Timestamp(raw.to_string())),
        None => Ok(Utc::now()),
    }
}

fn emit_script(
    script: &GeneratedScript,
    output: &OutputArgs,
    show_instructions: bool,
) -> Result<(), CliError> {
    if output.stdout {
        print!("{}", script.content);
        return Ok(());
    }

    let path = output
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&script.filename));
    fs::write(&path, &script.content)?;

    println!("\n[OK] Script saved to: {}", path.display());
    println!("  OS: {}", script.os.label());
    println!("  Risk Level: {}", script.risk_level);
    println!("  Rules applied: {}", script.rule_count);

    if show_instructions {
        println!("\nTo run it:");
        for (index, step) in usage_instructions(script.os).iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_generate_args_defaults() {
        let cli = parse(&["fk94", "generate", "--os", "linux", "--risk-level", "basic"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };

        let answers = args.answer_set();
        assert_eq!(answers.get("os"), Some("linux"));
        assert_eq!(answers.get("risk_level"), Some("basic"));
        assert_eq!(answers.get("has_crypto"), Some("no"));
        assert_eq!(answers.get("uses_vpn"), Some("no"));
        assert_eq!(answers.get("public_figure"), Some("no"));
        assert_eq!(answers.get("work_type"), Some("general"));
    }

    #[test]
    fn test_generate_requires_os_and_risk() {
        assert!(parse(&["fk94", "generate"]).is_err());
        assert!(parse(&["fk94", "generate", "--os", "linux"]).is_err());
    }

    #[test]
    fn test_generate_rejects_unknown_enum_values() {
        assert!(parse(&[
            "fk94",
            "generate",
            "--os",
            "beos",
            "--risk-level",
            "basic"
        ])
        .is_err());
        assert!(parse(&[
            "fk94",
            "generate",
            "--os",
            "linux",
            "--risk-level",
            "paranoid"
        ])
        .is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(parse(&[
            "fk94",
            "generate",
            "--os",
            "linux",
            "--risk-level",
            "basic",
            "--stdout",
            "--output",
            "out.sh"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp(Some("2024-06-01T12:00:00Z")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T12:00:00+00:00");

        assert!(matches!(
            parse_timestamp(Some("yesterday")),
            Err(CliError::Timestamp(_))
        ));
        assert!(parse_timestamp(None).is_ok());
    }

    #[test]
    fn test_exit_codes() {
        let invalid = CliError::Timestamp("x".to_string());
        assert_eq!(invalid.exit_code(), EXIT_INVALID_INPUT);

        let io_err = CliError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(io_err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_resolve_choice_by_number_and_value() {
        let questions = default_questions();
        let os = &questions[0];

        assert_eq!(resolve_choice(os, "1"), Some("macos".to_string()));
        assert_eq!(resolve_choice(os, "3"), Some("linux".to_string()));
        assert_eq!(resolve_choice(os, "windows"), Some("windows".to_string()));
        assert_eq!(resolve_choice(os, "0"), None);
        assert_eq!(resolve_choice(os, "9"), None);
        assert_eq!(resolve_choice(os, "beos"), None);
    }

    #[test]
    fn test_saved_answer_prefill() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("os", "macos").unwrap();
        store.set("risk_level", "paranoid").unwrap();

        let questions = default_questions();
        let os = &questions[0];
        let risk = &questions[1];
        let crypto = &questions[2];

        // Valid saved value is offered
        assert_eq!(
            saved_answer(Some(&store), os).unwrap(),
            Some("macos".to_string())
        );
        // A stale value no question accepts is ignored
        assert_eq!(saved_answer(Some(&store), risk).unwrap(), None);
        // Unsaved question and no store at all yield nothing
        assert_eq!(saved_answer(Some(&store), crypto).unwrap(), None);
        assert_eq!(saved_answer(None, os).unwrap(), None);
    }

    #[test]
    fn test_end_to_end_generate_with_pinned_timestamp() {
        let library = RuleLibrary::builtin();
        let cli = parse(&[
            "fk94",
            "generate",
            "--os",
            "macos",
            "--risk-level",
            "maximum",
            "--has-crypto",
            "yes",
            "--timestamp",
            "2024-06-01T12:00:00Z",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };

        let now = parse_timestamp(args.timestamp.as_deref()).unwrap();
        let script = generate(&library, &args.answer_set(), now).unwrap();
        assert_eq!(script.filename, "fk94-harden.sh");
        assert!(script.content.contains("# Generated: 2024-06-01T12:00:00.000Z"));
        assert!(script.content.contains("# Clear Clipboard Regularly"));
    }
}
