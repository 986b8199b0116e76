use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use speechmeter_core::analysis::domain::filler_lexicon::FillerLexicon;
use speechmeter_core::analysis::domain::metrics::MetricsCalculator;
use speechmeter_core::analysis::domain::record::AnalysisRecord;
use speechmeter_core::comparison::domain::comparator::ComparisonResult;
use speechmeter_core::pipeline::analyze_file_use_case::AnalyzeFileUseCase;
use speechmeter_core::pipeline::compare_files_use_case::CompareFilesUseCase;
use speechmeter_core::shared::constants::{DEFAULT_LANGUAGE, DEFAULT_RATE_MULTIPLIER};
use speechmeter_core::storage::domain::analysis_store::AnalysisStore;
use speechmeter_core::storage::infrastructure::json_file_store::JsonFileStore;
use speechmeter_core::transcription::infrastructure::whisper_command_transcriber::WhisperCommandTranscriber;

/// Speech metrics for recorded audio: transcription, filler-word counts,
/// speech rate, and side-by-side comparison of two recordings.
#[derive(Parser)]
#[command(name = "speechmeter")]
struct Cli {
    /// Directory holding stored analyses (default: platform data dir).
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe an audio file and store its speech metrics.
    Analyze {
        /// Audio file to analyze.
        audio: PathBuf,

        /// Storage key for the analysis (default: the file name).
        #[arg(long)]
        key: Option<String>,

        /// Interpreter for the transcription script.
        #[arg(long, default_value = "python3")]
        program: String,

        /// Transcription script printing Whisper JSON on stdout.
        #[arg(long, default_value = "transcribe.py")]
        script: PathBuf,

        /// Language tag assumed when the recognizer reports none.
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Words-per-minute multiplier for text-only rate estimation.
        #[arg(long, default_value_t = DEFAULT_RATE_MULTIPLIER)]
        multiplier: f64,

        /// Filler words to count (comma-separated; default: Korean set).
        #[arg(long, value_delimiter = ',')]
        fillers: Option<Vec<String>>,
    },

    /// Compare the stored metrics of two recordings.
    Compare { key1: String, key2: String },

    /// List stored analyses.
    List,

    /// Delete a stored analysis.
    Delete { key: String },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let store = open_store(cli.results_dir.as_deref())?;

    match cli.command {
        Command::Analyze {
            audio,
            key,
            program,
            script,
            language,
            multiplier,
            fillers,
        } => {
            if !audio.exists() {
                return Err(format!("Audio file not found: {}", audio.display()).into());
            }
            if multiplier <= 0.0 {
                return Err(format!("Multiplier must be positive, got {multiplier}").into());
            }

            let key = key.unwrap_or_else(|| {
                audio
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| audio.display().to_string())
            });
            let lexicon = match fillers {
                Some(words) => FillerLexicon::new(words),
                None => FillerLexicon::korean(),
            };

            let transcriber = WhisperCommandTranscriber::new(&program, &script, &language);
            let mut use_case = AnalyzeFileUseCase::new(
                Box::new(transcriber),
                store,
                MetricsCalculator::new(lexicon, multiplier),
            );

            let record = use_case.run(&audio, &key)?;
            print_record(&record);
        }

        Command::Compare { key1, key2 } => {
            let use_case = CompareFilesUseCase::new(store);
            let result = use_case.run(&key1, &key2)?;
            print_comparison(&result);
        }

        Command::List => {
            let records = store.list()?;
            if records.is_empty() {
                println!("No stored analyses.");
            }
            for record in records {
                println!(
                    "{}  {} words, {} fillers, {} WPM  (updated {})",
                    record.file_key,
                    record.metrics.total_words,
                    record.metrics.filler_words_count,
                    record.metrics.speech_rate,
                    record.updated_at.format("%Y-%m-%d %H:%M:%S"),
                );
            }
        }

        Command::Delete { key } => {
            let mut store = store;
            if store.delete(&key)? {
                println!("Deleted analysis for {key}");
            } else {
                return Err(format!("No analysis stored for key: {key}").into());
            }
        }
    }

    Ok(())
}

fn open_store(
    results_dir: Option<&std::path::Path>,
) -> Result<Box<dyn AnalysisStore>, Box<dyn std::error::Error>> {
    let store = match results_dir {
        Some(dir) => JsonFileStore::open(dir)?,
        None => JsonFileStore::open_default()?,
    };
    log::debug!("Using results directory {}", store.dir().display());
    Ok(Box::new(store))
}

fn print_record(record: &AnalysisRecord) {
    println!("Analyzed {} ({})", record.file_key, record.language);
    println!();
    println!("{}", record.metrics.analysis);
    if !record.segments.is_empty() {
        println!();
        println!("Segments:");
        for segment in &record.segments {
            println!(
                "  [{:7.2}s - {:7.2}s] ({:.2}s) {}",
                segment.start_time,
                segment.end_time,
                segment.duration(),
                segment.text
            );
        }
    }
}

fn print_comparison(result: &ComparisonResult) {
    println!(
        "{}: {} WPM, {} fillers",
        result.file1.key, result.file1.speech_rate, result.file1.filler_words_count
    );
    println!(
        "{}: {} WPM, {} fillers",
        result.file2.key, result.file2.speech_rate, result.file2.filler_words_count
    );
    println!();
    println!("Speech rate change: {:+} WPM", result.speech_rate_change);
    println!("Filler words change: {:+}", result.filler_words_change);
    println!();
    println!(
        "Note: filler counts are absolute, not normalized for recording \
         length. Compare recordings of similar duration."
    );
}
