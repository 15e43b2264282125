use crate::core::persistence::{load_sentences, save_sentences};
use crate::core::sentences::{filter_sentences, split_into_sentences};
use crate::domain::model::SentenceList;
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use std::io::Write;

pub const INPUT_FILE: &str = "input.txt";
pub const OUTPUT_FILE: &str = "filtered_sentences.json";

pub const SAMPLE_TEXT: &str =
    "This is the first sentence. Here is another one, with a comma! Is this the third sentence?";

/// One-shot pipeline: seed, read, split, filter, save, reload, print.
pub struct SentencePipeline<S: Storage> {
    storage: S,
    input_file: String,
    output_file: String,
}

impl<S: Storage> SentencePipeline<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            input_file: INPUT_FILE.to_string(),
            output_file: OUTPUT_FILE.to_string(),
        }
    }

    /// Writes [`SAMPLE_TEXT`] to the input file unless it already exists.
    pub fn create_sample_input_file(&self) -> Result<()> {
        if self.storage.exists(&self.input_file) {
            tracing::debug!("{} already exists, leaving it alone", self.input_file);
            return Ok(());
        }

        self.storage
            .write_file(&self.input_file, SAMPLE_TEXT.as_bytes())?;
        tracing::info!("📝 Created sample input {}", self.input_file);
        Ok(())
    }

    /// Returns the input text, or `None` after reporting why it could not
    /// be read.
    pub fn read_file<E: Write>(&self, err: &mut E) -> Result<Option<String>> {
        let text = self
            .storage
            .read_file(&self.input_file)
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|e| {
                    AppError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
                })
            });

        match text {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.input_file, e);
                writeln!(
                    err,
                    "❌ Could not read {}: {}",
                    self.input_file,
                    e.user_friendly_message()
                )?;
                Ok(None)
            }
        }
    }

    /// Saves the sentences; failures are reported and yield `false`.
    pub fn save_to_json<E: Write>(&self, sentences: &[String], err: &mut E) -> Result<bool> {
        match save_sentences(&self.storage, &self.output_file, sentences) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::debug!("Cannot write {}: {}", self.output_file, e);
                writeln!(
                    err,
                    "❌ Could not save {}: {}",
                    self.output_file,
                    e.user_friendly_message()
                )?;
                Ok(false)
            }
        }
    }

    pub fn load_from_json<E: Write>(&self, err: &mut E) -> Result<Option<SentenceList>> {
        match load_sentences(&self.storage, &self.output_file) {
            Ok(sentences) => Ok(Some(sentences)),
            Err(e) => {
                tracing::debug!("Cannot load {}: {}", self.output_file, e);
                writeln!(
                    err,
                    "❌ Could not load {}: {}",
                    self.output_file,
                    e.user_friendly_message()
                )?;
                Ok(None)
            }
        }
    }

    /// Runs every step once. Returns the reloaded sentences, or `None` when
    /// the input or the saved output could not be read back.
    pub fn run<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<Option<SentenceList>> {
        self.create_sample_input_file()?;

        let Some(text) = self.read_file(err)? else {
            return Ok(None);
        };

        let sentences = split_into_sentences(&text);
        writeln!(out, "Sentences found: {}", sentences.len())?;
        for sentence in &sentences {
            writeln!(out, "  {}", sentence)?;
        }

        let filtered = filter_sentences(&sentences);
        writeln!(out, "Sentences without commas: {}", filtered.len())?;
        for sentence in &filtered {
            writeln!(out, "  {}", sentence)?;
        }

        if self.save_to_json(&filtered, err)? {
            writeln!(out, "Saved to {}", self.output_file)?;
        }

        let Some(reloaded) = self.load_from_json(err)? else {
            return Ok(None);
        };

        writeln!(out, "Loaded from {}:", self.output_file)?;
        for sentence in &reloaded {
            writeln!(out, "{}", sentence)?;
        }

        Ok(Some(reloaded))
    }
}
