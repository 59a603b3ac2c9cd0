//! The prompt loop: read a path, inventory it, list its extensions, and
//! optionally save the tree as JSON.
//!
//! Errors from a single command are shown to the user and the loop carries
//! on. Only failures of the terminal streams themselves end the session.
use crate::input::{has_json_extension, is_yes, InputKind};
use anyhow::{bail, Context};
use dirinfo_core::{
    deserialize_from_json, load_directory, serialize_to_json, unique_file_extensions,
    DirectoryNode,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PATH_PROMPT: &str =
    "Please provide a folder or a JSON file path with folder information (or type 'exit' to quit):";
const SAVE_PROMPT: &str = "Save to JSON? (y/n):";
const LOCATION_PROMPT: &str =
    "Please provide the JSON file location (e.g., /tmp/ExampleFolder/MyFolderInfo.json):";
const NOT_JSON_PATH: &str =
    "The provided file path is not a valid JSON file. Please provide a valid .json file path.";
const UNSUPPORTED_INPUT: &str = "The provided input is neither a valid directory nor a JSON file.";

/// Where and how a one-shot run saves its tree.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    pub path: PathBuf,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
}

/// Interactive session over an input and an output stream.
pub struct App<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the prompt loop until the user types `exit` or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{PATH_PROMPT}")?;
            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving prompt loop");
                break;
            };
            let line = line.trim();

            if line.eq_ignore_ascii_case("exit") {
                writeln!(self.output, "Exiting the program.")?;
                break;
            }
            if line.is_empty() {
                writeln!(
                    self.output,
                    "Invalid input. Please provide a valid folder path or JSON file path."
                )?;
                continue;
            }

            let path = Path::new(line);
            match self.load(path)? {
                Some(Ok(tree)) => {
                    self.print_extensions(&tree)?;
                    self.save_dialogue(&tree)?;
                }
                Some(Err(err)) => {
                    if err.is_not_found() {
                        debug!(path = %err.path().display(), error = %err, "command failed");
                    } else {
                        warn!(path = %err.path().display(), error = %err, "command failed");
                    }
                    writeln!(self.output, "An error occurred: {err}")?;
                }
                None => writeln!(self.output, "{UNSUPPORTED_INPUT}")?,
            }

            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Process a single path without prompting, saving to `save` if given.
    pub fn run_once(&mut self, path: &Path, save: Option<&SaveOptions>) -> anyhow::Result<()> {
        let tree = match self.load(path)? {
            Some(result) => result?,
            None => bail!("{UNSUPPORTED_INPUT}"),
        };
        self.print_extensions(&tree)?;

        if let Some(save) = save {
            if !has_json_extension(&save.path) {
                bail!("{NOT_JSON_PATH}");
            }
            if save.path.exists() && !save.overwrite {
                bail!(
                    "The file '{}' already exists. Pass --force to overwrite it.",
                    save.path.display()
                );
            }
            serialize_to_json(&tree, &save.path)
                .with_context(|| format!("Failed to save JSON to {}", save.path.display()))?;
            info!(path = %save.path.display(), "tree saved");
            writeln!(
                self.output,
                "Directory information serialized to {}",
                save.path.display()
            )?;
        }
        Ok(())
    }

    /// Load `path` as a directory or JSON document.
    ///
    /// `None` means the path is neither.
    fn load(&mut self, path: &Path) -> io::Result<Option<dirinfo_core::Result<DirectoryNode>>> {
        let result = match InputKind::classify(path) {
            InputKind::Directory => {
                info!(path = %path.display(), "processing directory");
                writeln!(self.output, "Processing directory: {}", path.display())?;
                load_directory(path)
            }
            InputKind::JsonFile => {
                info!(path = %path.display(), "processing JSON file");
                writeln!(self.output, "Processing JSON file: {}", path.display())?;
                deserialize_from_json(path)
            }
            InputKind::Unsupported => return Ok(None),
        };

        if let Ok(tree) = &result {
            debug!(
                name = tree.name_or_empty(),
                files = tree.file_count(),
                directories = tree.directory_count(),
                "tree loaded"
            );
        }
        Ok(Some(result))
    }

    fn print_extensions(&mut self, tree: &DirectoryNode) -> io::Result<()> {
        writeln!(self.output, "Extensions found in the folder:")?;
        for ext in unique_file_extensions(tree) {
            writeln!(self.output, "{ext}")?;
        }
        Ok(())
    }

    fn save_dialogue(&mut self, tree: &DirectoryNode) -> io::Result<()> {
        writeln!(self.output, "{SAVE_PROMPT}")?;
        if !is_yes(&self.read_answer()?) {
            writeln!(self.output, "Skipped saving to JSON.")?;
            return Ok(());
        }

        writeln!(self.output, "{LOCATION_PROMPT}")?;
        let location = self.read_answer()?;
        let location = location.trim();
        if location.is_empty() {
            writeln!(self.output, "Invalid path. Skipping saving to JSON.")?;
            return Ok(());
        }
        let output_path = Path::new(location);
        if !has_json_extension(output_path) {
            writeln!(self.output, "{NOT_JSON_PATH}")?;
            return Ok(());
        }

        if output_path.exists() {
            writeln!(
                self.output,
                "The file '{}' already exists. Do you want to overwrite it? (y/n):",
                output_path.display()
            )?;
            if !is_yes(&self.read_answer()?) {
                writeln!(self.output, "Skipping saving to JSON.")?;
                return Ok(());
            }
        }

        match serialize_to_json(tree, output_path) {
            Ok(()) => {
                info!(path = %output_path.display(), "tree saved");
                writeln!(
                    self.output,
                    "Directory information serialized to {}",
                    output_path.display()
                )
            }
            Err(err) => {
                warn!(path = %err.path().display(), error = %err, "saving failed");
                writeln!(self.output, "Failed to save JSON: {err}")
            }
        }
    }

    /// Next line of input, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Answer to a follow-up question; end of input reads as no answer.
    fn read_answer(&mut self) -> io::Result<String> {
        Ok(self.read_line()?.unwrap_or_default())
    }
}
