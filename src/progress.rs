use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status lines and spinners on stderr, for interactive terminals only
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter when stderr is a terminal, nothing otherwise
    pub fn for_stderr() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn styled(template: &str, spinner: bool) -> ProgressStyle {
        let base = if spinner {
            ProgressStyle::default_spinner()
        } else {
            ProgressStyle::default_bar()
        };
        // Both templates are constants; fall back to the plain style if one
        // is ever rejected.
        base.clone().template(template).unwrap_or(base)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(Self::styled(PROGRESS_BAR_TEMPLATE, false).progress_chars("█▉▊▋▌▍▎▏ "));
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(Self::styled(SPINNER_TEMPLATE, true).tick_strings(&[
            "◐", "◓", "◑", "◒", "✓",
        ]));
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_scan(&mut self, root: &Path) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Scanning {} for Go packages...",
            style("🔍").cyan(),
            style(root.display()).bold()
        );
        let spinner = self.create_spinner("Walking directories...");
        self.current_bar = Some(spinner);
    }

    pub fn visiting_directory(&self, dir: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Walking: {}...", dir.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Walking: {}... ",
                style(self.next_frame()).cyan(),
                style(dir.display()).dim()
            );
        }
    }

    /// Swap the walk spinner for a bar tracking parsed files
    pub fn start_parsing(&mut self, total_files: usize) -> ProgressBar {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let pb = self.create_progress_bar(total_files as u64, "Parsing Go files");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_scan(&mut self, packages: usize, files: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if packages == 0 {
            eprintln!("\r{} No Go packages found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Scan complete: found {} {} in {} {}",
                style("✓").green(),
                style(packages).yellow().bold(),
                pluralize("package", packages),
                style(files).yellow().bold(),
                pluralize("file", files)
            );
        }
    }

    pub fn start_cycle_detection(&mut self) {
        eprintln!("{} Detecting dependency cycles...", style("🔄").yellow());
    }

    pub fn finish_cycle_detection(&self, cyclic_packages: usize) {
        if cyclic_packages == 0 {
            eprintln!(
                "{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {} on a dependency cycle",
                style("⚠").yellow().bold(),
                style(cyclic_packages).red().bold(),
                pluralize("package", cyclic_packages)
            );
        }
    }
}
