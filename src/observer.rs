use colored::Colorize;

/// Receives the events produced while a video card is being extracted.
///
/// Every method has an empty default so implementors only pick what they need.
pub trait ExtractionObserver {
    /// A selector did not produce an accepted value for `field`.
    fn selector_missed(&self, _field: &str, _selector: &str, _error: &anyhow::Error) {}

    fn field_failed(&self, _field: &str, _error: &anyhow::Error) {}

    /// The card was posted outside the accepted time window.
    fn stale_post_skipped(&self) {}

    fn comments_requested(&self, _video_url: &str) {}

    fn comments_found(&self, _count: usize) {}

    /// The whole card was dropped because of `error`.
    fn extraction_failed(&self, _error: &anyhow::Error) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ExtractionObserver for SilentObserver {}

/// Prints events to the console, selector misses only when `verbose` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver {
    pub verbose: bool,
}

impl ConsoleObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ExtractionObserver for ConsoleObserver {
    fn selector_missed(&self, field: &str, selector: &str, error: &anyhow::Error) {
        if self.verbose {
            println!("{} [{}] {}: {}", "Miss".dimmed(), field, selector, error);
        }
    }

    fn field_failed(&self, field: &str, error: &anyhow::Error) {
        eprintln!("{}", format!("Error getting {}: {:#}", field, error).red());
    }

    fn stale_post_skipped(&self) {
        println!("{}", "Video older than 24 hours. Skipping...".yellow());
    }

    fn comments_requested(&self, video_url: &str) {
        println!("Extracting comments for video: {}", video_url);
    }

    fn comments_found(&self, count: usize) {
        println!("{}", format!("Found {} comments", count).green());
    }

    fn extraction_failed(&self, error: &anyhow::Error) {
        eprintln!("{}", format!("Error extracting video data: {:#}", error).red());
    }
}
