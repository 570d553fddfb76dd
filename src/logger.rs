use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::bitmap::Image;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const STDERR_APPENDER: &str = "stderr";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

// Standard output carries the report, so every appender writes to stderr.
#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Ok(config) = fallback_config() {
        let _ = log4rs::init_config(config);
    }
}

fn fallback_config() -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER)
                .build(LevelFilter::Warn),
        )
}

pub fn log_opened_image(file_path: &Path, image: &Image) {
    log::info!(
        "Opened '{}': {}x{} pixels, {:?} channel layout",
        file_path.display(),
        image.width(),
        image.height(),
        image.channel_layout()
    );
}

pub fn log_report_summary(file_path: &Path, number_of_lines: u64) {
    log::info!(
        "Reported {} pixels of '{}'",
        number_of_lines,
        file_path.display()
    );
}
