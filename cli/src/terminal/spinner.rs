use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use animalia_common::source::SourceMode;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
];

/// A span whose progress bar spins while it is entered.
///
/// Drop it once the work is done to clear the bar.
pub fn fetch_span(mode: SourceMode, term: &str) -> Span {
    let span = info_span!("fetch");
    let message = match mode {
        SourceMode::File => "Reading animal data...".to_string(),
        SourceMode::Remote => format!("Searching for '{term}'..."),
    };

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        span.pb_set_style(&style.tick_strings(TICK_STRINGS));
    }
    span.pb_set_message(&message);
    span
}
