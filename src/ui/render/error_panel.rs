use super::RenderOptions;
use crate::models::api_error::ErrorReport;
use crate::utils::colors;

const WRAP: usize = 72;

/// Title, message and remediation suggestions for a failed request.
/// `actions` adds the retry/dismiss hint used by the interactive shell.
pub fn render_error(report: &ErrorReport, opts: &RenderOptions, actions: bool) -> String {
    let kind = &report.kind;
    let mut out = format!(
        "{} {}  {}\n",
        kind.icon(),
        colors::bold_colour(kind.title(), kind.colour(), opts.color),
        colors::dim(&format!("[{}]", kind.type_name()), opts.color)
    );

    let wrap = textwrap::Options::new(WRAP)
        .initial_indent("   ")
        .subsequent_indent("   ");
    out.push_str(&textwrap::fill(&report.message, &wrap));
    out.push_str("\n\n   Suggestions:\n");

    let bullets = textwrap::Options::new(WRAP)
        .initial_indent("     • ")
        .subsequent_indent("       ");
    for suggestion in kind.suggestions() {
        out.push_str(&textwrap::fill(suggestion, &bullets));
        out.push('\n');
    }

    if actions {
        out.push_str(&colors::dim(
            "\n   Type `retry` to try again or `dismiss` to close.\n",
            opts.color,
        ));
    }
    out
}
