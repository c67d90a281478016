//! Rendering of sample sets in the supported output formats

use randnum_core::{SampleSet, SampleSummary};
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    samples: &'a SampleSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SampleSummary>,
}

/// Write `samples` to `out` in `format`, optionally followed by summary statistics
pub fn render<W: Write>(
    samples: &SampleSet,
    format: OutputFormat,
    with_summary: bool,
    out: &mut W,
) -> Result<()> {
    let summary = if with_summary { samples.summary() } else { None };

    match format {
        OutputFormat::Table => render_table(samples, summary, out),
        OutputFormat::Json => render_json(samples, summary, out),
        OutputFormat::Csv => render_csv(samples, summary, out),
    }
}

fn render_table<W: Write>(
    samples: &SampleSet,
    summary: Option<SampleSummary>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "┌────────┬──────────────────────┐")?;
    writeln!(out, "│ Index  │ Value                │")?;
    writeln!(out, "├────────┼──────────────────────┤")?;
    for (index, value) in samples.iter().enumerate() {
        writeln!(out, "│ {:<6} │ {:<20} │", index + 1, value)?;
    }
    writeln!(out, "└────────┴──────────────────────┘")?;

    if let Some(summary) = summary {
        writeln!(out, "count: {}", summary.count)?;
        writeln!(out, "min:   {}", summary.min)?;
        writeln!(out, "max:   {}", summary.max)?;
        writeln!(out, "mean:  {}", summary.mean)?;
    }
    Ok(())
}

fn render_json<W: Write>(
    samples: &SampleSet,
    summary: Option<SampleSummary>,
    out: &mut W,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { samples, summary })?;
    writeln!(out)?;
    Ok(())
}

// Summary rows, if any, follow the values under their own `statistic,value` header.
fn render_csv<W: Write>(
    samples: &SampleSet,
    summary: Option<SampleSummary>,
    out: &mut W,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(&mut *out);

    writer.write_record(["index", "value"])?;
    for (index, value) in samples.iter().enumerate() {
        writer.write_record([(index + 1).to_string(), value.to_string()])?;
    }

    if let Some(summary) = summary {
        writer.write_record(["statistic", "value"])?;
        writer.write_record(["count".to_string(), summary.count.to_string()])?;
        writer.write_record(["min".to_string(), summary.min.to_string()])?;
        writer.write_record(["max".to_string(), summary.max.to_string()])?;
        writer.write_record(["mean".to_string(), summary.mean.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
