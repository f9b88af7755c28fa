use crate::cli::OutputFormat;
use crate::core::ComplexityReport;
use colored::*;
use std::io::Write;

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[ComplexityReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[ComplexityReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_report(&mut self, report: &ComplexityReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Function {} analysis:",
            format!("\"{}\"", report.name).bold()
        )?;
        self.write_field("input state space", report.input_state_space)?;
        self.write_field("output state space", report.output_state_space)?;
        self.write_field("branching factor", report.branching_factor)?;
        self.write_field("operational complexity", report.operational_complexity)?;
        self.write_field("local assignment", report.local_assignment_count)?;
        Ok(())
    }

    fn write_field(&mut self, label: &str, value: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.writer, " - {label}: {value}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[ComplexityReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}
