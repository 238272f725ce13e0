//! Ingest -> compile -> emit, as run by `onto compile`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use onto_core::{CompiledModel, RunSummary, compile};
use onto_ingest::{read_field_rows, read_option_sheet, read_sheet};
use onto_model::{CompileOptions, FieldRow, OptionSheet};
use onto_report::{EmitReport, Reasoner, check_document, emit};

#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub field_sheet: PathBuf,
    pub option_sheet: PathBuf,
    pub output_dir: PathBuf,
    pub options: CompileOptions,
    /// Check without writing the artifact.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct CompileRun {
    pub model: CompiledModel,
    pub report: EmitReport,
    pub summary: RunSummary,
}

pub fn ingest(field_sheet: &Path, option_sheet: &Path) -> Result<(Vec<FieldRow>, OptionSheet)> {
    let span = info_span!("ingest", field_sheet = %field_sheet.display());
    let _guard = span.enter();
    let start = Instant::now();

    let fields = read_sheet(field_sheet)
        .with_context(|| format!("read field sheet {}", field_sheet.display()))?;
    let rows = read_field_rows(&fields)
        .with_context(|| format!("resolve columns of {}", field_sheet.display()))?;
    let options = read_sheet(option_sheet)
        .with_context(|| format!("read option sheet {}", option_sheet.display()))?;
    let options = read_option_sheet(&options);

    info!(
        rows = rows.len(),
        option_columns = options.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok((rows, options))
}

pub fn run_pipeline(inputs: &PipelineInputs, reasoner: &dyn Reasoner) -> Result<CompileRun> {
    let (rows, option_sheet) = ingest(&inputs.field_sheet, &inputs.option_sheet)?;
    let model = compile(&rows, &option_sheet);

    let report = if inputs.dry_run {
        check_document(&model, &inputs.options, reasoner).context("check ontology")?
    } else {
        emit(&model, &inputs.options, reasoner, &inputs.output_dir)
            .with_context(|| format!("emit ontology to {}", inputs.output_dir.display()))?
    };

    let mut summary = RunSummary::from_model(&model);
    summary.identifier_collisions = report.collisions().len();
    summary.reasoner_verdict = Some(report.verdict.to_string());
    summary.artifact = report.path.clone();
    Ok(CompileRun {
        model,
        report,
        summary,
    })
}
