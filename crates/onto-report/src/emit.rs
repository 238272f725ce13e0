use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{error, info, info_span, warn};

use onto_core::CompiledModel;
use onto_model::{CompileOptions, ConsistencyPolicy};
use onto_normalization::Collision;

use crate::document::OwlDocument;
use crate::error::{EmitError, Result};
use crate::reasoner::{InconsistencyReport, Reasoner, ReasonerOutcome};
use crate::translate::build_document;
use crate::writer::write_artifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonerVerdict {
    Consistent,
    Inconsistent,
    TimedOut,
}

impl fmt::Display for ReasonerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReasonerVerdict::Consistent => "consistent",
            ReasonerVerdict::Inconsistent => "inconsistent",
            ReasonerVerdict::TimedOut => "timed out",
        })
    }
}

/// Result of checking (and optionally writing) one document.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub document: OwlDocument,
    pub reasoner: String,
    pub verdict: ReasonerVerdict,
    pub inconsistencies: Vec<InconsistencyReport>,
    /// `None` until the artifact is written.
    pub path: Option<PathBuf>,
}

impl EmitReport {
    pub fn collisions(&self) -> &[Collision] {
        &self.document.collisions
    }
}

/// Builds the document, runs `reasoner` on it and applies the
/// consistency policy. Nothing is written.
///
/// Under fail-open, inconsistencies and timeouts are logged and the report
/// is returned; under fail-closed they become errors.
pub fn check_document(
    model: &CompiledModel,
    options: &CompileOptions,
    reasoner: &dyn Reasoner,
) -> Result<EmitReport> {
    options.validate()?;
    let document = info_span!("translate").in_scope(|| build_document(model, options));

    let check_span = info_span!("reason", reasoner = reasoner.name());
    let _check_guard = check_span.enter();
    let start = Instant::now();
    let deadline = options
        .reasoner_timeout()
        .and_then(|timeout| start.checked_add(timeout));
    let outcome = reasoner.check(&document, deadline);
    let duration_ms = start.elapsed().as_millis();

    let fail_closed = options.consistency_policy == ConsistencyPolicy::FailClosed;
    let (verdict, inconsistencies) = match outcome {
        ReasonerOutcome::Consistent => {
            info!(duration_ms, "ontology is consistent");
            (ReasonerVerdict::Consistent, Vec::new())
        }
        ReasonerOutcome::Inconsistent(reports) => {
            for report in &reports {
                if fail_closed {
                    error!(kind = %report.kind, subject = %report.subject, "{}", report.message);
                } else {
                    warn!(kind = %report.kind, subject = %report.subject, "{}", report.message);
                }
            }
            if fail_closed {
                return Err(EmitError::Inconsistent { reports });
            }
            warn!(
                count = reports.len(),
                duration_ms, "ontology is inconsistent; continuing"
            );
            (ReasonerVerdict::Inconsistent, reports)
        }
        ReasonerOutcome::TimedOut => {
            if fail_closed {
                error!(duration_ms, "reasoner timed out");
                return Err(EmitError::ReasonerTimedOut {
                    reasoner: reasoner.name().to_string(),
                });
            }
            warn!(duration_ms, "reasoner timed out; continuing unchecked");
            (ReasonerVerdict::TimedOut, Vec::new())
        }
    };

    Ok(EmitReport {
        document,
        reasoner: reasoner.name().to_string(),
        verdict,
        inconsistencies,
        path: None,
    })
}

/// Checks the compiled model and writes `<ontology_name>.owl` into
/// `output_dir`.
pub fn emit(
    model: &CompiledModel,
    options: &CompileOptions,
    reasoner: &dyn Reasoner,
    output_dir: &Path,
) -> Result<EmitReport> {
    let emit_span = info_span!("emit", output_dir = %output_dir.display());
    let _emit_guard = emit_span.enter();

    let mut report = check_document(model, options, reasoner)?;
    let path = write_artifact(&report.document, output_dir, &options.artifact_file_name())?;
    info!(path = %path.display(), verdict = %report.verdict, "ontology written");
    report.path = Some(path);
    Ok(report)
}
