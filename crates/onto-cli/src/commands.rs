use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use onto_cli::config::ConfigFile;
use onto_cli::pipeline::{CompileRun, PipelineInputs, run_pipeline};
use onto_model::{CompileOptions, ConsistencyPolicy, OntologyClass};
use onto_report::StructuralReasoner;

use crate::cli::CompileArgs;
use crate::summary::apply_table_style;

pub fn run_classes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Class", "Label", "Description"]);
    apply_table_style(&mut table);
    for class in OntologyClass::ALL {
        table.add_row(vec![class.as_str(), class.label(), class.description()]);
    }
    println!("{table}");
    Ok(())
}

/// Config file values with explicit flags layered on top.
fn resolve_options(args: &CompileArgs, config: ConfigFile) -> (CompileOptions, PathBuf) {
    let mut options = config.compile;
    if let Some(name) = &args.name {
        options.ontology_name = name.clone();
    }
    if let Some(iri) = &args.base_iri {
        options.base_iri = iri.clone();
    }
    if args.fail_closed {
        options.consistency_policy = ConsistencyPolicy::FailClosed;
    }
    if let Some(secs) = args.reasoner_timeout_secs {
        options.reasoner_timeout_secs = (secs > 0).then_some(secs);
    }
    let output_dir = args
        .output_dir
        .clone()
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    (options, output_dir)
}

pub fn run_compile(args: &CompileArgs) -> Result<CompileRun> {
    let config = ConfigFile::load_optional(args.config.as_deref())?;
    let (options, output_dir) = resolve_options(args, config);
    options.validate().context("invalid compile options")?;

    let span = info_span!("compile_run", ontology = %options.ontology_name);
    let _guard = span.enter();
    let inputs = PipelineInputs {
        field_sheet: args.field_sheet.clone(),
        option_sheet: args.option_sheet.clone(),
        output_dir,
        options,
        dry_run: args.dry_run,
    };
    run_pipeline(&inputs, &StructuralReasoner)
}
