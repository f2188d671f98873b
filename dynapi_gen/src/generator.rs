use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use stellar_shared::constants::sdl2::{DYNAPI_CONST_NAME, DYNAPI_OUTPUT_PATH, LIBTAS_HOOKS_HEADER, SDL_PREFIX};

use crate::{
    emit::{self, CheckOutcome, EmitFormat, WriteOutcome},
    extract::{extract, ExtractReport},
    header::{HeaderFormat, LineMatcher},
};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "generates the list of SDL2 functions to hook from a C header", long_about = None)]
pub struct GeneratorConfig {
    #[arg(default_value = LIBTAS_HOOKS_HEADER, help = "Header to read, libTAS_sdlhooks.h or sdl2_dynapi.h")]
    pub input: PathBuf,
    #[arg(short, long, default_value_t = HeaderFormat::Auto, help = "Header shape. auto picks dynapi when the file name mentions it.")]
    pub format: HeaderFormat,
    #[arg(short, long, default_value = SDL_PREFIX, help = "Prefix a line must start with to be considered")]
    pub prefix: String,
    #[arg(short, long, env = "DYNAPI_GEN_OUTPUT", default_value = DYNAPI_OUTPUT_PATH, help = "Where to write the generated list")]
    pub output: PathBuf,
    #[arg(long = "const-name", default_value = DYNAPI_CONST_NAME, help = "Name of the generated constant")]
    pub const_name: String,
    #[arg(short, long, default_value_t = EmitFormat::Rust, help = "Output format")]
    pub emit: EmitFormat,
    #[arg(long, help = "Trim names and drop empty ones instead of copying them verbatim")]
    pub tidy: bool,
    #[arg(short = 't', long = "table-size", help = "Report which slots get patched for a runtime jump table of this size")]
    pub table_size: Option<usize>,
    #[arg(short, long, help = "Print the jump table slot of a function, can be repeated")]
    pub lookup: Vec<String>,
    #[arg(long, help = "Don't write anything, fail if the output is missing or out of date")]
    pub check: bool,
    #[arg(short, long, help = "Verbose logging. Same as DEBUG_HW=1.")]
    pub debug: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            input: PathBuf::from(LIBTAS_HOOKS_HEADER),
            format: HeaderFormat::Auto,
            prefix: SDL_PREFIX.to_owned(),
            output: PathBuf::from(DYNAPI_OUTPUT_PATH),
            const_name: DYNAPI_CONST_NAME.to_owned(),
            emit: EmitFormat::Rust,
            tidy: false,
            table_size: None,
            lookup: Vec::new(),
            check: false,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    pub tablesize: usize,
    pub patched: Vec<(usize, String)>,
    pub skipped: usize,
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: ExtractReport,
    pub table: Option<TablePlan>,
    pub lookups: Vec<(String, Option<usize>)>,
    pub written: Option<WriteOutcome>,
}

pub struct Generator {
    pub config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn matcher(&self) -> LineMatcher {
        let format = self.config.format.resolve(&self.config.input);
        LineMatcher::new(format, &self.config.prefix).tidy(self.config.tidy)
    }

    pub fn extract(&self) -> Result<ExtractReport> {
        let matcher = self.matcher();
        info!("reading {} as {} header", self.config.input.display(), matcher.format);
        let file = File::open(&self.config.input)
            .with_context(|| format!("could not open header {}", self.config.input.display()))?;
        let report = extract(BufReader::new(file), &matcher)
            .with_context(|| format!("could not parse {}", self.config.input.display()))?;
        if report.funcs.is_empty() {
            warn!("no lines in {} matched, is the format right?", self.config.input.display());
        }
        Ok(report)
    }

    pub fn render(&self, report: &ExtractReport) -> Result<String> {
        let contents = emit::render(&report.funcs, self.config.emit, &self.config.const_name)
            .context("could not serialize function list")?;
        Ok(contents)
    }

    pub fn plan_table(&self, report: &ExtractReport, tablesize: usize) -> TablePlan {
        let patched: Vec<(usize, String)> = report
            .funcs
            .within_table(tablesize)
            .map(|(i, func)| (i, func.to_owned()))
            .collect();
        for (i, func) in &patched {
            debug!("slot {}: {}", i, func);
        }
        let skipped = report.funcs.len() - patched.len();
        for (i, func) in report.funcs.iter().enumerate().skip(patched.len()) {
            debug!("skipping table index {} which contains {}", i, func);
        }
        println!("{} of {} functions fit a jump table of {}", patched.len(), report.funcs.len(), tablesize);
        TablePlan { tablesize, patched, skipped }
    }

    pub fn lookup(&self, report: &ExtractReport) -> Vec<(String, Option<usize>)> {
        let index = report.funcs.index();
        self.config
            .lookup
            .iter()
            .map(|name| {
                let slot = index.get(name).copied();
                match slot {
                    Some(slot) => println!("{} -> slot {}", name, slot),
                    None => warn!("{} is not in the list", name),
                }
                (name.clone(), slot)
            })
            .collect()
    }

    pub fn run(&self) -> Result<RunSummary> {
        let report = self.extract()?;
        println!("Found {} functions", report.funcs.len());
        let table = self.config.table_size.map(|tablesize| self.plan_table(&report, tablesize));
        let lookups = self.lookup(&report);
        let contents = self.render(&report)?;
        let output = &self.config.output;

        if self.config.check {
            let outcome = emit::check(output, &contents)
                .with_context(|| format!("could not read {}", output.display()))?;
            match outcome {
                CheckOutcome::UpToDate => println!("{} is up to date", output.display()),
                CheckOutcome::Stale => bail!("{} is out of date, rerun without --check", output.display()),
                CheckOutcome::Missing => bail!("{} does not exist, rerun without --check", output.display()),
            }
            return Ok(RunSummary { report, table, lookups, written: None });
        }

        let outcome = emit::write_if_changed(output, &contents)
            .with_context(|| format!("could not write {}", output.display()))?;
        match outcome {
            WriteOutcome::Written => println!("Wrote {}", output.display()),
            WriteOutcome::Unchanged => println!("{} unchanged", output.display()),
        }
        Ok(RunSummary { report, table, lookups, written: Some(outcome) })
    }
}
