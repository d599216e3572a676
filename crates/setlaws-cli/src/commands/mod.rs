pub mod demo;
pub mod latex;
pub mod relations;
pub mod report;
pub mod verify;

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use setlaws_core::SetLawError;
use setlaws_verify::{SetSystem, VerificationReport};
use tracing::info;

use crate::config::{CliConfig, InputArgs};

/// Validated inputs for one command invocation.
pub struct Loaded {
    pub config: CliConfig,
    pub system: SetSystem,
}

pub fn load(input: &InputArgs) -> Result<Loaded, SetLawError> {
    let config = CliConfig::resolve(input)?;
    let system = config.system.to_system()?;
    info!(
        universe = %system.universe().label,
        subsets = system.subsets().len(),
        "set system loaded"
    );
    Ok(Loaded { config, system })
}

pub fn verify(loaded: &Loaded) -> Result<VerificationReport, SetLawError> {
    let report = setlaws_verify::verify_system(&loaded.system, &loaded.config.system.policy)?;
    info!(
        identities = report.results.len(),
        failures = report.failures().count(),
        hash = %report.analysis_hash,
        "verification finished"
    );
    Ok(report)
}

/// Writes `text` to `--out` or stdout, ending with a newline.
pub fn emit(out: Option<&Path>, text: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            let mut body = text.to_string();
            if !body.ends_with('\n') {
                body.push('\n');
            }
            fs::write(path, body)?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
