//! Subcommand implementations.
//!
//! Each command renders its output into a [`Report`] instead of printing, so
//! `main` owns all I/O and exit codes.

use std::fmt::Write as _;

use m2_ir::TokenKind;
use m2_recovery::{
    audit, entries, sets_containing, InvalidResyncSetId, ResyncEntry, ResyncSetId,
};
use tracing::{debug, warn};

/// Rendered command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub success: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Report {
            output,
            success: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidId(#[from] InvalidResyncSetId),
    #[error("unknown recovery situation `{0}`")]
    UnknownSituation(String),
    #[error("unknown token `{0}`")]
    UnknownToken(String),
}

fn write_entry(out: &mut String, entry: &ResyncEntry) {
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:>2}  {:<34} {}",
        entry.id().ordinal(),
        entry.name(),
        entry.set()
    );
}

/// Resolve a situation given by ordinal or by name.
fn resolve(situation: &str) -> Result<ResyncSetId, CliError> {
    match situation.parse::<i64>() {
        Ok(ordinal) => Ok(ResyncSetId::try_from(ordinal)?),
        Err(_) => ResyncSetId::from_name(situation)
            .ok_or_else(|| CliError::UnknownSituation(situation.to_owned())),
    }
}

pub fn list() -> Report {
    debug!(entries = entries().len(), "listing resync registry");
    let mut out = String::new();
    for entry in entries() {
        write_entry(&mut out, entry);
    }
    Report::ok(out)
}

pub fn show(situation: &str) -> Result<Report, CliError> {
    let id = resolve(situation)?;
    debug!(%id, ordinal = id.ordinal(), "showing resync set");
    let mut out = String::new();
    write_entry(&mut out, id.entry());
    Ok(Report::ok(out))
}

pub fn which(token: &str) -> Result<Report, CliError> {
    let kind = TokenKind::from_name(token).ok_or_else(|| CliError::UnknownToken(token.to_owned()))?;
    let mut out = String::new();
    let mut found = 0usize;
    for id in sets_containing(kind) {
        found += 1;
        let _ = writeln!(out, "{:>2}  {}", id.ordinal(), id.name());
    }
    debug!(%kind, found, "looked up sets containing token");
    if found == 0 {
        let _ = writeln!(out, "no recovery situation resumes at `{kind}`");
    }
    Ok(Report::ok(out))
}

pub fn check() -> Report {
    let violations = audit(entries());
    let mut out = String::new();
    for violation in &violations {
        warn!(%violation, "registry invariant violated");
        let _ = writeln!(out, "FAIL {violation}");
    }
    if violations.is_empty() {
        let _ = writeln!(out, "ok: {} resync sets verified", entries().len());
    }
    Report {
        output: out,
        success: violations.is_empty(),
    }
}
