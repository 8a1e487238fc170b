// scf/src/commands/mapping.rs
//
// USE CASE: crosswalk between two frameworks, and native id resolution.

use miette::Result;

use super::Session;
use crate::render;

pub fn map(
    session: &Session,
    source: &str,
    target: &str,
    source_control: Option<&str>,
) -> Result<()> {
    let response = session
        .service()
        .map_frameworks(source, target, source_control)?;
    let display = session.config.display;
    session.emit(&response, |r| render::mapping(r, &display))
}

pub fn resolve(session: &Session, framework: &str, native_control: &str) -> Result<()> {
    let response = session
        .service()
        .resolve_native_control(framework, native_control)?;
    session.emit(&response, render::resolve)
}
