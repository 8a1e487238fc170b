// scf/src/commands/status.rs
//
// USE CASE: dataset statistics (`info`) and liveness (`health`).

use miette::Result;

use super::Session;
use crate::render;

pub fn info(session: &Session) -> Result<()> {
    let response = session.service().info();
    session.emit(&response, render::info)
}

pub fn health(session: &Session) -> Result<()> {
    let report = session.service().health();
    session.emit(&report, render::health)
}
