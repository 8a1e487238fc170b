// scf/src/commands/controls.rs
//
// USE CASE: single control look-up and keyword search.

use miette::Result;

use super::Session;
use crate::render;

pub fn get(session: &Session, control_id: &str, include_mappings: bool) -> Result<()> {
    let service = session.service();
    let view = service.get_control(control_id, include_mappings)?;
    session.emit(&view, |v| render::control(v, &service))
}

pub fn search(
    session: &Session,
    query: &str,
    frameworks: &[String],
    limit: Option<i64>,
) -> Result<()> {
    let response = session.service().search(query, frameworks, limit)?;
    session.emit(&response, render::search)
}
