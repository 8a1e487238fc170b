// scf/src/commands/frameworks.rs
//
// USE CASE: framework discovery (registry listing, categories, per-framework controls).

use miette::Result;

use super::Session;
use crate::render;

pub fn list(session: &Session, category: Option<&str>, grouped: bool) -> Result<()> {
    let service = session.service();
    if grouped {
        let groups = service.frameworks_by_category();
        return session.emit(&groups, |g| render::framework_groups(g));
    }
    let response = service.list_frameworks(category)?;
    session.emit(&response, render::frameworks)
}

pub fn controls(session: &Session, framework: &str, include_descriptions: bool) -> Result<()> {
    let service = session.service();
    let response = service.framework_controls(framework, include_descriptions)?;
    let display = session.config.display;
    let engine = service.engine();
    session.emit(&response, |r| {
        render::framework_controls(r, &display, |id| {
            engine.get_control(id).map(|c| c.domain.as_str())
        })
    })
}
