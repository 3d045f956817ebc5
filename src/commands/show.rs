use std::path::Path;

use anyhow::Result;

use stardata::presentation::output::{emit, render_loaded, LoadedEvent};
use stardata::presentation::Section;

use super::Context;

pub fn cmd_show(ctx: &Context, file: Option<&Path>, section: Section) -> Result<()> {
    let path = ctx.data_file(file);
    let report = ctx
        .catalog
        .load(&path)
        .map_err(|err| ctx.fail("show", err))?;

    ctx.diagnostics.load_summary(&report);

    if ctx.json {
        emit(&LoadedEvent::new(&report, section))?;
    } else {
        println!("{}", render_loaded(&report, section));
    }
    Ok(())
}
