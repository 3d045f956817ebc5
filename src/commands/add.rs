use std::path::Path;

use anyhow::Result;

use stardata::presentation::output::{emit, render_saved, SavedEvent};
use stardata::StarDataError;

use super::Context;

pub fn cmd_add(ctx: &Context, line: &str, file: Option<&Path>) -> Result<()> {
    let entry = ctx
        .catalog
        .parse(line)
        .map_err(|err| ctx.fail("add", StarDataError::from(err)))?;

    let path = ctx.data_file(file);
    ctx.catalog
        .save(&entry, &path)
        .map_err(|err| ctx.fail("add", err))?;
    ctx.diagnostics
        .info(format!("appended 1 entry to {}", path.display()));

    if ctx.json {
        emit(&SavedEvent::new(&path, &entry))?;
    } else {
        println!("{}", render_saved(&entry, &path));
    }
    Ok(())
}
