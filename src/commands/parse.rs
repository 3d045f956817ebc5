use anyhow::Result;

use stardata::presentation::output::{emit, ParsedEvent};
use stardata::StarDataError;

use super::Context;

pub fn cmd_parse(ctx: &Context, line: &str) -> Result<()> {
    let entry = ctx
        .catalog
        .parse(line)
        .map_err(|err| ctx.fail("parse", StarDataError::from(err)))?;

    if ctx.json {
        emit(&ParsedEvent::new(&entry))?;
    } else {
        println!("{entry}");
    }
    Ok(())
}
