//! Interactive shell
//!
//! Menu-driven loop over the catalog: write one star to a file, read a file
//! back and show its tables, or quit after confirmation. Bad input and I/O
//! failures are reported and the loop continues.

use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;

use stardata::parser::LINE_FORMAT_HINT;
use stardata::presentation::output::{render_loaded, render_saved};
use stardata::presentation::Section;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("interactive mode needs a terminal; see 'stardata --help' for commands");
    }

    println!("Format for a new star: '{}'\n", LINE_FORMAT_HINT);

    let items = vec!["Write a new star", "Read a star file", "Quit"];

    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => write_star(ctx)?,
            1 => read_file(ctx)?,
            _ => {
                if Confirm::new()
                    .with_prompt("Are you sure you wish to quit?")
                    .default(false)
                    .interact()?
                {
                    return Ok(());
                }
            }
        }
    }
}

fn write_star(ctx: &Context) -> Result<()> {
    let line: String = Input::new().with_prompt("Star").interact_text()?;

    let entry = match ctx.catalog.parse(&line) {
        Ok(entry) => entry,
        Err(err) => {
            println!("Invalid input format: {err}\n");
            return Ok(());
        }
    };

    let path = prompt_path(ctx, "Save to")?;
    match ctx.catalog.save(&entry, &path) {
        Ok(()) => println!("{}\n", render_saved(&entry, &path)),
        Err(err) => println!("Error saving data: {err}\n"),
    }
    Ok(())
}

fn read_file(ctx: &Context) -> Result<()> {
    let path = prompt_path(ctx, "Read from")?;
    match ctx.catalog.load(&path) {
        Ok(report) => {
            ctx.diagnostics.load_summary(&report);
            println!("{}\n", render_loaded(&report, Section::All));
        }
        Err(err) => println!("Error reading data: {err}\n"),
    }
    Ok(())
}

fn prompt_path(ctx: &Context, prompt: &str) -> Result<PathBuf> {
    let path: String = Input::new()
        .with_prompt(prompt)
        .default(ctx.data_file(None).display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(path))
}
