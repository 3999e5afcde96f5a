use std::path::Path;

use anyhow::Result;

use super::Context;

pub fn cmd_lines(ctx: &Context, file: &Path) -> Result<()> {
    let handler = ctx.handler()?;
    let lines = handler.get_lines(file)?;

    if ctx.json {
        println!("{}", serde_json::to_string(&lines)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
