use anyhow::Result;

use super::Context;

pub fn cmd_init(ctx: &Context) -> Result<()> {
    let handler = ctx.handler()?;

    if ctx.json {
        let report = serde_json::json!({
            "event": "init",
            "root": handler.root().display().to_string(),
            "out": handler.outpath().display().to_string(),
            "junk": handler.junkpath().display().to_string(),
        });
        println!("{report}");
    } else {
        println!("out:  {}", handler.outpath().display());
        println!("junk: {}", handler.junkpath().display());
    }
    Ok(())
}
