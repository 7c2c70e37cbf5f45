use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: Option<OutputFormat>) -> Result<()> {
    let config = ctx.config()?;

    match format {
        Some(OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        _ => {
            println!("# {}", ctx.config_path().display());
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
