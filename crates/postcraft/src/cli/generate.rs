//! `generate` command handler.

use super::commands::{GenerateArgs, OutputFormat};
use postcraft::{GenerationRequest, PostcraftConfig, PostcraftResult, build_pipeline, render_post, to_json};

/// Generate one post and print it.
pub async fn generate_post(config: &PostcraftConfig, args: GenerateArgs) -> PostcraftResult<()> {
    let request = GenerationRequest::parse(
        &args.topic,
        &args.length,
        &args.platform,
        &args.tone,
        &args.language,
    )?;

    let pipeline = build_pipeline(config).await?;
    let post = pipeline.generate(&request).await?;

    match args.format {
        OutputFormat::Human => println!("{}", render_post(&post)),
        OutputFormat::Json => println!("{}", to_json(&post)?),
    }

    Ok(())
}
