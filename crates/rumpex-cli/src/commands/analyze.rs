//! One-shot analysis of a local image file.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use rumpex_core::AnalysisResult;
use rumpex_vision::{GeminiClient, DEFAULT_MODEL};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the image file to analyze
    pub image: PathBuf,

    /// Instruction overriding the built-in veterinary prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
        anyhow::anyhow!(
            "GOOGLE_API_KEY environment variable not set.\n\
             Set it with: export GOOGLE_API_KEY=your-key"
        )
    })?;
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("Failed to read image {}", args.image.display()))?;
    let payload = STANDARD.encode(&bytes);

    println!("{} Analyzing image: {}", "→".dimmed(), args.image.display());
    let client = GeminiClient::with_model(&api_key, &model);
    let result = client.analyze(&payload, args.prompt.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result_summary(&result);
    Ok(())
}

/// Print a human-readable summary of the assessment.
fn print_result_summary(result: &AnalysisResult) {
    println!();
    if !result.valido {
        println!("{} Imagen no evaluable", "✗".red().bold());
        if let Some(ref reason) = result.razon_invalidez {
            println!("  {}", reason);
        }
        if let Some(count) = result.numero_vacas_detectadas {
            println!("  {} Vacas detectadas: {}", "•".dimmed(), count);
        }
        return;
    }

    println!("{} Análisis completado", "✓".green().bold());
    if let Some(count) = result.numero_vacas_detectadas {
        println!("  {} Vacas detectadas: {}", "•".dimmed(), count);
    }
    if let Some(index) = result.vaca_analizada {
        println!("  {} Vaca analizada: #{}", "•".dimmed(), index);
    }
    if let Some(angle) = result.angulo_cm {
        println!("  {} Ángulo de grupa: {:.1}°", "•".dimmed(), angle);
    }
    if let Some(score) = result.puntaje_lineal {
        println!("  {} Puntaje lineal: {}/9", "•".dimmed(), score);
    }
    if let Some(category) = result.categoria {
        println!("  {} Categoría: {}", "•".dimmed(), category);
    }
    if let Some(ref advice) = result.recomendacion {
        println!();
        println!("  {}", advice.italic());
    }
}
