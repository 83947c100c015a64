//! Generate social media content from the terminal.
//!
//! Reads the API key from the `GEMINI_API_KEY` environment variable.
//!
//! # Examples
//!
//! ```sh
//! # Five Instagram captions (the defaults)
//! contentcraft --brand "A small café in Bangalore" --niche Café \
//!   --goal "Promote a Diwali offer"
//!
//! # LinkedIn thread ideas in Hindi
//! contentcraft --platform linkedin --tone professional --content-type thread \
//!   --language hindi --count 3 --brand "B2B payroll SaaS" --niche SaaS \
//!   --goal "Launch a new product"
//!
//! # Inspect the prompt without calling the API
//! contentcraft --brand x --niche y --goal z --print-prompt
//! ```

use std::process;

use clap::Parser;
use contentcraft::prelude::*;

/// Generate captions, post ideas, and content plans with Gemini.
#[derive(Parser)]
#[command(name = "contentcraft")]
struct Cli {
    // ── Content settings ───────────────────────────────────────
    /// Platform the content is for
    #[arg(long, value_enum, default_value_t)]
    platform: Platform,

    /// Tone of voice
    #[arg(long, value_enum, default_value_t)]
    tone: Tone,

    /// Kind of content to produce
    #[arg(long, value_enum, default_value_t)]
    content_type: ContentType,

    /// Language the content is written in
    #[arg(long, value_enum, default_value_t)]
    language: Language,

    /// Number of ideas/captions (1 – 10)
    #[arg(long, default_value_t = PostCount::DEFAULT)]
    count: u8,

    // ── Brand details ──────────────────────────────────────────
    /// Describe your brand or client
    #[arg(long, default_value = "")]
    brand: String,

    /// Niche / industry
    #[arg(long, default_value = "")]
    niche: String,

    /// Goal of this content
    #[arg(long, default_value = "")]
    goal: String,

    // ── API ────────────────────────────────────────────────────
    /// Model to use (overrides CONTENTCRAFT_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// API base URL (overrides CONTENTCRAFT_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    // ── Output mode ────────────────────────────────────────────
    /// Print the prompt and exit without calling the API
    #[arg(long)]
    print_prompt: bool,
}

impl Cli {
    fn request(&self) -> Result<ContentRequest, String> {
        let count = PostCount::new(self.count).map_err(|e| e.to_string())?;
        Ok(
            ContentRequest::new(&self.brand, &self.niche, &self.goal)
                .with_platform(self.platform)
                .with_tone(self.tone)
                .with_content_type(self.content_type)
                .with_language(self.language)
                .with_count(count),
        )
    }

    fn config(&self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(base) = &self.api_base {
            config = config.with_api_base_url(base);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let request = match cli.request() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    if cli.print_prompt {
        match checked_prompt(&request) {
            Ok(prompt) => println!("{prompt}"),
            Err(e) => process::exit(report(&GenerateError::from(e))),
        }
        return;
    }

    let client = match cli.config().generator() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to create API client: {e}");
            process::exit(1);
        }
    };

    let generator = client.as_ref().map(|c| c as &dyn TextGenerator);
    match generate_content(generator, &request).await {
        Ok(content) => {
            println!("{}", content.text);
            eprintln!("\n{SUCCESS_MESSAGE}");
        }
        Err(e) => process::exit(report(&e)),
    }
}

/// Print a failure to stderr and return the exit code: 2 for warnings, 1 for errors.
fn report(e: &GenerateError) -> i32 {
    let (label, code) = match e.severity() {
        Severity::Warning => ("Warning", 2),
        Severity::Error => ("Error", 1),
    };
    eprintln!("{label}: {e}");
    if let GenerateError::Form(FormError::MissingFields(fields)) = e {
        for field in fields {
            eprintln!("  - {} is empty", field.label());
        }
    }
    code
}
