use anyhow::Context;
use clap::Parser;
use qr_page::bitmap::{self, Bitmap};
use qr_page::logging::init_logging;
use qr_page::{ErrorCorrection, PageConfig, PageController, PageError, PageView, QrCodec};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Widest terminal preview, in characters per row (two per sample)
const PREVIEW_COLUMNS: u32 = 48;

#[derive(Parser)]
#[command(name = "qr_page", version, about = "Generate and decode QR codes from the terminal")]
struct Cli {
    /// Generated image width in pixels
    #[arg(long)]
    width: Option<usize>,
    /// Generated image height in pixels
    #[arg(long)]
    height: Option<usize>,
    /// Quiet zone in modules
    #[arg(long)]
    margin: Option<usize>,
    /// Error correction level (L, M, Q, H)
    #[arg(long)]
    error_correction: Option<ErrorCorrection>,
    /// Also write every displayed image to this PNG file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Scan a picture for a barcode before reading commands
    #[arg(long)]
    scan: Option<PathBuf>,
}

impl Cli {
    fn page_config(&self) -> PageConfig {
        let mut config = PageConfig::from_env();
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(level) = self.error_correction {
            config.error_correction = level;
        }
        config
    }
}

/// Terminal rendition of the page
struct ConsoleView {
    output: Option<PathBuf>,
}

impl PageView for ConsoleView {
    fn show_notice(&mut self, message: &str) {
        println!("[!] {}", message);
    }

    fn focus_input(&mut self) {
        println!("> generate <text>");
    }

    fn show_image(&mut self, bitmap: &Bitmap) {
        print_preview(bitmap);
        if let Some(path) = &self.output {
            match bitmap.save(path) {
                Ok(()) => println!("Image written to {}", path.display()),
                Err(err) => tracing::error!(path = %path.display(), "could not save image: {err}"),
            }
        }
    }

    fn show_decoded_text(&mut self, text: &str) {
        println!("Decoded: {}", text);
    }
}

fn print_preview(bitmap: &Bitmap) {
    let (width, height) = bitmap.dimensions();
    let step = width.div_ceil(PREVIEW_COLUMNS).max(1);
    let mut y = step / 2;
    while y < height {
        let mut line = String::new();
        let mut x = step / 2;
        while x < width {
            let [r, g, b, _] = bitmap.get_pixel(x, y).0;
            let dark = (r as u32 + g as u32 + b as u32) < 384;
            line.push_str(if dark { "██" } else { "  " });
            x += step;
        }
        println!("{}", line);
        y += step;
    }
    println!("({}x{})", width, height);
}

fn print_help() {
    println!("Commands:");
    println!("  generate <text>   encode text as a QR code and show it");
    println!("  decode            decode the last generated image");
    println!("  scan <path>       look for a QR code in a picture file");
    println!("  help              show this list");
    println!("  quit              exit");
    println!("Everything after 'generate ' is encoded exactly as typed, spaces included.");
}

fn report(result: Result<(), PageError>) {
    match result {
        Ok(()) | Err(PageError::EmptyInput) => {}
        Err(err) => {
            tracing::error!("action failed: {err}");
            eprintln!("error: {}", err);
        }
    }
}

fn scan_file(page: &mut PageController<QrCodec, ConsoleView>, path: &Path) {
    match bitmap::load(path) {
        Ok(picture) => report(page.scan_image(&picture).map(|_| ())),
        Err(err) => {
            tracing::error!(path = %path.display(), "could not load picture: {err}");
            eprintln!("error: {}", err);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging().context("failed to initialize logging")?;

    let config = cli.page_config();
    tracing::debug!(?config, "page configuration");
    let view = ConsoleView {
        output: cli.output.clone(),
    };
    let mut page = PageController::new(QrCodec::new(), view, &config);

    if let Some(path) = &cli.scan {
        scan_file(&mut page, path);
    }

    print_help();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let (command, rest) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };
        match command {
            "generate" | "g" => report(page.generate_code(rest)),
            "decode" | "d" => report(page.decode_code().map(|_| ())),
            "scan" | "s" => scan_file(&mut page, Path::new(rest.trim())),
            "help" | "h" => print_help(),
            "quit" | "q" | "exit" => break,
            "" => {}
            other => println!("Unknown command '{}', type 'help'", other),
        }
    }

    Ok(())
}
