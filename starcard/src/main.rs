use anyhow::Context;
use base64::Engine;
use clap::Parser;
use starcard_rs::starcard_canvas::FontConfig;
use starcard_rs::{compose_with_options, CardError, ErrorKind, FsAssetResolver, RenderOptions, ShowcasePayload};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// starcard: Render a Honkai: Star Rail character stat card from showcase data
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the showcase JSON payload, or - to read from stdin
    #[clap(short, long, default_value = "-")]
    pub input: String,

    /// Zero-based index of the displayed character to render
    #[clap(short, long, default_value_t = 0)]
    pub character: usize,

    /// Root of the asset directory
    #[clap(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// File under the asset root's common/ directory to use as the avatar
    #[clap(long)]
    pub rounded_photo: Option<String>,

    /// Directory the card is written to as <uid>-<nickname>.png
    #[clap(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Print the PNG as base64 to stdout instead of writing a file
    #[clap(long)]
    pub base64: bool,

    /// Only use the fonts bundled with the assets
    #[clap(long)]
    pub no_system_fonts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let payload = read_payload(&args.input)?;
    let character = payload.select(args.character)?;

    let options = RenderOptions {
        fonts: FontConfig {
            load_system_fonts: !args.no_system_fonts,
            ..Default::default()
        },
        avatar_override: args.rounded_photo.clone(),
        ..Default::default()
    };
    let resolver = FsAssetResolver::new(&args.assets);
    let card = compose_with_options(&payload.player, character, &resolver, &options)?;
    let png = card.to_png()?;

    if args.base64 {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        std::io::stdout()
            .write_all(encoded.as_bytes())
            .context("Failed to write card to stdout")?;
    } else {
        let output = output_path(&args.output_dir, &payload.player.uid, &payload.player.nickname);
        std::fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("Failed to create output directory {}", args.output_dir.display())
        })?;
        std::fs::write(&output, png)
            .with_context(|| format!("Failed to write card to {}", output.display()))?;
        println!("Image saved to {}", output.display());
    }
    Ok(())
}

fn read_payload(input: &str) -> anyhow::Result<ShowcasePayload> {
    let payload = if input == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read showcase payload from stdin")?;
        ShowcasePayload::from_json(&json)?
    } else {
        let file = std::fs::File::open(input)
            .with_context(|| format!("Failed to read input file: {input}"))?;
        ShowcasePayload::from_reader(std::io::BufReader::new(file))?
    };
    Ok(payload)
}

/// `<uid>-<nickname>.png`, with path separators in the nickname replaced.
fn output_path(dir: &Path, uid: &str, nickname: &str) -> PathBuf {
    let nickname: String = nickname
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    dir.join(format!("{uid}-{nickname}.png"))
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CardError>().map(CardError::kind) {
        Some(ErrorKind::Range) => 2,
        Some(ErrorKind::DataShape) => 3,
        Some(ErrorKind::AssetMissing) => 4,
        Some(ErrorKind::Render) | None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_sanitizes_nickname() {
        assert_eq!(
            output_path(Path::new("out"), "801341249", "a/b\\c"),
            PathBuf::from("out/801341249-a_b_c.png")
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&CardError::EmptyShowcase.into()), 2);
        assert_eq!(exit_code(&CardError::DataShape("x".into()).into()), 3);
        assert_eq!(
            exit_code(
                &CardError::AssetMissing {
                    key: "star".into(),
                    reason: "gone".into()
                }
                .into()
            ),
            4
        );
        assert_eq!(exit_code(&anyhow::anyhow!("io")), 1);
    }
}
