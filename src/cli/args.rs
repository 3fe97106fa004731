use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pptscreenshot",
    about = "Export a presentation slide to an image through PowerPoint",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Print the version number and exit
    #[arg(long, default_value_t = false)]
    pub version: bool,

    /// Input presentation filepath
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input presentation filepath (used when --input is not given)
    #[arg(value_name = "INPUT")]
    pub positional_input: Option<PathBuf>,

    /// Output screenshot image filepath; the extension selects the format (default PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Output image width; 0 takes both sides from the slide master
    #[arg(long, default_value_t = 0)]
    pub width: u32,

    /// Output image height; 0 takes both sides from the slide master
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// 1-based slide to export, clamped to the presentation's slide count
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub slide: i32,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// `--input` wins over the positional argument.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().or(self.positional_input.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_input_wins() {
        let args =
            CliArgs::try_parse_from(["pptscreenshot", "--input", "a.pptx", "b.pptx", "-o", "x.png"])
                .unwrap();
        assert_eq!(args.input_path(), Some(&PathBuf::from("a.pptx")));
    }

    #[test]
    fn positional_input_is_fallback() {
        let args = CliArgs::try_parse_from(["pptscreenshot", "b.pptx", "--output", "x.png"]).unwrap();
        assert_eq!(args.input_path(), Some(&PathBuf::from("b.pptx")));
        assert_eq!(args.output, Some(PathBuf::from("x.png")));
    }

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["pptscreenshot"]).unwrap();
        assert!(!args.version);
        assert!(!args.force);
        assert_eq!((args.width, args.height, args.slide), (0, 0, 1));
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn version_parses_without_paths() {
        let args = CliArgs::try_parse_from(["pptscreenshot", "--version"]).unwrap();
        assert!(args.version);
    }

    #[test]
    fn negative_slide_is_accepted() {
        let args = CliArgs::try_parse_from(["pptscreenshot", "--slide", "-2"]).unwrap();
        assert_eq!(args.slide, -2);
    }

    #[test]
    fn negative_width_is_rejected() {
        assert!(CliArgs::try_parse_from(["pptscreenshot", "--width", "-5"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
