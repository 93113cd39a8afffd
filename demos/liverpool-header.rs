use env_logger::Env;
use header_gen::canvas::BLOG_HEADER;
use header_gen::layout::TextSpec;
use header_gen::{Background, Colour, FontLibrary, HeaderBuilder, HeaderError, LabelStyle};
use log::LevelFilter;

const FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/truetype/dejavu",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

fn main() -> Result<(), HeaderError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("HEADER_GEN_LOG"))
        .init();

    let mut fonts = FontLibrary::new().with_default_family("DejaVuSans");
    fonts.discover("Arial", &FONT_DIRS);
    fonts.discover("DejaVuSans", &FONT_DIRS);

    let liverpool_red = Colour::new_rgb_bytes(200, 16, 46);
    let style = LabelStyle::default()
        .with_text_colours(liverpool_red, Colour::new_rgb_bytes(100, 8, 23));

    let (raster, layout) = HeaderBuilder::new(&fonts, BLOG_HEADER)
        .background(Background::VerticalGradient {
            top: liverpool_red,
            bottom: Colour::new_rgb_bytes(168, 10, 30),
        })
        .style(style)
        .render(
            &TextSpec::new("Why Support Liverpool F.C?", "Arial", 64),
            &TextSpec::new("The Beautiful Game vs The Lazy Game", "Arial", 32),
        )?;

    log::info!(
        "title at {}, subtitle at {}",
        layout.title_font,
        layout.subtitle_font
    );
    raster.save("public/BL-6/liverpool-header.jpg")
}
