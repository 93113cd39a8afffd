use env_logger::Env;
use header_gen::canvas::{Canvas, BANNER, WIDESCREEN};
use header_gen::layout::{SafeZone, TextSpec};
use header_gen::{
    colours, Background, Colour, FontLibrary, HeaderBuilder, HeaderError, LabelStyle,
    LayoutConfig, Point,
};
use log::LevelFilter;

fn banner(
    fonts: &FontLibrary,
    canvas: Canvas,
    day: usize,
    topic: &str,
) -> Result<(), HeaderError> {
    let config = LayoutConfig::default()
        .with_vertical_bias(0)
        .with_safe_zone(SafeZone::symmetric(0.1, 0.15));

    // nudge every other banner right so a series doesn't look stamped out
    let centre = canvas.centre();
    let anchor = if day % 2 == 0 {
        centre + Point::new(canvas.width() as i32 / 20, 0)
    } else {
        centre
    };

    // a more opaque box than the default veil
    let style = LabelStyle::default().with_box(
        Colour::new_rgba_bytes(241, 250, 238, 235),
        colours::WHITE,
        3,
    );

    let (raster, _) = HeaderBuilder::new(fonts, canvas)
        .background(Background::VerticalGradient {
            top: Colour::from_hex("#1d3557").unwrap_or(colours::SLATE),
            bottom: Colour::from_hex("#457b9d").unwrap_or(colours::INK),
        })
        .config(config)
        .style(style)
        .anchor(anchor)
        .render(
            &TextSpec::new(format!("Day {day}"), "Arial", 72),
            &TextSpec::new(topic, "Arial", 36),
        )?;

    raster.save(format!("public/series/day-{day}-{canvas}.png"))
}

fn main() -> Result<(), HeaderError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("HEADER_GEN_LOG"))
        .init();

    let mut fonts = FontLibrary::new().with_default_family("DejaVuSans");
    fonts.discover(
        "Arial",
        &["/usr/share/fonts/truetype/msttcorefonts", "/Library/Fonts"],
    );
    fonts.discover("DejaVuSans", &["/usr/share/fonts/truetype/dejavu"]);

    let topics = [
        "Percentiles and Quartiles".to_string(),
        "Binning and Deciles: Taming Continuous Chaos".to_string(),
        lipsum::lipsum_title(),
    ];
    for (i, topic) in topics.iter().enumerate() {
        for canvas in [BANNER, WIDESCREEN] {
            banner(&fonts, canvas, i + 7, topic)?;
        }
    }
    Ok(())
}
