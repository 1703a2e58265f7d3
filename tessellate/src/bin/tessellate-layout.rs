use anyhow::{anyhow, Result};
use clap::{arg, command, value_parser};
use tessellate::utils::{log, parse_area};
use tessellate_core::layouts::{Layout, LayoutParams};
use tessellate_core::models::Xyhw;

fn main() -> Result<()> {
    let matches = command!("Tessellate Layout")
        .about("Prints the rectangles a layout gives to a number of tiles, without margins or gaps")
        .args(&[
            arg!(-l --layout <NAME> "Layout to preview: horizontal, vertical or spiral.")
                .value_parser(value_parser!(Layout)),
            arg!(-t --tiles <COUNT> "Number of tiles.").value_parser(value_parser!(usize)),
            arg!(-a --area [AREA] "Area to fill as x,y,w,h.")
                .value_parser(parse_area)
                .default_value("0,0,1920,1080"),
            arg!(-s --split [RATIO] "Split ratio.")
                .value_parser(value_parser!(f64))
                .default_value("0.5"),
            arg!(-m --masters [COUNT] "Master count.")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        ])
        .get_matches();

    log::setup_logging("warn")?;

    let layout = *matches
        .get_one::<Layout>("layout")
        .ok_or_else(|| anyhow!("missing --layout"))?;
    let tiles = *matches
        .get_one::<usize>("tiles")
        .ok_or_else(|| anyhow!("missing --tiles"))?;
    let area = *matches
        .get_one::<Xyhw>("area")
        .ok_or_else(|| anyhow!("missing --area"))?;
    let split = matches.get_one::<f64>("split").copied().unwrap_or(0.5);
    let masters = matches.get_one::<usize>("masters").copied().unwrap_or(1);

    let params = LayoutParams::new(split, masters);
    tracing::debug!("Previewing {} with {:?} on {:?}", layout, params, area);
    let rects = layout.arrange(&vec![(); tiles], &area, &params);
    for (index, rect) in rects.iter().enumerate() {
        println!("{index}: x={} y={} w={} h={}", rect.x, rect.y, rect.w, rect.h);
    }
    Ok(())
}
