//! Minimum worthwhile screen for a seating distance.

use anyhow::Result;

use beam_core::AspectRatio;
use beam_viewing::minimum_screen_for;

use crate::ScreenSizeArgs;

pub fn run(args: ScreenSizeArgs) -> Result<()> {
    let ratio: AspectRatio = args.ratio.parse()?;
    let detail = super::parse_detail(&args.detail)?;
    let screen = minimum_screen_for(args.distance, &ratio, detail)?;

    println!(
        "Minimum {ratio} screen for {} content at {:.1} ft:",
        detail, args.distance
    );
    println!("  Height:   {:.2} in", screen.height);
    println!("  Width:    {:.2} in", screen.width);
    println!("  Diagonal: {:.2} in", screen.diagonal);

    Ok(())
}
