//! Viewing-distance recommendations.
//!
//! Prints the standards table for the full screen, and optionally for a
//! picture-in-picture region and a same-height letterbox sibling.

use std::path::Path;

use anyhow::Result;

use beam_core::{AspectRatio, ScreenGeometry};
use beam_viewing::{recommend, ContentDetailClass};

use crate::ViewingArgs;

pub fn run(args: ViewingArgs, settings_path: &Path) -> Result<()> {
    let mut settings = super::load_settings(settings_path)?;
    if let Some(d) = args.diagonal {
        settings.diagonal_inches = d;
    }
    if let Some(r) = &args.ratio {
        settings.aspect_ratio = r.clone();
    }
    let detail = super::parse_detail(&args.detail)?;

    let ratio = settings.aspect()?;
    let screen = ScreenGeometry::resolve(settings.diagonal_inches, &ratio)?;

    print_section(&format!("Full screen ({ratio})"), &screen, detail);

    if let Some(f) = args.area_factor {
        let pip = screen.scale(f)?;
        println!();
        print_section(
            &format!("{:.0}% content region ({ratio})", f * 100.0),
            &pip,
            detail,
        );
    }

    if let Some(sibling) = &args.letterbox {
        let sibling_ratio: AspectRatio = sibling.parse()?;
        let boxed = screen.with_ratio(&sibling_ratio);
        println!();
        print_section(
            &format!("Letterboxed content ({sibling_ratio})"),
            &boxed,
            detail,
        );
        if let Some(f) = args.area_factor {
            let boxed_pip = boxed.scale(f)?;
            println!();
            print_section(
                &format!("{:.0}% letterboxed region ({sibling_ratio})", f * 100.0),
                &boxed_pip,
                detail,
            );
        }
    }

    Ok(())
}

fn print_section(title: &str, screen: &ScreenGeometry, detail: ContentDetailClass) {
    println!("{title}:");
    println!("  Width:    {:.2} in", screen.width);
    println!("  Height:   {:.2} in", screen.height);
    println!("  Diagonal: {:.2} in", screen.diagonal);
    for range in recommend(screen, detail) {
        match range.min {
            Some(min) => println!(
                "  {:<16} {:.2} - {:.2} in ({} - {})",
                format!("{}:", range.standard),
                min,
                range.max,
                super::format_feet_inches(min),
                super::format_feet_inches(range.max),
            ),
            None => println!(
                "  {:<16} {:.2} in ({})",
                format!("{}:", range.standard),
                range.max,
                super::format_feet_inches(range.max),
            ),
        }
    }
}
