//! Improvement levers for a target contrast ratio.
//!
//! Evaluates the photometric model for the current setup, then solves
//! the contrast relation backward for each input lever.

use std::path::Path;

use anyhow::Result;

use beam_core::{units, ScreenGeometry};
use beam_photometry::{compute, suggest, PhotometricInputs};

use crate::SuggestArgs;

pub fn run(args: SuggestArgs, settings_path: &Path) -> Result<()> {
    let mut settings = super::load_settings(settings_path)?;
    if let Some(d) = args.diagonal {
        settings.diagonal_inches = d;
    }
    if let Some(r) = &args.ratio {
        settings.aspect_ratio = r.clone();
    }
    if let Some(l) = args.lumens {
        settings.lumens = l;
    }
    if let Some(g) = args.gain {
        settings.screen_gain = g;
    }
    if let Some(a) = args.ambient {
        settings.ambient_lux = a;
    }

    let alr_ambient = args
        .alr_ambient
        .unwrap_or_else(|| 1.0 - settings.alr_percentage / 100.0);
    let area = match args.area {
        Some(a) => a,
        None => {
            let ratio = settings.aspect()?;
            ScreenGeometry::resolve(settings.diagonal_inches, &ratio)?
                .rescale(units::METERS_PER_INCH)
                .area
        }
    };

    let inputs = PhotometricInputs {
        projector_lumens: settings.lumens,
        screen_gain: settings.screen_gain,
        color_factor: settings.color_factor,
        ambient_lux: settings.ambient_lux,
        alr_ambient,
        alr_projector: args.alr_projector,
        screen_area: area,
    };
    let photo = compute(&inputs)?;
    let levers = suggest(args.target, &photo, alr_ambient)?;

    println!("Current system contrast: {}", photo.system_contrast_ratio);
    println!();
    println!("To reach {:.1}:1, change one of:", args.target);
    println!(
        "  Ambient light ceiling:     {:.1} lux (now {:.1})",
        levers.max_ambient_lux, settings.ambient_lux
    );
    println!(
        "  Projector output:          {:.1} lm (now {:.1})",
        levers.required_projector_lumens, settings.lumens
    );
    println!(
        "  ALR remaining fraction:    {:.3} (now {:.3})",
        levers.required_alr_ambient, alr_ambient
    );

    Ok(())
}
