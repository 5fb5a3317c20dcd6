//! Nit-level maximum-contrast calculator.
//!
//! The percentage-based sibling of `report`: works from ALR rejection
//! and lumen reduction percentages (0-100, as profiles quote them) and
//! reports whole-nit black/white levels with millimeter screen
//! dimensions.

use std::path::Path;

use anyhow::Result;

use beam_core::{units, ScreenGeometry};
use beam_photometry::{
    apply_alr_rejection, apply_lumen_reduction, compute_nit_levels, NitLevelInputs,
};

use crate::ContrastArgs;

pub fn run(args: ContrastArgs, settings_path: &Path) -> Result<()> {
    let mut settings = super::load_settings(settings_path)?;
    let db = super::load_database(args.db.as_deref())?;
    super::apply_profiles(
        &mut settings,
        &db,
        args.screen.as_deref(),
        args.projector.as_deref(),
    );

    if let Some(d) = args.diagonal {
        settings.diagonal_inches = d;
    }
    if let Some(r) = &args.ratio {
        settings.aspect_ratio = r.clone();
    }
    if let Some(l) = args.lumens {
        settings.lumens = l;
    }
    if let Some(p) = args.reduction {
        settings.lumen_reduction_percentage = p;
    }
    if let Some(a) = args.ambient {
        settings.ambient_lux = a;
    }
    if let Some(p) = args.alr {
        settings.alr_percentage = p;
    }
    if let Some(g) = args.gain {
        settings.screen_gain = g;
    }
    if let Some(c) = args.color_factor {
        settings.color_factor = c;
    }

    let ratio = settings.aspect()?;
    let screen = ScreenGeometry::resolve(settings.diagonal_inches, &ratio)?;
    let screen_m = screen.rescale(units::METERS_PER_INCH);

    let inputs = NitLevelInputs {
        effective_lumens: apply_lumen_reduction(
            settings.lumens,
            settings.lumen_reduction_percentage,
        )?,
        effective_ambient_lux: apply_alr_rejection(settings.ambient_lux, settings.alr_percentage)?,
        screen_gain: settings.screen_gain,
        color_factor: settings.color_factor,
        screen_area: screen_m.area,
    };
    tracing::debug!(
        effective_lumens = inputs.effective_lumens,
        effective_ambient = inputs.effective_ambient_lux,
        "reduced photometric inputs"
    );
    let levels = compute_nit_levels(&inputs)?;

    println!("Results:");
    println!("  Max screen black level: {} nit", levels.black_level);
    println!(
        "  Screen width: {} mm",
        units::inches_to_mm(screen.width).ceil() as i64
    );
    println!(
        "  Screen height: {} mm",
        units::inches_to_mm(screen.height).ceil() as i64
    );
    println!("  Screen area: {:.2} m\u{b2}", screen_m.area);
    println!("  Max screen white level: {} nit", levels.white_level);
    println!("  Max possible contrast ratio: {:.1}:1", levels.contrast_ratio);

    Ok(())
}
